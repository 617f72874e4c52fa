use dioxus::prelude::*;

use crate::content::models::Partner;
use crate::content::use_section_content;
use crate::t;

/// Press logos on a continuously scrolling strip (CSS marquee).
#[component]
pub fn FeaturedIn() -> Element {
    let content = use_section_content::<Partner>();
    let partners = content.items.read();

    rsx! {
        section { class: "featured-in",
            h2 { class: "featured-in__title", {t!("featured-title")} }
            div { class: "featured-in__strip",
                div { class: "featured-in__track",
                    // Rendered twice so the loop has no visible seam.
                    for pass in 0..2 {
                        for partner in partners.iter() {
                            img {
                                key: "{pass}-{partner.id}",
                                class: "featured-in__logo",
                                src: "{partner.logo}",
                                alt: "{partner.name}",
                                aria_hidden: pass > 0,
                            }
                        }
                    }
                }
            }
        }
    }
}
