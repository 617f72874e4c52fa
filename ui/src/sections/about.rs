use dioxus::prelude::*;

use crate::animation::use_reveal;
use crate::content::models::{Feature, DEFAULT_PORTRAIT};
use crate::content::use_section_content;
use crate::navigation::{sections, use_section_anchor};
use crate::t;

const CLINIC_PHOTO: &str = "/clinic.jpg";

/// "Our clinic" feature blocks beside a clinic photo, then the expert care
/// panel with the lead dentist.
#[component]
pub fn About() -> Element {
    let anchor = use_section_anchor(sections::ABOUT);
    let reveal = use_reveal();
    let features = use_section_content::<Feature>();

    rsx! {
        section { id: anchor, class: "about {reveal}", aria_busy: features.is_loading(),
            div { class: "about__row",
                div { class: "about__copy",
                    h2 { class: "section-title", {t!("about-title")} }
                    p { class: "about__lead", {t!("about-lead")} }
                    div { class: "about__features",
                        for feature in features.items.read().iter() {
                            div { key: "{feature.id}", class: "about__feature",
                                h3 { "{feature.name}" }
                                p { "{feature.description}" }
                            }
                        }
                    }
                }
                img { class: "about__photo", src: CLINIC_PHOTO, alt: t!("about-title") }
            }
            div { class: "about__row about__row--reverse",
                img { class: "about__photo", src: DEFAULT_PORTRAIT, alt: "Dr. Samiullah" }
                div { class: "about__copy",
                    h2 { class: "section-title", {t!("about-expert-title")} }
                    p { class: "about__lead", {t!("about-expert-lead")} }
                }
            }
        }
    }
}
