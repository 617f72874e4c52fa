use dioxus::prelude::*;

use crate::animation::{use_animations, use_reveal};
use crate::content::models::ServiceCard;
use crate::content::use_section_content;
use crate::detail;
use crate::navigation::{sections, use_section_anchor, use_site_nav, NavTarget, SitePage};
use crate::t;

#[component]
pub fn Services() -> Element {
    let anchor = use_section_anchor(sections::SERVICES);
    let reveal = use_reveal();
    let animations = use_animations();
    let nav = use_site_nav();
    let content = use_section_content::<ServiceCard>();

    rsx! {
        section { id: anchor, class: "services", aria_busy: content.is_loading(),
            h2 { class: "section-title", {t!("services-title")} }
            div { class: "services__grid",
                for (index, card) in content.items.read().iter().enumerate() {
                    article {
                        key: "{card.id}",
                        class: "service-card {reveal}",
                        style: "transition-delay: {animations.stagger_delay_ms(index)}ms;",
                        img { class: "service-card__image", src: "{card.image}", alt: "{card.name}" }
                        div { class: "service-card__body",
                            h3 { class: "service-card__title", "{card.name}" }
                            p { class: "service-card__text", "{card.description}" }
                            button {
                                class: "button button--ghost",
                                onclick: {
                                    let data = detail::payload_for(card.detail.as_ref());
                                    move |_| nav.follow(NavTarget::Page(SitePage::Service { data: data.clone() }))
                                },
                                {t!("services-read-more")}
                            }
                        }
                    }
                }
            }
            div { class: "services__footer",
                p { {t!("services-cta")} }
                button {
                    class: "button button--primary",
                    onclick: move |_| nav.follow(NavTarget::section(sections::CONTACT)),
                    {t!("cta-book")}
                }
            }
        }
    }
}
