use dioxus::prelude::*;

use crate::animation::use_reveal;
use crate::content::fixtures;
use crate::content::models::ClinicInfo;
use crate::content::use_section_content;
use crate::core::format;
use crate::navigation::{sections, use_site_nav, NavTarget};
use crate::t;

#[component]
pub fn Cta() -> Element {
    let reveal = use_reveal();
    let nav = use_site_nav();
    let clinic = use_section_content::<ClinicInfo>();
    let info = clinic
        .items
        .read()
        .first()
        .cloned()
        .unwrap_or_else(fixtures::clinic_info);

    rsx! {
        section { class: "cta {reveal}",
            div { class: "cta__inner",
                h2 { class: "cta__title", {t!("cta-title")} }
                p { class: "cta__text", {t!("cta-text")} }
                div { class: "cta__actions",
                    button {
                        class: "button button--light",
                        onclick: move |_| nav.follow(NavTarget::section(sections::CONTACT)),
                        {t!("cta-book")}
                    }
                    if !info.phone.is_empty() {
                        a {
                            class: "button button--outline",
                            href: format::tel_href(&info.phone),
                            {t!("cta-call", phone = info.phone.clone())}
                        }
                    }
                }
                if !info.stats.is_empty() {
                    div { class: "cta__stats",
                        for stat in info.stats.iter() {
                            div { key: "{stat.label}", class: "cta__stat",
                                span { class: "cta__stat-value", "{stat.value}" }
                                span { class: "cta__stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
