use dioxus::prelude::*;

use crate::content::fixtures;
use crate::content::models::ClinicInfo;
use crate::content::use_section_content;
use crate::core::format;
use crate::navigation::{page_link, sections, use_site_nav, NavTarget, SitePage};
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let nav = use_site_nav();
    let clinic = use_section_content::<ClinicInfo>();
    let info = clinic
        .items
        .read()
        .first()
        .cloned()
        .unwrap_or_else(fixtures::clinic_info);

    let quick_links = vec![
        (t!("nav-home"), NavTarget::Top),
        (t!("nav-about"), NavTarget::section(sections::ABOUT)),
        (t!("nav-services"), NavTarget::section(sections::SERVICES)),
        (t!("nav-testimonials"), NavTarget::section(sections::TESTIMONIALS)),
        (t!("nav-faq"), NavTarget::section(sections::FAQ)),
        (t!("nav-contact"), NavTarget::section(sections::CONTACT)),
    ];
    let service_names: Vec<String> = fixtures::services().into_iter().map(|s| s.name).collect();
    let address = info.locations.first().map(|l| l.address.clone());

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__grid",
                div { class: "site-footer__brand",
                    span { class: "site-footer__name", "{info.name}" }
                    p { {t!("footer-about")} }
                    if !info.socials.is_empty() {
                        ul { class: "site-footer__socials",
                            for social in info.socials.iter() {
                                li { key: "{social.network.label()}",
                                    a { href: "{social.url}", target: "_blank", rel: "noopener noreferrer",
                                        "{social.network.label()}"
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "site-footer__column",
                    h4 { {t!("footer-services")} }
                    ul {
                        for name in service_names {
                            li { key: "{name}",
                                button {
                                    class: "site-footer__link",
                                    onclick: move |_| nav.follow(NavTarget::section(sections::SERVICES)),
                                    "{name}"
                                }
                            }
                        }
                    }
                }

                div { class: "site-footer__column",
                    h4 { {t!("footer-quick-links")} }
                    ul {
                        for (label, target) in quick_links {
                            li { key: "{label}",
                                button {
                                    class: "site-footer__link",
                                    onclick: move |_| nav.follow(target.clone()),
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                div { class: "site-footer__column",
                    h4 { {t!("footer-contact")} }
                    ul { class: "site-footer__contact",
                        if let Some(address) = address {
                            li { "{address}" }
                        }
                        if !info.phone.is_empty() {
                            li { a { href: format::tel_href(&info.phone), "{info.phone}" } }
                        }
                        if !info.email.is_empty() {
                            li { a { href: format::mailto_href(&info.email), "{info.email}" } }
                        }
                        for line in format::timing_lines(&info.timings) {
                            li { class: "site-footer__hours", "{line}" }
                        }
                    }
                }
            }

            div { class: "site-footer__bottom",
                span { {t!("footer-rights")} }
                {page_link(SitePage::Contact, "site-footer__link", &t!("nav-contact"))}
            }
        }
    }
}
