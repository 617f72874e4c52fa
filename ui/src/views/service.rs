use dioxus::prelude::*;

use crate::components::YouTubeEmbed;
use crate::detail;
use crate::navigation::{sections, use_site_nav, NavTarget};
use crate::t;

/// Treatment page built from the record carried in `data`. Missing or
/// unreadable data shows the sample treatment instead of an error.
#[component]
pub fn ServicesPage(data: String) -> Element {
    let nav = use_site_nav();
    let service = detail::service_detail(&data);

    rsx! {
        article { class: "page detail-page",
            header { class: "detail-page__hero",
                img { class: "detail-page__image", src: "{service.image}", alt: "{service.title}" }
                h1 { class: "detail-page__title", "{service.title}" }
                p { class: "detail-page__summary", "{service.summary}" }
            }
            div { class: "detail-page__body",
                for (i, paragraph) in service.body.split("\n\n").enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }
            if !service.preparation.is_empty() {
                section { class: "detail-page__list",
                    h2 { {t!("detail-preparation")} }
                    ul {
                        for (i, step) in service.preparation.iter().enumerate() {
                            li { key: "{i}", "{step}" }
                        }
                    }
                }
            }
            if !service.aftercare.is_empty() {
                section { class: "detail-page__list",
                    h2 { {t!("detail-aftercare")} }
                    ul {
                        for (i, step) in service.aftercare.iter().enumerate() {
                            li { key: "{i}", "{step}" }
                        }
                    }
                }
            }
            if let Some(video_id) = service.video_id.clone() {
                YouTubeEmbed { video_id, title: service.title.clone() }
            }
            div { class: "detail-page__actions",
                button {
                    class: "button button--primary",
                    onclick: move |_| nav.follow(NavTarget::section(sections::CONTACT)),
                    {t!("cta-book")}
                }
                button {
                    class: "button button--ghost",
                    onclick: move |_| nav.follow(NavTarget::section(sections::SERVICES)),
                    {t!("detail-back-services")}
                }
            }
        }
    }
}
