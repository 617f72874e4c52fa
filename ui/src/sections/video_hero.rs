use dioxus::prelude::*;

use crate::content::fixtures;
use crate::content::models::HeroVideo;
use crate::content::use_section_content;
use crate::core::platform::use_viewport;
use crate::navigation::{use_site_nav, NavTarget};

const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Looping background video with a headline and call to action.
#[component]
pub fn VideoHero() -> Element {
    let content = use_section_content::<HeroVideo>();
    let viewport = use_viewport();
    let nav = use_site_nav();

    let video = content
        .items
        .read()
        .first()
        .cloned()
        .unwrap_or_else(fixtures::hero_video);
    let src = if viewport().width < DESKTOP_MIN_WIDTH {
        video.mobile_url.clone()
    } else {
        video.desktop_url.clone()
    };
    let title_link = video.title_link.clone();
    let button_link = video.button_link.clone();

    rsx! {
        section { class: "video-hero",
            video {
                class: "video-hero__video",
                src: "{src}",
                autoplay: true,
                muted: true,
                r#loop: true,
                playsinline: true,
            }
            div { class: "video-hero__overlay" }
            div { class: "video-hero__content",
                h2 { class: "video-hero__title",
                    button {
                        class: "video-hero__title-link",
                        onclick: move |_| nav.follow(NavTarget::from_href(&title_link)),
                        "{video.title}"
                    }
                }
                p { class: "video-hero__description", "{video.description}" }
                button {
                    class: "button button--accent",
                    onclick: move |_| nav.follow(NavTarget::from_href(&button_link)),
                    "{video.button_text}"
                }
            }
        }
    }
}
