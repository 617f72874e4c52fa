use dioxus::prelude::*;

use crate::animation::use_animations;
use crate::carousel::{use_auto_advance, use_carousel, EdgePolicy};
use crate::components::{CarouselArrows, CarouselDots, CarouselEmpty};
use crate::content::models::HeroSlide;
use crate::content::use_section_content;
use crate::core::config::use_site_config;
use crate::navigation::{sections, use_section_anchor, use_site_nav, NavTarget};

/// Full-width image slider at the top of the home page.
#[component]
pub fn Hero() -> Element {
    let anchor = use_section_anchor(sections::HOME);
    let config = use_site_config();
    let content = use_section_content::<HeroSlide>();
    let carousel = use_carousel(content.items, 1, EdgePolicy::Wrap);
    let mut auto = use_auto_advance(carousel, config.hero_interval_ms, config.manual_hold_ms);
    let animations = use_animations();
    let nav = use_site_nav();

    let slides = content.items.read();
    let state = carousel();

    if slides.is_empty() {
        return rsx! {
            section { id: anchor, class: "hero", CarouselEmpty {} }
        };
    }

    let current = slides.get(state.current()).cloned();

    rsx! {
        section {
            id: anchor,
            class: "hero",
            onmouseenter: move |_| auto.hover_enter(),
            onmouseleave: move |_| auto.hover_leave(),

            for (index, slide) in slides.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "hero__slide",
                    style: animations.fade_style(index == state.current()),
                    img { class: "hero__image", src: "{slide.image_url}", alt: "{slide.title}" }
                }
            }
            div { class: "hero__overlay" }

            if let Some(slide) = current {
                div { class: "hero__content",
                    h1 { class: "hero__title",
                        button {
                            class: "hero__title-link",
                            onclick: move |_| nav.follow(NavTarget::from_href(&slide.title_link)),
                            "{slide.title}"
                        }
                    }
                    p { class: "hero__description", "{slide.description}" }
                }
            }

            CarouselArrows {
                class: "hero__arrows",
                can_prev: state.can_prev(),
                can_next: state.can_next(),
                on_prev: move |_| auto.prev(),
                on_next: move |_| auto.next(),
            }
            CarouselDots {
                count: state.positions(),
                current: state.current(),
                on_select: move |index| auto.go_to(index),
            }
        }
    }
}
