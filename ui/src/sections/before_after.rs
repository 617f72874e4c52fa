use dioxus::prelude::*;

use crate::animation::use_animations;
use crate::carousel::{
    gallery_step_px, use_carousel, use_responsive_visible, EdgePolicy, GALLERY_BREAKPOINTS,
};
use crate::components::{CarouselArrows, CarouselEmpty};
use crate::content::models::ResultPair;
use crate::content::use_section_content;
use crate::core::format;
use crate::core::platform::use_viewport;
use crate::navigation::{sections, use_section_anchor};
use crate::t;

/// Before/after smile gallery; one card per step, clamped at the ends.
#[component]
pub fn BeforeAfter() -> Element {
    let anchor = use_section_anchor(sections::RESULTS);
    let viewport = use_viewport();
    let animations = use_animations();
    let content = use_section_content::<ResultPair>();
    let initial_visible = GALLERY_BREAKPOINTS.visible_for(viewport.peek().width);
    let mut carousel = use_carousel(content.items, initial_visible, EdgePolicy::Clamp);
    use_responsive_visible(carousel, GALLERY_BREAKPOINTS);

    let state = carousel();
    let step = gallery_step_px(viewport().width);
    let track_style = animations.track_style(&format::px(state.offset_px(step)));

    rsx! {
        section { id: anchor, class: "before-after", aria_busy: content.is_loading(),
            div { class: "before-after__badge", {t!("results-badge")} }
            h2 { class: "section-title section-title--light", {t!("results-title")} }

            if state.is_empty() {
                CarouselEmpty {}
            } else {
                div { class: "before-after__viewport",
                    CarouselArrows {
                        class: "before-after__arrows",
                        can_prev: state.can_prev(),
                        can_next: state.can_next(),
                        on_prev: move |_| {
                            carousel.write().prev();
                        },
                        on_next: move |_| {
                            carousel.write().next();
                        },
                    }
                    div { class: "before-after__track", style: "{track_style}",
                        for (index, pair) in content.items.read().iter().enumerate() {
                            div {
                                key: "{pair.id}",
                                class: "before-after__card",
                                aria_hidden: !state.is_visible(index),
                                div { class: "before-after__images",
                                    figure {
                                        img { src: "{pair.before_image}", alt: t!("results-before") }
                                        figcaption { {t!("results-before")} }
                                    }
                                    figure {
                                        img { src: "{pair.after_image}", alt: t!("results-after") }
                                        figcaption { {t!("results-after")} }
                                    }
                                }
                                h3 { class: "before-after__treatment", "{pair.treatment}" }
                                p { class: "before-after__improvement {pair.tone.class()}", "{pair.improvement}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
