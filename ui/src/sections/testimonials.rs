use dioxus::prelude::*;

use crate::animation::use_animations;
use crate::carousel::{use_auto_advance, use_carousel, EdgePolicy};
use crate::components::{CarouselArrows, CarouselDots, CarouselEmpty};
use crate::content::models::Testimonial;
use crate::content::use_section_content;
use crate::core::config::use_site_config;
use crate::core::format;
use crate::navigation::{sections, use_section_anchor};
use crate::t;

const REVIEWS_ART: &str = "/toothbrush-reviews.svg";

/// One testimonial at a time, advancing on its own unless hovered or
/// recently stepped by hand.
#[component]
pub fn Testimonials() -> Element {
    let anchor = use_section_anchor(sections::TESTIMONIALS);
    let config = use_site_config();
    let animations = use_animations();
    let content = use_section_content::<Testimonial>();
    let carousel = use_carousel(content.items, 1, EdgePolicy::Wrap);
    let mut auto = use_auto_advance(
        carousel,
        config.testimonial_interval_ms,
        config.manual_hold_ms,
    );

    let state = carousel();
    let reviews = content.items.read();

    rsx! {
        section { id: anchor, class: "testimonials", aria_busy: content.is_loading(),
            img { class: "testimonials__art", src: REVIEWS_ART, alt: "" }
            div {
                class: "testimonials__panel",
                onmouseenter: move |_| auto.hover_enter(),
                onmouseleave: move |_| auto.hover_leave(),

                h2 { class: "section-title", {t!("testimonials-title")} }

                if reviews.is_empty() {
                    CarouselEmpty {}
                } else {
                    div { class: "testimonials__stage",
                        for (index, review) in reviews.iter().enumerate() {
                            blockquote {
                                key: "{review.id}",
                                class: "testimonial",
                                style: animations.fade_style(index == state.current()),
                                aria_hidden: index != state.current(),
                                div {
                                    class: "testimonial__stars",
                                    aria_label: t!("testimonials-rating", rating = review.rating),
                                    "{format::stars(review.rating)}"
                                }
                                h3 { class: "testimonial__title", "{review.title}" }
                                p { class: "testimonial__text", "“{review.text}”" }
                                cite { class: "testimonial__customer", "{review.customer}" }
                            }
                        }
                    }
                    CarouselArrows {
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
    }
}
