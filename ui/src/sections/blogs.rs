use dioxus::prelude::*;

use crate::animation::use_animations;
use crate::carousel::{use_carousel, use_responsive_visible, EdgePolicy, BLOG_BREAKPOINTS};
use crate::components::{CarouselArrows, CarouselDots, CarouselEmpty};
use crate::content::models::BlogCard;
use crate::content::use_section_content;
use crate::core::platform::use_viewport;
use crate::detail;
use crate::navigation::{sections, use_section_anchor, use_site_nav, NavTarget, SitePage};
use crate::t;

#[component]
pub fn Blogs() -> Element {
    let anchor = use_section_anchor(sections::BLOGS);
    let viewport = use_viewport();
    let animations = use_animations();
    let nav = use_site_nav();
    let content = use_section_content::<BlogCard>();
    let initial_visible = BLOG_BREAKPOINTS.visible_for(viewport.peek().width);
    let mut carousel = use_carousel(content.items, initial_visible, EdgePolicy::Clamp);
    use_responsive_visible(carousel, BLOG_BREAKPOINTS);

    let state = carousel();
    let track_style = animations.track_style(&format!("{}%", state.offset_percent()));
    let card_basis = 100.0 / state.visible() as f64;

    rsx! {
        section { id: anchor, class: "blogs", aria_busy: content.is_loading(),
            h2 { class: "section-title", {t!("blogs-title")} }
            p { class: "section-lead", {t!("blogs-lead")} }

            if state.is_empty() {
                CarouselEmpty {}
            } else {
                div { class: "blogs__viewport",
                    div { class: "blogs__track", style: "{track_style}",
                        for (index, post) in content.items.read().iter().enumerate() {
                            article {
                                key: "{post.id}",
                                class: "blog-card",
                                aria_hidden: !state.is_visible(index),
                                style: "flex: 0 0 {card_basis}%;",
                                onclick: {
                                    let data = detail::payload_for(post.detail.as_ref());
                                    move |_| nav.follow(NavTarget::Page(SitePage::Blog { data: data.clone() }))
                                },
                                img { class: "blog-card__image", src: "{post.image}", alt: "{post.title}" }
                                h3 { class: "blog-card__title", "{post.title}" }
                                if !post.excerpt.is_empty() {
                                    p { class: "blog-card__excerpt", "{post.excerpt}" }
                                }
                            }
                        }
                    }
                }
                div { class: "blogs__controls",
                    CarouselArrows {
                        can_prev: state.can_prev(),
                        can_next: state.can_next(),
                        on_prev: move |_| {
                            carousel.write().prev();
                        },
                        on_next: move |_| {
                            carousel.write().next();
                        },
                    }
                    CarouselDots {
                        count: state.positions(),
                        current: state.current(),
                        on_select: move |index| {
                            carousel.write().go_to(index);
                        },
                    }
                }
            }
        }
    }
}
