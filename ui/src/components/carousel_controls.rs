use dioxus::prelude::*;

use crate::t;

/// Previous/next buttons; disabled ends render but do nothing.
#[component]
pub fn CarouselArrows(
    can_prev: bool,
    can_next: bool,
    on_prev: EventHandler,
    on_next: EventHandler,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        div { class: "carousel-arrows {class}",
            button {
                class: "carousel-arrows__button carousel-arrows__button--prev",
                aria_label: t!("carousel-previous"),
                disabled: !can_prev,
                onclick: move |_| {
                    if can_prev {
                        on_prev.call(());
                    }
                },
                "‹"
            }
            button {
                class: "carousel-arrows__button carousel-arrows__button--next",
                aria_label: t!("carousel-next"),
                disabled: !can_next,
                onclick: move |_| {
                    if can_next {
                        on_next.call(());
                    }
                },
                "›"
            }
        }
    }
}

/// One dot per carousel position.
#[component]
pub fn CarouselDots(count: usize, current: usize, on_select: EventHandler<usize>) -> Element {
    if count < 2 {
        return rsx! {};
    }
    let labels: Vec<String> = (1..=count)
        .map(|position: usize| t!("carousel-go-to", position = position))
        .collect();
    rsx! {
        div { class: "carousel-dots",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{index}",
                    class: if index == current { "carousel-dots__dot carousel-dots__dot--active" } else { "carousel-dots__dot" },
                    aria_label: label,
                    onclick: move |_| on_select.call(index),
                }
            }
        }
    }
}

/// Shown in place of a slider that has nothing to show.
#[component]
pub fn CarouselEmpty() -> Element {
    rsx! {
        p { class: "carousel-empty", {t!("carousel-empty")} }
    }
}
