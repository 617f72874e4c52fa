use dioxus::prelude::*;

use crate::animation::{use_animations, use_reveal};
use crate::content::fixtures;
use crate::t;

#[component]
pub fn WhyChooseUs() -> Element {
    let reveal = use_reveal();
    let animations = use_animations();
    let highlights = use_hook(fixtures::highlights);

    rsx! {
        section { class: "why-us",
            h2 { class: "section-title section-title--sage", {t!("why-title")} }
            div { class: "why-us__grid",
                for (index, item) in highlights.iter().enumerate() {
                    div {
                        key: "{item.id}",
                        class: "why-us__card {reveal}",
                        style: "transition-delay: {animations.stagger_delay_ms(index)}ms;",
                        img { class: "why-us__icon", src: "{item.icon}", alt: "{item.title}" }
                        h3 { class: "why-us__title", "{item.title}" }
                        p { class: "why-us__text", "{item.description}" }
                    }
                }
            }
        }
    }
}
