use dioxus::prelude::*;

use crate::components::YouTubeEmbed;
use crate::detail;
use crate::navigation::{sections, use_site_nav, NavTarget};
use crate::t;

#[component]
pub fn BlogPage(data: String) -> Element {
    let nav = use_site_nav();
    let post = detail::blog_detail(&data);

    let byline = match (&post.author, &post.published_at) {
        (Some(author), Some(date)) => Some(format!("{author} · {date}")),
        (Some(author), None) => Some(author.clone()),
        (None, Some(date)) => Some(date.clone()),
        (None, None) => None,
    };

    rsx! {
        article { class: "page detail-page detail-page--blog",
            header { class: "detail-page__hero",
                img { class: "detail-page__image", src: "{post.image}", alt: "{post.title}" }
                h1 { class: "detail-page__title", "{post.title}" }
                if let Some(byline) = byline {
                    p { class: "detail-page__byline", "{byline}" }
                }
            }
            if let Some(video_id) = post.video_id.clone() {
                YouTubeEmbed { video_id, title: post.title.clone() }
            }
            div { class: "detail-page__body",
                for (i, paragraph) in post.body.split("\n\n").enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }
            if !post.tips.is_empty() {
                section { class: "detail-page__list",
                    h2 { {t!("detail-tips")} }
                    ul {
                        for (i, tip) in post.tips.iter().enumerate() {
                            li { key: "{i}", "{tip}" }
                        }
                    }
                }
            }
            div { class: "detail-page__actions",
                button {
                    class: "button button--ghost",
                    onclick: move |_| nav.follow(NavTarget::section(sections::BLOGS)),
                    {t!("detail-back-blogs")}
                }
            }
        }
    }
}
