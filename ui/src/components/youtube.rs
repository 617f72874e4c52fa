use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

use crate::t;
use crate::video::{embed_url, send_command, PlayerCommand};

static FRAME_SEQ: AtomicU32 = AtomicU32::new(0);

/// Muted embed that plays while hovered and pauses when the pointer leaves.
/// A tap plays it on touch screens.
#[component]
pub fn YouTubeEmbed(video_id: String, title: String) -> Element {
    let frame_id = use_hook(|| format!("yt-frame-{}", FRAME_SEQ.fetch_add(1, Ordering::Relaxed)));
    let src = embed_url(&video_id);

    let play_id = frame_id.clone();
    let pause_id = frame_id.clone();
    let click_id = frame_id.clone();

    rsx! {
        div { class: "video-embed",
            div {
                class: "video-embed__frame",
                onmouseenter: move |_| send_command(&play_id, PlayerCommand::Play),
                onmouseleave: move |_| send_command(&pause_id, PlayerCommand::Pause),
                onclick: move |_| send_command(&click_id, PlayerCommand::Play),
                iframe {
                    id: "{frame_id}",
                    src: "{src}",
                    title: "{title}",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
                    allowfullscreen: true,
                }
            }
            p { class: "video-embed__hint", {t!("video-hint")} }
        }
    }
}
