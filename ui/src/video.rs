//! YouTube embeds driven through the iframe player API.

use serde_json::json;

use crate::core::platform;

const ID_LEN: usize = 11;

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == ID_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// First path segment, stopping at any query, fragment or further segment.
fn leading_segment(path: &str) -> &str {
    path.split(['/', '?', '&', '#']).next().unwrap_or("")
}

/// Extracts the 11-character id from the usual YouTube url shapes, or accepts
/// a bare id.
pub fn parse_video_id(url: &str) -> Option<String> {
    let url = url.trim();
    if is_video_id(url) {
        return Some(url.to_string());
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest
        .strip_prefix("www.")
        .or_else(|| rest.strip_prefix("m."))
        .unwrap_or(rest);

    let candidate = if let Some(path) = rest.strip_prefix("youtu.be/") {
        leading_segment(path)
    } else {
        let path = rest
            .strip_prefix("youtube.com/")
            .or_else(|| rest.strip_prefix("youtube-nocookie.com/"))?;
        if let Some(query) = path.strip_prefix("watch") {
            query
                .trim_start_matches('?')
                .split(['&', '#'])
                .find_map(|pair| pair.strip_prefix("v="))?
        } else {
            ["embed/", "shorts/", "live/", "v/"]
                .iter()
                .find_map(|prefix| path.strip_prefix(prefix))
                .map(leading_segment)?
        }
    };

    is_video_id(candidate).then(|| candidate.to_string())
}

pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}?enablejsapi=1&mute=1&rel=0&controls=1")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
}

impl PlayerCommand {
    pub fn func(self) -> &'static str {
        match self {
            PlayerCommand::Play => "playVideo",
            PlayerCommand::Pause => "pauseVideo",
        }
    }

    /// The message the embedded player expects via `postMessage`.
    pub fn message(self) -> String {
        json!({ "event": "command", "func": self.func(), "args": [] }).to_string()
    }
}

pub fn send_command(frame_id: &str, command: PlayerCommand) {
    platform::post_to_iframe(frame_id, &command.message());
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn parses_common_url_shapes() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ#t=1",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "  dQw4w9WgXcQ ",
        ] {
            assert_eq!(parse_video_id(url).as_deref(), Some(ID), "{url}");
        }
    }

    #[test]
    fn rejects_non_youtube_and_malformed_ids() {
        for url in [
            "",
            "https://vimeo.com/123456789",
            "https://youtu.be/short",
            "https://www.youtube.com/watch?list=abc",
            "https://www.youtube.com/embed/dQw4w9WgXc!",
            "https://www.youtube.com/channel/UC123",
        ] {
            assert_eq!(parse_video_id(url), None, "{url}");
        }
    }

    #[test]
    fn embed_url_enables_js_api_muted() {
        assert_eq!(
            embed_url(ID),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?enablejsapi=1&mute=1&rel=0&controls=1"
        );
    }

    #[test]
    fn commands_serialize_for_player_api() {
        let play: serde_json::Value = serde_json::from_str(&PlayerCommand::Play.message()).unwrap();
        assert_eq!(play["event"], "command");
        assert_eq!(play["func"], "playVideo");
        assert_eq!(play["args"], serde_json::json!([]));
        assert!(PlayerCommand::Pause.message().contains("pauseVideo"));
    }
}
