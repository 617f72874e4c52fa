use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::config::use_api_client;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Link {
    Checking,
    Online,
    Offline,
}

/// Development badge showing whether the content service answers.
#[component]
pub fn BackendStatus() -> Element {
    let client = use_api_client();
    let link = use_resource(move || {
        let client = client.clone();
        async move {
            match client.check_connection().await {
                Ok(()) => {
                    info!(base = client.base_url(), "content service reachable");
                    Link::Online
                }
                Err(err) => {
                    warn!(
                        endpoint = ?err.endpoint(),
                        kind = ?err.kind(),
                        error = %err,
                        "content service unreachable"
                    );
                    Link::Offline
                }
            }
        }
    });

    let status = (*link.read()).unwrap_or(Link::Checking);
    let (class, label) = match status {
        Link::Checking => ("backend-status backend-status--checking", t!("backend-checking")),
        Link::Online => ("backend-status backend-status--online", t!("backend-online")),
        Link::Offline => ("backend-status backend-status--offline", t!("backend-offline")),
    };

    rsx! {
        div { class, role: "status", "{label}" }
    }
}
