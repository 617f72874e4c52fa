use dioxus::prelude::*;
use tracing::debug;

use crate::navigation::{use_site_nav, NavTarget};
use crate::t;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let nav = use_site_nav();
    debug!(path = %route.join("/"), "no route matched");

    rsx! {
        section { class: "page page-not-found",
            p { class: "page-not-found__code", "404" }
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-text")} }
            button {
                class: "button button--primary",
                onclick: move |_| nav.follow(NavTarget::Top),
                {t!("not-found-home")}
            }
        }
    }
}
