use dioxus::prelude::*;

use super::{SiteFooter, SiteHeader};
use crate::animation::{provide_animation_driver, Animations};
use crate::core::config::{provide_site_config, SiteConfig};
use crate::core::platform::{self, provide_viewport};
use crate::navigation::provide_section_registry;
use crate::sections::BackendStatus;
use crate::t;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The "back to top" button appears past this scroll depth.
const TOP_BUTTON_AFTER_PX: f64 = 400.0;

/// Page frame shared by every route: installs configuration, viewport,
/// section registry and animation driver, then renders header, page and
/// footer.
#[component]
pub fn SiteShell(children: Element) -> Element {
    let config = use_hook(SiteConfig::from_env);
    let reduced_motion = config.reduced_motion;
    provide_site_config(config);
    let viewport = provide_viewport();
    provide_section_registry();
    provide_animation_driver(Animations::for_preference(reduced_motion));

    let show_top = viewport().scroll_y > TOP_BUTTON_AFTER_PX;

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "site",
            SiteHeader {}
            main { class: "site-main", {children} }
            SiteFooter {}

            if show_top {
                button {
                    class: "scroll-top",
                    aria_label: t!("scroll-to-top"),
                    onclick: move |_| platform::scroll_to_top(),
                    "↑"
                }
            }
            if cfg!(debug_assertions) {
                BackendStatus {}
            }
        }
    }
}
