#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::SiteShell;
use ui::views::{BlogPage, ContactPage, Home, NotFound, ServicesPage};
use ui::{register_nav, NavBuilder, SitePage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/#:section")]
    Home { section: String },
    #[route("/services?:data")]
    ServicesPage { data: String },
    #[route("/blog?:data")]
    BlogPage { data: String },
    #[route("/contact")]
    ContactPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    fn for_page(page: SitePage, fragment: Option<String>) -> Self {
        match page {
            SitePage::Home => Route::Home {
                section: fragment.unwrap_or_default(),
            },
            SitePage::Contact => Route::ContactPage {},
            SitePage::Service { data } => Route::ServicesPage { data },
            SitePage::Blog { data } => Route::BlogPage { data },
        }
    }
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme, embedded so packaged builds need no asset folder for styling.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Dr. Samiullah Dental Clinic")
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(page: SitePage, class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::for_page(page, None), "{label}" })
}

fn nav_go(page: SitePage, fragment: Option<String>) {
    navigator().push(Route::for_page(page, fragment));
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // The header's locale picker writes this; the keyed wrapper below remounts on change.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        link: nav_link,
        go: nav_go,
    });

    // Some window managers ignore the initial maximize request.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load clinic images directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopLayout() -> Element {
    rsx! {
        SiteShell {
            Outlet::<Route> {}
        }
    }
}
