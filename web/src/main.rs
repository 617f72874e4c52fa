use dioxus::prelude::*;

use ui::components::SiteShell;
use ui::views::{BlogPage, ContactPage, Home, NotFound, ServicesPage};
use ui::{register_nav, NavBuilder, SitePage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
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

fn nav_link(page: SitePage, class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::for_page(page, None),
        "{label}"
    })
}

fn nav_go(page: SitePage, fragment: Option<String>) {
    navigator().push(Route::for_page(page, fragment));
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            link: nav_link,
            go: nav_go,
        });
    }

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Remount on locale change; the router restores its state from the URL.
    rsx! {
        div { key: "{lang_code()}", Router::<Route> {} }
    }
}

/// Wraps every route in the shared site frame.
#[component]
fn WebLayout() -> Element {
    rsx! {
        SiteShell {
            Outlet::<Route> {}
        }
    }
}
