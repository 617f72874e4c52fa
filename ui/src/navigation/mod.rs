//! Section-anchored navigation.
//!
//! A link to a section scrolls in place when that section is mounted;
//! otherwise the section id is stashed in the session and the app routes to
//! the home page, which consumes the stash once it lands.
//!
//! `ui` does not know the platform `Route` enum, so each platform registers a
//! [`NavBuilder`] that renders route links and performs programmatic
//! navigation.

pub mod pending;
pub mod registry;
pub mod scroll;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::warn;

use crate::core::config::use_site_config;
use crate::core::platform;
use pending::BrowserSession;
use registry::{use_section_registry, SectionRegistry};

pub use registry::{provide_section_registry, use_section_anchor};
pub use scroll::use_landing_scroll;

/// Anchor ids of the home page sections.
pub mod sections {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const SERVICES: &str = "services";
    pub const RESULTS: &str = "results";
    pub const TEAM: &str = "team";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const BLOGS: &str = "blogs";
    pub const FAQ: &str = "faq";
    pub const CONTACT: &str = "contact";
}

/// Pages the shared views can route to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitePage {
    Home,
    Contact,
    /// Service detail; `data` is an encoded record, empty for placeholder copy.
    Service { data: String },
    Blog { data: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Section(String),
    Page(SitePage),
    /// Absolute or protocol-relative link that leaves the site.
    External(String),
}

/// True for `scheme:` links (`https:`, `tel:`, `mailto:`) and `//host` links.
fn is_external(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    match href.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

impl NavTarget {
    pub fn section(id: &str) -> Self {
        NavTarget::Section(id.to_string())
    }

    /// Reads a link as stored in content: `#id` or `/#id` is a section,
    /// `/contact` the contact page, `/` or blank the top of home. Links with
    /// a scheme or a `//` prefix are followed as-is.
    pub fn from_href(href: &str) -> Self {
        match href.trim() {
            "" | "/" | "#" => NavTarget::Top,
            "/contact" => NavTarget::Page(SitePage::Contact),
            url if is_external(url) => NavTarget::External(url.to_string()),
            other => NavTarget::Section(
                other
                    .trim_start_matches('/')
                    .trim_start_matches('#')
                    .to_string(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    ScrollTop,
    Open(String),
    ScrollHere(String),
    Navigate {
        page: SitePage,
        fragment: Option<String>,
    },
}

/// Decides how to reach `target` given which sections are mounted.
pub fn plan(target: &NavTarget, is_present: impl Fn(&str) -> bool) -> NavAction {
    match target {
        NavTarget::Top if is_present(sections::HOME) => NavAction::ScrollTop,
        NavTarget::Top => NavAction::Navigate {
            page: SitePage::Home,
            fragment: None,
        },
        NavTarget::Section(id) if is_present(id) => NavAction::ScrollHere(id.clone()),
        NavTarget::Section(id) => NavAction::Navigate {
            page: SitePage::Home,
            fragment: Some(id.clone()),
        },
        NavTarget::Page(page) => NavAction::Navigate {
            page: page.clone(),
            fragment: None,
        },
        NavTarget::External(url) => NavAction::Open(url.clone()),
    }
}

/// Platform hooks for routing.
///
/// ```ignore
/// register_nav(NavBuilder {
///     link: |page, class, label| rsx!(Link { class, to: Route::from(page), "{label}" }),
///     go: |page, fragment| { navigator().push(Route::from_page(page, fragment)); },
/// });
/// ```
pub struct NavBuilder {
    /// A route link to `page` with `label` as its only child.
    pub link: fn(page: SitePage, class: &str, label: &str) -> Element,
    pub go: fn(page: SitePage, fragment: Option<String>),
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Route link through the registered builder; a plain span when none is set.
pub fn page_link(page: SitePage, class: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(page, class, label),
        None => rsx! { span { class: "{class}", "{label}" } },
    }
}

/// Performs navigation actions for a component tree.
#[derive(Clone, Copy, PartialEq)]
pub struct SiteNav {
    registry: SectionRegistry,
    header_offset_px: f64,
}

impl SiteNav {
    pub fn follow(&self, target: NavTarget) {
        let action = plan(&target, |id| self.registry.contains(id));
        match action {
            NavAction::ScrollTop => platform::scroll_to_top(),
            NavAction::Open(url) => platform::open_external(&url),
            NavAction::ScrollHere(id) => platform::scroll_to_element(&id, self.header_offset_px),
            NavAction::Navigate { page, fragment } => {
                if let Some(section) = &fragment {
                    pending::stash(&BrowserSession, section);
                }
                match NAV_BUILDER.get() {
                    Some(builder) => (builder.go)(page, fragment),
                    None => warn!(?page, "no navigation builder registered"),
                }
            }
        }
    }
}

pub fn use_site_nav() -> SiteNav {
    let registry = use_section_registry();
    let config = use_site_config();
    SiteNav {
        registry,
        header_offset_px: config.header_offset_px,
    }
}
