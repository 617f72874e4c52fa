//! Shared UI crate for the Dr. Samiullah Dental Clinic site. Sections, pages,
//! content loading and navigation live here; the web and desktop crates only
//! supply a router and a window.

pub mod animation;
pub mod carousel;
pub mod content;
pub mod core;
pub mod detail;
pub mod feedback;
pub mod i18n;
pub mod navigation;
pub mod sections;
pub mod video;
pub mod views;

pub mod components {
    // Page frame (header, footer, scroll-to-top, context providers)
    mod site_footer;
    mod site_header;
    mod site_shell;
    pub use site_footer::SiteFooter;
    pub use site_header::SiteHeader;
    pub use site_shell::SiteShell;

    // Shared widgets
    mod carousel_controls;
    mod youtube;
    pub use carousel_controls::{CarouselArrows, CarouselDots, CarouselEmpty};
    pub use youtube::YouTubeEmbed;
}

pub use navigation::{register_nav, NavBuilder, SitePage};
