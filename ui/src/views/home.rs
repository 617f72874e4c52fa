use dioxus::prelude::*;

use crate::navigation::use_landing_scroll;
use crate::sections::{
    About, BeforeAfter, Blogs, Contact, Cta, Faqs, FeaturedIn, Hero, Services, Team,
    Testimonials, VideoHero, WhyChooseUs,
};

/// The single-page site. `section` is the URL fragment, if any; the page
/// scrolls to it (or to a section stashed by another page) once it mounts.
#[component]
pub fn Home(section: String) -> Element {
    // Re-render on locale change so section titles pick up the new bundle.
    let _lang = try_use_context::<Signal<String>>().map(|code| code());

    use_landing_scroll(section);

    rsx! {
        div { class: "page page-home",
            Hero {}
            Cta {}
            WhyChooseUs {}
            About {}
            Services {}
            BeforeAfter {}
            VideoHero {}
            FeaturedIn {}
            Team {}
            Testimonials {}
            Blogs {}
            Faqs {}
            Contact {}
        }
    }
}
