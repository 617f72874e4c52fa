use dioxus::prelude::*;

use crate::navigation::use_landing_scroll;
use crate::sections::Contact;
use crate::t;

/// Stand-alone contact route; same clinic details and form as the home
/// page section.
#[component]
pub fn ContactPage() -> Element {
    use_landing_scroll(String::new());

    rsx! {
        div { class: "page page-contact",
            header { class: "page-banner",
                h1 { {t!("contact-page-title")} }
                p { {t!("contact-page-lead")} }
            }
            Contact {}
        }
    }
}
