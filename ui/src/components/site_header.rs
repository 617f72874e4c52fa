use crate::core::platform::use_viewport;
use crate::i18n;
use crate::navigation::{page_link, sections, use_site_nav, NavTarget, SitePage};
use crate::t;
use dioxus::prelude::*;

/// The nav bar pins to the top once the announcement bar has scrolled away.
const STICKY_AFTER_PX: f64 = 40.0;

/// Announcement bar, brand, section links, feedback shortcut and locale
/// switcher. Section links scroll in place on the home page and route there
/// from any other page.
///
/// Route links come from the platform's registered
/// [`NavBuilder`](crate::navigation::NavBuilder); the header itself never
/// names a route.
#[component]
pub fn SiteHeader() -> Element {
    i18n::init();

    let nav = use_site_nav();
    let viewport = use_viewport();
    let mut menu_open = use_signal(|| false);
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, when the platform provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    tracing::trace!(lang = %_lang_marker, "site header render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let mut follow = move |target: NavTarget| {
        menu_open.set(false);
        nav.follow(target);
    };

    let links = vec![
        (t!("nav-home"), NavTarget::Top),
        (t!("nav-about"), NavTarget::section(sections::ABOUT)),
        (t!("nav-services"), NavTarget::section(sections::SERVICES)),
        (t!("nav-blogs"), NavTarget::section(sections::BLOGS)),
    ];
    let contact_label = t!("nav-contact");
    let feedback_label = t!("nav-give-feedback");

    let sticky = viewport().scroll_y > STICKY_AFTER_PX;
    let bar_class = if sticky {
        "site-nav site-nav--sticky"
    } else {
        "site-nav"
    };

    rsx! {
        header { class: "site-header",
            div { class: "site-header__announcement", {t!("announcement")} }

            nav { class: "{bar_class}",
                button {
                    class: "site-nav__brand",
                    onclick: move |_| follow(NavTarget::Top),
                    span { class: "site-nav__brand-mark", "Dr. Samiullah" }
                    span { class: "site-nav__brand-subtitle", {t!("brand-tagline")} }
                }

                div { class: "site-nav__links",
                    for (label, target) in links.clone() {
                        button {
                            key: "{label}",
                            class: "site-nav__link",
                            onclick: move |_| follow(target.clone()),
                            "{label}"
                        }
                    }
                    {page_link(SitePage::Contact, "site-nav__link", &contact_label)}
                }

                div { class: "site-nav__actions",
                    if show_switcher {
                        div { class: "site-nav__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                    button {
                        class: "button button--primary site-nav__feedback",
                        onclick: move |_| follow(NavTarget::section(sections::CONTACT)),
                        "{feedback_label}"
                    }
                    button {
                        class: "site-nav__menu-toggle",
                        aria_label: t!("nav-open-menu"),
                        onclick: move |_| menu_open.set(true),
                        "☰"
                    }
                }
            }

            if menu_open() {
                div {
                    class: "mobile-menu__backdrop",
                    onclick: move |_| menu_open.set(false),
                    div {
                        class: "mobile-menu",
                        onclick: move |evt| evt.stop_propagation(),
                        button {
                            class: "mobile-menu__close",
                            aria_label: t!("nav-close-menu"),
                            onclick: move |_| menu_open.set(false),
                            "×"
                        }
                        for (label, target) in links {
                            button {
                                key: "{label}",
                                class: "mobile-menu__link",
                                onclick: move |_| follow(target.clone()),
                                "{label}"
                            }
                        }
                        {page_link(SitePage::Contact, "mobile-menu__link", &contact_label)}
                        button {
                            class: "button button--primary mobile-menu__feedback",
                            onclick: move |_| follow(NavTarget::section(sections::CONTACT)),
                            "{feedback_label}"
                        }
                    }
                }
            }
        }
    }
}
