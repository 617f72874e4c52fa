//! Localized strings for the `dentalsite_ui` bundle.
//!
//! Bundles are Fluent files embedded at compile time with `rust-embed` and
//! selected through `i18n-embed`; lookups go through the `t!` macro, which
//! wraps `fl!` so every message ID is checked against the fallback bundle
//! when the crate builds.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/dentalsite_ui.ftl   (fallback, reference for every other locale)
//!   es-ES/dentalsite_ui.ftl
//! ```
//!
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let label = t!("nav-home");
//! let call = t!("cta-call", phone = "(123) 456-7890");
//! ```
//!
//! Desktop builds pick the starting locale from the OS list
//! (`DesktopLanguageRequester`), web builds from `navigator.languages`
//! (`WebLanguageRequester`). A new locale is a copy of the en-US file with
//! the values translated; `tests::i18n_completeness` fails until every ID is
//! present.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Looks up a message in the shared loader: `t!("nav-home")` or
/// `t!("carousel-go-to", position = 2)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = ($value) ),+ )
    };
}

/// Bundle file stem; the fallback lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "dentalsite_ui";

const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "locale selection failed; using fallback bundle");
        }
    });
}

/// Switches locale at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            debug!(tag, "ignoring unparseable language tag");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded locales, sorted, for the header's language picker.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-home");
        assert_eq!(s, "Home");
    }

    #[test]
    fn spanish_bundle_is_embedded() {
        assert!(available_languages().iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn arguments_are_interpolated() {
        init();
        let s = fl!(&*LOADER, "testimonials-rating", rating = 4);
        assert!(s.contains('4'));
    }

    #[test]
    fn expression_arguments_are_interpolated() {
        init();
        let index = 2usize;
        let s = crate::t!("carousel-go-to", position = index + 1);
        assert!(s.contains('3'));
    }

    #[test]
    fn bundle_domain_matches_macro_config() {
        let config = include_str!("../i18n.toml");
        let pinned = format!("domain = \"{DOMAIN}\"");
        assert!(config.lines().any(|line| line.trim() == pinned));
        let fallback = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("i18n")
            .join(FALLBACK_LANGUAGE)
            .join(format!("{DOMAIN}.ftl"));
        assert!(fallback.is_file(), "missing {fallback:?}");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-home");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }
}
