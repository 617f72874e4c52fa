use std::collections::{BTreeSet, HashSet};

/// Every non-fallback locale provides at least the keys of `en-US`.
///
/// To add a locale, create `ui/i18n/<locale>/dentalsite_ui.ftl` from the
/// en-US file and register it in `LOCALES` below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/dentalsite_ui.ftl");
    const LOCALES: &[(&str, &str)] = &[("es-ES", include_str!("../i18n/es-ES/dentalsite_ui.ftl"))];

    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);
        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}",
        failures.join("\n\n")
    );
}

#[test]
fn placeholders_survive_translation() {
    const EN_US: &str = include_str!("../i18n/en-US/dentalsite_ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/dentalsite_ui.ftl");

    for key in ["carousel-go-to", "cta-call", "testimonials-rating", "form-error-too-long"] {
        assert_eq!(
            placeholders(EN_US, key),
            placeholders(ES_ES, key),
            "placeholder mismatch for {key}"
        );
    }
}

fn definitions(src: &str) -> impl Iterator<Item = (&str, &str)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty() && !key.contains(char::is_whitespace))
}

fn extract_keys(src: &str) -> HashSet<String> {
    definitions(src).map(|(key, _)| key.to_string()).collect()
}

fn placeholders(src: &str, key: &str) -> BTreeSet<String> {
    definitions(src)
        .filter(|(k, _)| *k == key)
        .flat_map(|(_, value)| value.split("{ $").skip(1))
        .filter_map(|rest| rest.split_once(' ').map(|(name, _)| name.to_string()))
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = definitions(src)
        .map(|(key, _)| key)
        .filter(|key| !seen.insert(*key))
        .collect();
    assert!(dups.is_empty(), "Duplicate key definitions in {locale}: {dups:?}");
}
