//! POSIX locale derivation for spawned shells.
//!
//! Shells inherit whatever `LANG` the host process had, which on fresh
//! installs is often unset or a bare `C` locale and breaks multibyte
//! rendering in the terminal. This module decides whether to inject a
//! UTF-8 locale and derives one from the host UI language tag.

use skiff_protocol::{LocaleDetectionMode, markers};

use crate::env::types::ProcessEnvironment;

/// Locale used when the host has no UI language tag.
const FALLBACK_LOCALE: &str = "en_US.UTF-8";

/// Default region per language for tags that carry no region of their own
/// (`fr` -> `fr_FR`). Languages missing from the table get no region.
const LANGUAGE_DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("af", "ZA"),
    ("am", "ET"),
    ("be", "BY"),
    ("bg", "BG"),
    ("ca", "ES"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("de", "DE"),
    ("el", "GR"),
    ("en", "US"),
    ("es", "ES"),
    ("et", "EE"),
    ("eu", "ES"),
    ("fi", "FI"),
    ("fr", "FR"),
    ("he", "IL"),
    ("hr", "HR"),
    ("hu", "HU"),
    ("hy", "AM"),
    ("id", "ID"),
    ("is", "IS"),
    ("it", "IT"),
    ("ja", "JP"),
    ("kk", "KZ"),
    ("ko", "KR"),
    ("lt", "LT"),
    ("nl", "NL"),
    ("no", "NO"),
    ("pl", "PL"),
    ("pt", "BR"),
    ("ro", "RO"),
    ("ru", "RU"),
    ("sk", "SK"),
    ("sl", "SI"),
    ("sr", "YU"),
    ("sv", "SE"),
    ("tr", "TR"),
    ("uk", "UA"),
    ("zh", "CN"),
];

/// Whether a `LANG` value should be injected into `env`.
///
/// `Auto` keeps an inherited `LANG` that already names a UTF-8 or EUC
/// locale and overrides everything else.
pub fn should_inject_lang(env: &ProcessEnvironment, mode: LocaleDetectionMode) -> bool {
    match mode {
        LocaleDetectionMode::On => true,
        LocaleDetectionMode::Off => false,
        LocaleDetectionMode::Auto => match env.get(markers::LANG) {
            Some(lang) => !is_usable_locale(lang),
            None => true,
        },
    }
}

fn is_usable_locale(lang: &str) -> bool {
    if lang.ends_with(".UTF-8") || lang.ends_with(".utf8") {
        return true;
    }
    // ".euc" must be followed by at least one character (e.g. ja_JP.eucJP)
    match lang.find(".euc") {
        Some(index) => index + ".euc".len() < lang.len(),
        None => false,
    }
}

/// Derive a `LANG` value from an optional BCP 47-style language tag.
///
/// `en-US` -> `en_US.UTF-8`; a bare language consults
/// [`LANGUAGE_DEFAULT_REGIONS`]; no tag at all yields the fixed fallback.
pub fn build_locale_value(tag: Option<&str>) -> String {
    let Some(tag) = tag else {
        return FALLBACK_LOCALE.to_string();
    };

    let mut segments = tag.split('-');
    let language = segments.next().unwrap_or_default();
    let region = match segments.next() {
        // Region present: uppercase it, ignore any trailing segments
        Some(region) => Some(region.to_uppercase()),
        None => LANGUAGE_DEFAULT_REGIONS
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, region)| (*region).to_string()),
    };

    match region {
        Some(region) => format!("{language}_{region}.UTF-8"),
        None => format!("{language}.UTF-8"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_lang(lang: &str) -> ProcessEnvironment {
        ProcessEnvironment::from([("LANG".to_string(), lang.to_string())])
    }

    #[test]
    fn test_should_inject_on_and_off_ignore_env() {
        let env = env_with_lang("en_US.UTF-8");
        assert!(should_inject_lang(&env, LocaleDetectionMode::On));
        assert!(!should_inject_lang(&env, LocaleDetectionMode::Off));
    }

    #[test]
    fn test_should_inject_auto_without_lang() {
        assert!(should_inject_lang(
            &ProcessEnvironment::new(),
            LocaleDetectionMode::Auto
        ));
    }

    #[test]
    fn test_should_inject_auto_keeps_utf8_locales() {
        assert!(!should_inject_lang(
            &env_with_lang("en_US.UTF-8"),
            LocaleDetectionMode::Auto
        ));
        assert!(!should_inject_lang(
            &env_with_lang("de_DE.utf8"),
            LocaleDetectionMode::Auto
        ));
        assert!(!should_inject_lang(
            &env_with_lang("ja_JP.eucJP"),
            LocaleDetectionMode::Auto
        ));
    }

    #[test]
    fn test_should_inject_auto_overrides_non_utf8_locales() {
        assert!(should_inject_lang(
            &env_with_lang("C"),
            LocaleDetectionMode::Auto
        ));
        assert!(should_inject_lang(
            &env_with_lang("en_US.ISO8859-1"),
            LocaleDetectionMode::Auto
        ));
        // bare ".euc" with nothing after it is not a usable locale
        assert!(should_inject_lang(
            &env_with_lang("ja_JP.euc"),
            LocaleDetectionMode::Auto
        ));
    }

    #[test]
    fn test_build_locale_value_without_tag() {
        assert_eq!(build_locale_value(None), "en_US.UTF-8");
    }

    #[test]
    fn test_build_locale_value_language_only_uses_region_table() {
        assert_eq!(build_locale_value(Some("fr")), "fr_FR.UTF-8");
        assert_eq!(build_locale_value(Some("pt")), "pt_BR.UTF-8");
        assert_eq!(build_locale_value(Some("zh")), "zh_CN.UTF-8");
    }

    #[test]
    fn test_build_locale_value_unknown_language_has_no_region() {
        assert_eq!(build_locale_value(Some("xx")), "xx.UTF-8");
    }

    #[test]
    fn test_build_locale_value_region_is_uppercased() {
        assert_eq!(build_locale_value(Some("en-gb")), "en_GB.UTF-8");
        assert_eq!(build_locale_value(Some("en-US")), "en_US.UTF-8");
    }

    #[test]
    fn test_build_locale_value_ignores_trailing_segments() {
        assert_eq!(build_locale_value(Some("zh-hans-cn")), "zh_HANS.UTF-8");
    }

    #[test]
    fn test_language_region_table_is_sorted_and_unique() {
        for window in LANGUAGE_DEFAULT_REGIONS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "table must stay sorted/unique: {:?} before {:?}",
                window[0].0,
                window[1].0
            );
        }
    }
}
