//! Language identifiers and negotiation

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

use crate::translator::I18nError;

/// Locale used when nothing better matches
pub const DEFAULT_LOCALE: &str = "en";

/// Bundled translation resources, keyed by language subtag
const RESOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en/admin.ftl")),
    ("es", include_str!("../locales/es/admin.ftl")),
    ("fr", include_str!("../locales/fr/admin.ftl")),
];

/// Parse a BCP 47 language tag
pub fn parse_locale(tag: &str) -> Result<LanguageIdentifier, I18nError> {
    tag.parse::<LanguageIdentifier>()
        .map_err(|_| I18nError::InvalidLocale(tag.to_string()))
}

/// Locales that ship with translations
pub fn available_locales() -> Vec<LanguageIdentifier> {
    RESOURCES
        .iter()
        .filter_map(|(tag, _)| tag.parse().ok())
        .collect()
}

/// Pick the best bundled locale for the requested tags.
///
/// Unparseable tags are skipped; falls back to [`DEFAULT_LOCALE`].
pub fn negotiate(requested: &[&str]) -> LanguageIdentifier {
    let requested: Vec<LanguageIdentifier> = requested
        .iter()
        .filter_map(|tag| tag.parse().ok())
        .collect();
    let available = available_locales();
    let default = default_locale();

    let best = negotiate_languages(
        &requested,
        &available,
        Some(&default),
        NegotiationStrategy::Lookup,
    )
    .first()
    .map(|lang| (*lang).clone());

    best.unwrap_or(default)
}

pub(crate) fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

pub(crate) fn resource_for(lang: &LanguageIdentifier) -> Option<&'static str> {
    let language = lang.language.to_string();
    RESOURCES
        .iter()
        .find(|(tag, _)| *tag == language)
        .map(|(_, source)| *source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!(parse_locale("es-MX").unwrap().to_string(), "es-MX");
        assert!(matches!(parse_locale("not a tag"), Err(I18nError::InvalidLocale(_))));
    }

    #[test]
    fn test_available_locales() {
        let tags: Vec<String> = available_locales().iter().map(|l| l.to_string()).collect();
        assert_eq!(tags, vec!["en", "es", "fr"]);
    }

    #[test]
    fn test_negotiate_exact_and_region() {
        assert_eq!(negotiate(&["fr"]).to_string(), "fr");
        assert_eq!(negotiate(&["es-MX", "en"]).to_string(), "es");
    }

    #[test]
    fn test_negotiate_falls_back_to_default() {
        assert_eq!(negotiate(&["de"]).to_string(), DEFAULT_LOCALE);
        assert_eq!(negotiate(&[]).to_string(), DEFAULT_LOCALE);
        assert_eq!(negotiate(&["%%%"]).to_string(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_resource_for_uses_language_subtag() {
        assert!(resource_for(&"es-AR".parse().unwrap()).is_some());
        assert!(resource_for(&"ja".parse().unwrap()).is_none());
    }
}
