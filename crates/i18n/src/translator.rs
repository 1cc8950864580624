//! Message translation
//!
//! Keys are written the way the admin screens reference them, with a dot between
//! the section and the message name (`community.no_flagged_accounts`). Fluent
//! identifiers cannot contain dots, so the bundled resources spell the same key
//! with a dash (`community-no_flagged_accounts`).

use fluent::{FluentBundle, FluentResource};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::lang::{default_locale, negotiate, resource_for};

/// Internationalization errors
#[derive(Debug, Error)]
pub enum I18nError {
    /// Locale tag could not be parsed
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Locale tag is valid but no translations ship for it
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// A bundled resource failed to parse or load
    #[error("Invalid translation resource for {locale}: {message}")]
    Resource {
        /// Locale of the resource
        locale: String,
        /// Parser or bundle error description
        message: String,
    },
}

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Translator configuration
#[derive(Debug, Clone)]
pub struct I18nConfig {
    /// Requested locales, most preferred first
    pub requested: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self { requested: vec![crate::lang::DEFAULT_LOCALE.to_string()] }
    }
}

impl I18nConfig {
    /// Request a single locale
    pub fn new(locale: impl Into<String>) -> Self {
        Self { requested: vec![locale.into()] }
    }

    /// Add a lower-priority locale
    pub fn with_fallback(mut self, locale: impl Into<String>) -> Self {
        self.requested.push(locale.into());
        self
    }
}

/// Looks up translated messages for one negotiated locale
pub struct Translator {
    locale: LanguageIdentifier,
    bundle: FluentBundle<FluentResource>,
    fallback: Option<FluentBundle<FluentResource>>,
}

impl Translator {
    /// Create a translator for the best locale matching the configuration
    pub fn new(config: &I18nConfig) -> Result<Self> {
        let requested: Vec<&str> = config.requested.iter().map(String::as_str).collect();
        let locale = negotiate(&requested);
        let default = default_locale();

        let bundle = load_bundle(&locale)?;
        let fallback = if locale.language == default.language {
            None
        } else {
            Some(load_bundle(&default)?)
        };

        tracing::debug!(locale = %locale, "translator ready");
        Ok(Self { locale, bundle, fallback })
    }

    /// Create a translator for a single locale tag.
    ///
    /// Unlike [`Translator::new`] this does not fall back to the default
    /// locale: the tag's language must have bundled translations.
    pub fn for_locale(tag: &str) -> Result<Self> {
        let locale = crate::lang::parse_locale(tag)?;
        if resource_for(&locale).is_none() {
            return Err(I18nError::UnsupportedLocale(tag.to_string()));
        }
        Self::new(&I18nConfig::new(tag))
    }

    /// Negotiated locale
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Translate `key`, returning the key itself when no message exists
    pub fn t(&self, key: &str) -> String {
        let id = message_id(key);

        if let Some(text) = format_message(&self.bundle, &id) {
            return text;
        }
        if let Some(text) = self.fallback.as_ref().and_then(|b| format_message(b, &id)) {
            return text;
        }

        tracing::debug!(key, locale = %self.locale, "missing translation");
        key.to_string()
    }
}

impl Default for Translator {
    fn default() -> Self {
        let locale = default_locale();
        let bundle = load_bundle(&locale).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "default translations unavailable");
            FluentBundle::new(vec![locale.clone()])
        });
        Self { locale, bundle, fallback: None }
    }
}

fn message_id(key: &str) -> String {
    key.replace('.', "-")
}

fn load_bundle(locale: &LanguageIdentifier) -> Result<FluentBundle<FluentResource>> {
    let source = resource_for(locale).ok_or_else(|| I18nError::Resource {
        locale: locale.to_string(),
        message: "no bundled resource".to_string(),
    })?;

    let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
        I18nError::Resource { locale: locale.to_string(), message: format!("{:?}", errors) }
    })?;

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).map_err(|errors| I18nError::Resource {
        locale: locale.to_string(),
        message: format!("{:?}", errors),
    })?;

    Ok(bundle)
}

fn format_message(bundle: &FluentBundle<FluentResource>, id: &str) -> Option<String> {
    let message = bundle.get_message(id)?;
    let pattern = message.value()?;
    let mut errors = Vec::new();
    let text = bundle.format_pattern(pattern, None, &mut errors);
    if !errors.is_empty() {
        tracing::warn!(id, ?errors, "translation formatted with errors");
    }
    Some(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lookup() {
        let t = Translator::for_locale("en").unwrap();
        assert_eq!(
            t.t("community.no_flagged_accounts"),
            "There are no flagged accounts at this time."
        );
        assert_eq!(t.t("modqueue.approve"), "Approve");
    }

    #[test]
    fn test_spanish_lookup() {
        let t = Translator::for_locale("es-MX").unwrap();
        assert_eq!(t.locale().to_string(), "es");
        assert_eq!(t.t("modqueue.reject"), "Rechazar");
    }

    #[test]
    fn test_missing_message_falls_back_to_english() {
        let t = Translator::for_locale("fr").unwrap();
        assert_eq!(t.t("modqueue.approve"), "Approuver");
        assert_eq!(
            t.t("modqueue.shortcuts_note"),
            "Tip: press ? to see the keyboard shortcuts."
        );
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let t = Translator::default();
        assert_eq!(t.t("community.does_not_exist"), "community.does_not_exist");
        assert_eq!(t.t("community.flagged_accounts"), "Flagged Accounts");
    }

    #[test]
    fn test_unsupported_locale_uses_default() {
        let t = Translator::new(&I18nConfig::new("ja").with_fallback("de")).unwrap();
        assert_eq!(t.locale().to_string(), "en");
    }

    #[test]
    fn test_for_locale_without_translations() {
        assert!(matches!(
            Translator::for_locale("de"),
            Err(I18nError::UnsupportedLocale(ref tag)) if tag == "de"
        ));
        assert!(Translator::for_locale("fr-CA").is_ok());
    }

    #[test]
    fn test_invalid_locale_tag() {
        assert!(matches!(
            Translator::for_locale("!!"),
            Err(I18nError::InvalidLocale(_))
        ));
    }

    #[test]
    fn test_bundled_resources_parse() {
        for locale in crate::lang::available_locales() {
            assert!(load_bundle(&locale).is_ok(), "resource for {} failed", locale);
        }
    }
}
