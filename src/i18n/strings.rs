//! Bundled locale strings, embedded at compile time.
//!
//! The application ships Chinese as its default language with an empty
//! table (UI text is authored in Chinese directly, so keys already read
//! correctly) and English loaded from `locales/en.json`.

use crate::i18n::{
    load_table_from_str, LanguageCode, LoadError, Registry, RegistryOptions, Resources,
};
use std::path::Path;

/// Default active language of the bundled configuration.
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Default fallback language of the bundled configuration.
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "zh";

const ENGLISH_JSON: &str = include_str!("../../locales/en.json");
const CHINESE_JSON: &str = include_str!("../../locales/zh.json");

/// Embedded resource files as `(language, origin, json)`.
const BUNDLED: &[(&str, &str, &str)] = &[
    ("en", "locales/en.json", ENGLISH_JSON),
    ("zh", "locales/zh.json", CHINESE_JSON),
];

/// Parse the embedded resources.
pub fn bundled_resources() -> Result<Resources, LoadError> {
    let mut resources = Resources::new();
    for (code, origin, json) in BUNDLED {
        let table = load_table_from_str(json, Path::new(origin))?;
        resources.insert(LanguageCode::new(code)?, table);
    }
    Ok(resources)
}

impl Registry {
    /// Registry with the bundled resources and default settings: active and
    /// fallback language `zh`, value escaping off, empty strings not returned.
    pub fn bundled() -> Result<Self, LoadError> {
        Ok(Self::with_options(
            bundled_resources()?,
            LanguageCode::new(DEFAULT_LANGUAGE)?,
            LanguageCode::new(DEFAULT_FALLBACK_LANGUAGE)?,
            RegistryOptions::default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Resource Tests ====================

    #[test]
    fn test_bundled_resources_parse() {
        let resources = bundled_resources().expect("Bundled resources should parse");
        assert_eq!(resources.len(), 2);
    }

    #[test]
    fn test_bundled_chinese_table_is_empty() {
        let resources = bundled_resources().unwrap();
        assert!(resources["zh"].is_empty());
    }

    #[test]
    fn test_bundled_english_has_no_empty_values() {
        let resources = bundled_resources().unwrap();
        let english = &resources["en"];

        assert!(!english.is_empty());
        for (key, value) in english.iter() {
            assert!(!value.is_empty(), "English value for '{}' is empty", key);
        }
    }

    #[test]
    fn test_bundled_english_nested_keys() {
        let resources = bundled_resources().unwrap();
        assert_eq!(resources["en"].get("app.title"), Some("Tapnow Studio"));
        assert_eq!(resources["en"].get("common.cancel"), Some("Cancel"));
    }

    // ==================== Registry Tests ====================

    #[test]
    fn test_bundled_registry_defaults() {
        let registry = Registry::bundled().expect("Should build");

        assert_eq!(registry.active_language(), DEFAULT_LANGUAGE);
        assert_eq!(registry.fallback_language(), DEFAULT_FALLBACK_LANGUAGE);
        assert!(!registry.options().escape_values);
        assert!(!registry.options().return_empty_string);
    }

    #[test]
    fn test_bundled_registry_echoes_keys_in_chinese() {
        let registry = Registry::bundled().unwrap();
        assert_eq!(registry.translate("common.save"), "common.save");
        assert_eq!(registry.translate("保存"), "保存");
    }

    #[test]
    fn test_bundled_registry_english_after_switch() {
        let registry = Registry::bundled().unwrap();
        registry.set_active_language(LanguageCode::new("en").unwrap());

        assert_eq!(registry.translate("common.save"), "Save");
        assert_eq!(registry.translate("保存"), "保存");
    }
}
