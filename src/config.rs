use crate::i18n::{
    bundled_resources, load_resources_from_dir, LanguageCode, Registry, RegistryOptions,
    DEFAULT_FALLBACK_LANGUAGE, DEFAULT_LANGUAGE,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Resources
    pub locales_dir: Option<PathBuf>,

    // Languages
    pub language: LanguageCode,
    pub fallback_language: LanguageCode,
    pub reference_language: LanguageCode,

    // Behavior
    pub escape_value: bool,
    pub return_empty_string: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Resources - bundled when unset
            locales_dir: std::env::var("LOCALES_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            // Languages
            language: language_var("I18N_LANGUAGE", DEFAULT_LANGUAGE)?,
            fallback_language: language_var("I18N_FALLBACK_LANGUAGE", DEFAULT_FALLBACK_LANGUAGE)?,
            reference_language: language_var("I18N_REFERENCE_LANGUAGE", "en")?,

            // Behavior
            escape_value: bool_var("I18N_ESCAPE_VALUE", false),
            return_empty_string: bool_var("I18N_RETURN_EMPTY_STRING", false),
        })
    }

    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            escape_values: self.escape_value,
            return_empty_string: self.return_empty_string,
        }
    }

    /// Load resources (directory or bundled) and build the registry.
    pub fn build_registry(&self) -> Result<Registry> {
        let resources = match &self.locales_dir {
            Some(dir) => load_resources_from_dir(dir)
                .with_context(|| format!("Failed to load locales from {}", dir.display()))?,
            None => bundled_resources().context("Failed to load bundled locales")?,
        };

        Ok(Registry::with_options(
            resources,
            self.language.clone(),
            self.fallback_language.clone(),
            self.registry_options(),
        ))
    }
}

fn language_var(name: &str, default: &str) -> Result<LanguageCode> {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    LanguageCode::new(&raw).with_context(|| format!("{} must not be empty", name))
}

fn bool_var(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LOCALES_DIR",
        "I18N_LANGUAGE",
        "I18N_FALLBACK_LANGUAGE",
        "I18N_REFERENCE_LANGUAGE",
        "I18N_ESCAPE_VALUE",
        "I18N_RETURN_EMPTY_STRING",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== parse_bool Tests ====================

    #[test]
    fn test_parse_bool_accepted_values() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" YES "), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
    }

    #[test]
    fn test_parse_bool_rejects_other_values() {
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("maybe"), None);
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("Should load defaults");
        assert_eq!(config.locales_dir, None);
        assert_eq!(config.language, "zh");
        assert_eq!(config.fallback_language, "zh");
        assert_eq!(config.reference_language, "en");
        assert!(!config.escape_value);
        assert!(!config.return_empty_string);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("LOCALES_DIR", "/srv/locales");
        std::env::set_var("I18N_LANGUAGE", "en");
        std::env::set_var("I18N_FALLBACK_LANGUAGE", "zh");
        std::env::set_var("I18N_ESCAPE_VALUE", "true");
        std::env::set_var("I18N_RETURN_EMPTY_STRING", "yes");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.locales_dir, Some(PathBuf::from("/srv/locales")));
        assert_eq!(config.language, "en");
        assert_eq!(config.fallback_language, "zh");
        assert!(config.escape_value);
        assert!(config.return_empty_string);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_bool_uses_default() {
        clear_env();
        std::env::set_var("I18N_ESCAPE_VALUE", "sometimes");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert!(!config.escape_value);
    }

    #[test]
    #[serial]
    fn test_from_env_blank_language_is_error() {
        clear_env();
        std::env::set_var("I18N_FALLBACK_LANGUAGE", "  ");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("I18N_FALLBACK_LANGUAGE"));
    }

    #[test]
    #[serial]
    fn test_from_env_blank_locales_dir_is_unset() {
        clear_env();
        std::env::set_var("LOCALES_DIR", "");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.locales_dir, None);
    }

    // ==================== build_registry Tests ====================

    #[test]
    #[serial]
    fn test_build_registry_from_bundled() {
        clear_env();

        let config = Config::from_env().unwrap();
        let registry = config.build_registry().expect("Should build");

        assert!(registry.has_language("en"));
        assert!(registry.has_language("zh"));
        assert_eq!(registry.active_language(), "zh");
    }

    #[test]
    fn test_build_registry_missing_dir_is_error() {
        let config = Config {
            locales_dir: Some(PathBuf::from("/nonexistent/locales")),
            language: LanguageCode::new("zh").unwrap(),
            fallback_language: LanguageCode::new("zh").unwrap(),
            reference_language: LanguageCode::new("en").unwrap(),
            escape_value: false,
            return_empty_string: false,
        };

        let err = config.build_registry().unwrap_err();
        assert!(err.to_string().contains("Failed to load locales"));
    }
}
