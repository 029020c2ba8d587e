//! Locale registry: translation tables per language with fallback lookup.
//!
//! The registry is built once from static resources and is immutable
//! thereafter, except for the active-language selector. Lookups resolve a key
//! against the active language, then the fallback language, and finally echo
//! the key back. A missing translation is never an error.

use crate::i18n::{LanguageCode, LookupMetrics, TranslationTable};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Translation tables keyed by language.
pub type Resources = BTreeMap<LanguageCode, TranslationTable>;

/// Behavioral switches applied when the registry is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryOptions {
    /// Whether interpolated values should be escaped by the rendering layer.
    ///
    /// The registry does not interpolate; the flag is carried for consumers.
    pub escape_values: bool,

    /// Whether an empty table value counts as a translation.
    ///
    /// When `false`, empty values are skipped and resolution continues to the
    /// fallback language and then to the key itself.
    pub return_empty_string: bool,
}

/// Where a lookup was answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Found in the requested (or active) language's table
    Active(&'a str),

    /// Found in the fallback language's table
    Fallback(&'a str),

    /// Not found in any table
    Missing,
}

impl<'a> Resolution<'a> {
    /// The resolved value, or `key` when nothing matched.
    pub fn or_key(self, key: &'a str) -> &'a str {
        match self {
            Resolution::Active(value) | Resolution::Fallback(value) => value,
            Resolution::Missing => key,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolution::Missing)
    }
}

/// Locale resource registry.
///
/// Safe to share across threads (e.g. behind an `Arc`): tables are never
/// mutated and the active language is guarded by a read-write lock.
#[derive(Debug)]
pub struct Registry {
    resources: Resources,
    active: RwLock<LanguageCode>,
    fallback: LanguageCode,
    options: RegistryOptions,
    metrics: LookupMetrics,
}

impl Registry {
    /// Build a registry from resources and language settings.
    ///
    /// Never fails: an active or fallback language without resources simply
    /// resolves nothing at lookup time. Empty table values are not returned.
    ///
    /// # Example
    /// ```
    /// use locale_registry::i18n::{LanguageCode, Registry, Resources, TranslationTable};
    ///
    /// let zh = LanguageCode::new("zh").unwrap();
    /// let en = LanguageCode::new("en").unwrap();
    ///
    /// let mut resources = Resources::new();
    /// resources.insert(zh.clone(), TranslationTable::new());
    /// resources.insert(en.clone(), [("greeting", "Hello")].into_iter().collect());
    ///
    /// let registry = Registry::initialize(resources, zh.clone(), zh, false);
    /// assert_eq!(registry.translate("greeting"), "greeting");
    ///
    /// registry.set_active_language(en);
    /// assert_eq!(registry.translate("greeting"), "Hello");
    /// ```
    pub fn initialize(
        resources: Resources,
        active_language: LanguageCode,
        fallback_language: LanguageCode,
        escape_values: bool,
    ) -> Self {
        Self::with_options(
            resources,
            active_language,
            fallback_language,
            RegistryOptions {
                escape_values,
                return_empty_string: false,
            },
        )
    }

    /// Build a registry with explicit options.
    pub fn with_options(
        resources: Resources,
        active_language: LanguageCode,
        fallback_language: LanguageCode,
        options: RegistryOptions,
    ) -> Self {
        info!(
            languages = resources.len(),
            active = %active_language,
            fallback = %fallback_language,
            "Initialized locale registry"
        );

        if !resources.contains_key(&fallback_language) {
            debug!(
                fallback = %fallback_language,
                "Fallback language has no resources registered"
            );
        }

        Self {
            resources,
            active: RwLock::new(active_language),
            fallback: fallback_language,
            options,
            metrics: LookupMetrics::new(),
        }
    }

    // ==================== Lookups ====================

    /// Translate `key` using the active language.
    ///
    /// Returns the active language's value, else the fallback language's
    /// value, else `key` unchanged.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        let resolution = self.resolve(key);
        self.record(&resolution, key);
        resolution.or_key(key)
    }

    /// Translate `key` in an explicit language, with the same fallback rule.
    ///
    /// The active language is neither consulted nor changed.
    pub fn translate_in<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        let resolution = self.resolve_in(language, key);
        self.record(&resolution, key);
        resolution.or_key(key)
    }

    /// Resolve `key` against the active language without recording metrics.
    pub fn resolve(&self, key: &str) -> Resolution<'_> {
        let active = self.resources.get(&*self.active.read());
        self.resolve_with(active, key)
    }

    /// Resolve `key` against an explicit language without recording metrics.
    pub fn resolve_in(&self, language: &str, key: &str) -> Resolution<'_> {
        self.resolve_with(self.table(language), key)
    }

    /// Whether `key` resolves from a table for the active language.
    pub fn exists(&self, key: &str) -> bool {
        !self.resolve(key).is_missing()
    }

    fn resolve_with<'a>(&'a self, primary: Option<&'a TranslationTable>, key: &str) -> Resolution<'a> {
        if let Some(value) = primary.and_then(|table| self.lookup(table, key)) {
            return Resolution::Active(value);
        }

        let fallback = self.resources.get(&self.fallback);
        // Same table as the primary one: already consulted.
        let already_checked = matches!(
            (primary, fallback),
            (Some(p), Some(f)) if std::ptr::eq(p, f)
        );
        if !already_checked {
            if let Some(value) = fallback.and_then(|table| self.lookup(table, key)) {
                return Resolution::Fallback(value);
            }
        }

        Resolution::Missing
    }

    fn lookup<'a>(&self, table: &'a TranslationTable, key: &str) -> Option<&'a str> {
        table
            .get(key)
            .filter(|value| self.options.return_empty_string || !value.is_empty())
    }

    fn record(&self, resolution: &Resolution<'_>, key: &str) {
        match resolution {
            Resolution::Active(_) => self.metrics.record_active_hit(),
            Resolution::Fallback(_) => self.metrics.record_fallback_hit(),
            Resolution::Missing => {
                self.metrics.record_miss();
                debug!(key, "Translation missing, returning key");
            }
        }
    }

    // ==================== Language Selection ====================

    /// Switch the active language for subsequent lookups.
    ///
    /// No existence check: a language without resources makes every lookup
    /// fall through to the fallback language.
    pub fn set_active_language(&self, language: LanguageCode) {
        if !self.resources.contains_key(&language) {
            debug!(
                language = %language,
                "Active language has no resources; lookups will use the fallback"
            );
        }

        let mut active = self.active.write();
        debug!(from = %active.as_str(), to = %language, "Switching active language");
        *active = language;
    }

    /// The currently active language.
    pub fn active_language(&self) -> LanguageCode {
        self.active.read().clone()
    }

    pub fn fallback_language(&self) -> &LanguageCode {
        &self.fallback
    }

    // ==================== Introspection ====================

    /// All registered languages, sorted.
    pub fn languages(&self) -> Vec<&LanguageCode> {
        self.resources.keys().collect()
    }

    /// Whether `language` has a table. Surrounding whitespace is ignored,
    /// matching how `LanguageCode` normalizes codes.
    pub fn has_language(&self, language: &str) -> bool {
        self.resources.contains_key(language.trim())
    }

    /// The table registered for `language`, if any.
    pub fn table(&self, language: &str) -> Option<&TranslationTable> {
        self.resources.get(language.trim())
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}
