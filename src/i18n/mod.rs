//! Internationalization (i18n) module: locale resources and translation lookup.
//!
//! # Architecture
//!
//! - `language`: validated `LanguageCode` type
//! - `table`: per-language key/value `TranslationTable`
//! - `registry`: the `Registry` holding all tables, with active/fallback lookup
//! - `loader`: JSON resource files into tables
//! - `strings`: resources bundled into the binary
//! - `validator`: consistency checks across languages
//! - `metrics`: per-registry lookup counters
//!
//! # Lookup rule
//!
//! `translate(key)` returns the active language's value, else the fallback
//! language's value, else the key itself. Empty values count as absent unless
//! `return_empty_string` is enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_registry::i18n::{LanguageCode, Registry};
//!
//! let registry = Registry::bundled()?;
//! assert_eq!(registry.translate("common.save"), "common.save");
//!
//! registry.set_active_language(LanguageCode::new("en")?);
//! assert_eq!(registry.translate("common.save"), "Save");
//! ```

mod language;
mod loader;
mod metrics;
mod registry;
mod strings;
mod table;
mod validator;

pub use language::{LanguageCode, LanguageError};
pub use loader::{
    load_resources_from_dir, load_table_from_file, load_table_from_str, LoadError, KEY_SEPARATOR,
};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{Registry, RegistryOptions, Resolution, Resources};
pub use strings::{bundled_resources, DEFAULT_FALLBACK_LANGUAGE, DEFAULT_LANGUAGE};
pub use table::TranslationTable;
pub use validator::{RegistryValidator, ValidationReport};
