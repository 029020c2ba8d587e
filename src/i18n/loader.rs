//! Resource loading: JSON translation files into translation tables.
//!
//! Each file holds one language. Nested objects are flattened into dotted
//! keys, so `{"menu": {"open": "Open"}}` is looked up as `menu.open`.
//!
//! A literal dotted key and a nested path can flatten to the same key
//! (`{"a.b": "x", "a": {"b": "y"}}`). The first entry visited wins. Object
//! keys are visited in sorted order, so `"a"` (giving `y`) beats `"a.b"`.

use crate::i18n::{LanguageCode, LanguageError, Resources, TranslationTable};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Separator used when flattening nested resource objects.
pub const KEY_SEPARATOR: char = '.';

/// Errors produced while loading resource files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("resource root in {path} must be a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("cannot derive a language code from file name {path}")]
    InvalidFileName { path: PathBuf },

    #[error(transparent)]
    Language(#[from] LanguageError),
}

/// Parse a JSON document into a translation table.
///
/// `origin` only labels errors (e.g. the file the text came from).
pub fn load_table_from_str(json: &str, origin: &Path) -> Result<TranslationTable, LoadError> {
    let value: Value = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(flatten(&map)),
        _ => Err(LoadError::NotAnObject {
            path: origin.to_path_buf(),
        }),
    }
}

/// Read and parse a single resource file.
pub fn load_table_from_file(path: &Path) -> Result<TranslationTable, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_table_from_str(&json, path)?;

    debug!(path = %path.display(), keys = table.len(), "Loaded resource file");
    Ok(table)
}

/// Load every `*.json` file in `dir`, keyed by file stem.
///
/// Files with other extensions and subdirectories are ignored.
pub fn load_resources_from_dir(dir: &Path) -> Result<Resources, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut resources = Resources::new();
    for entry in entries {
        let path = entry
            .map_err(|source| LoadError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();

        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| LoadError::InvalidFileName { path: path.clone() })?;
        let language = LanguageCode::new(stem)?;
        let table = load_table_from_file(&path)?;
        resources.insert(language, table);
    }

    info!(
        dir = %dir.display(),
        languages = resources.len(),
        "Loaded locale resources"
    );
    Ok(resources)
}

fn flatten(map: &Map<String, Value>) -> TranslationTable {
    let mut table = TranslationTable::new();
    for (key, value) in map {
        flatten_into(&mut table, key.clone(), value);
    }
    table
}

fn flatten_into(table: &mut TranslationTable, prefix: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => insert_entry(table, prefix, s.clone()),
        Value::Bool(_) | Value::Number(_) => insert_entry(table, prefix, value.to_string()),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(table, format!("{prefix}{KEY_SEPARATOR}{index}"), item);
            }
        }
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(table, format!("{prefix}{KEY_SEPARATOR}{key}"), nested);
            }
        }
    }
}

fn insert_entry(table: &mut TranslationTable, key: String, value: String) {
    if table.contains_key(&key) {
        debug!(key = %key, "Duplicate flattened key, keeping first value");
        return;
    }
    table.insert(key, value);
}
