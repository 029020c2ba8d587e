//! Language codes: validated, non-empty locale identifiers.
//!
//! A `LanguageCode` is the key under which a translation table is registered.
//! The registry never checks that a code is a real ISO 639 tag; it only
//! guarantees that it is not blank.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when constructing a [`LanguageCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("language code must not be empty")]
    Empty,
}

/// A non-empty language identifier (e.g. "zh", "en", "pt-BR").
///
/// Surrounding whitespace is trimmed on construction. Case is preserved, so
/// "en" and "EN" are different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code from any string-like value.
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the trimmed input is non-empty
    /// * `Err(LanguageError::Empty)` otherwise
    ///
    /// # Example
    /// ```
    /// use locale_registry::i18n::LanguageCode;
    ///
    /// let zh = LanguageCode::new("zh").unwrap();
    /// assert_eq!(zh.as_str(), "zh");
    /// assert!(LanguageCode::new("  ").is_err());
    /// ```
    pub fn new(code: impl AsRef<str>) -> Result<Self, LanguageError> {
        let trimmed = code.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LanguageError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LanguageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LanguageCode {
    type Error = LanguageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `LanguageCode` be queried with a plain `&str`.
impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
