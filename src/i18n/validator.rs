//! Resource consistency validation.
//!
//! Compares every registered language against a reference language and
//! reports gaps that lookups would silently paper over: missing keys,
//! extra keys, `{{placeholder}}` mismatches and empty values.

use crate::i18n::{LanguageCode, Registry, TranslationTable};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the comparison meaningless
    pub errors: Vec<String>,

    /// Gaps that degrade lookups to fallback values or raw keys
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for registry resources.
pub struct RegistryValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl RegistryValidator {
    /// Validate a registry's resources against `reference`.
    ///
    /// Languages with an empty table are treated as "keys are the text"
    /// languages and are not compared key by key. An empty reference table
    /// yields a single warning instead of a comparison.
    pub fn validate(registry: &Registry, reference: &LanguageCode) -> ValidationReport {
        let mut report = ValidationReport::new();

        let fallback = registry.fallback_language();
        if !registry.has_language(fallback.as_str()) {
            report.warnings.push(format!(
                "Fallback language '{}' has no resources",
                fallback
            ));
        }

        let active = registry.active_language();
        if !registry.has_language(active.as_str()) {
            report
                .warnings
                .push(format!("Active language '{}' has no resources", active));
        }

        for language in registry.languages() {
            if let Some(table) = registry.table(language.as_str()) {
                Self::check_empty_values(&mut report, language, table);
            }
        }

        let Some(reference_table) = registry.table(reference.as_str()) else {
            report.errors.push(format!(
                "Reference language '{}' has no resources",
                reference
            ));
            return report;
        };

        if reference_table.is_empty() {
            report.warnings.push(format!(
                "Reference language '{}' has an empty table; key comparison skipped",
                reference
            ));
            return report;
        }

        for language in registry.languages() {
            if language == reference {
                continue;
            }
            let Some(table) = registry.table(language.as_str()) else {
                continue;
            };
            if table.is_empty() {
                continue;
            }
            Self::compare(&mut report, reference, reference_table, language, table);
        }

        report
    }

    fn compare(
        report: &mut ValidationReport,
        reference: &LanguageCode,
        reference_table: &TranslationTable,
        language: &LanguageCode,
        table: &TranslationTable,
    ) {
        let missing: Vec<&str> = reference_table
            .sorted_keys()
            .into_iter()
            .filter(|key| !table.contains_key(key))
            .collect();
        if !missing.is_empty() {
            report.warnings.push(format!(
                "Language '{}' is missing {} key(s) present in '{}': {:?}",
                language,
                missing.len(),
                reference,
                missing
            ));
        }

        let extra: Vec<&str> = table
            .sorted_keys()
            .into_iter()
            .filter(|key| !reference_table.contains_key(key))
            .collect();
        if !extra.is_empty() {
            report.warnings.push(format!(
                "Language '{}' has {} key(s) absent from '{}': {:?}",
                language,
                extra.len(),
                reference,
                extra
            ));
        }

        for key in reference_table.sorted_keys() {
            let (Some(expected), Some(actual)) = (reference_table.get(key), table.get(key)) else {
                continue;
            };
            if actual.is_empty() {
                continue;
            }
            let expected_placeholders = Self::extract_placeholders(expected);
            let actual_placeholders = Self::extract_placeholders(actual);
            if expected_placeholders != actual_placeholders {
                report.warnings.push(format!(
                    "Placeholder mismatch for '{}' in '{}': expected {:?}, found {:?}",
                    key, language, expected_placeholders, actual_placeholders
                ));
            }
        }
    }

    fn check_empty_values(
        report: &mut ValidationReport,
        language: &LanguageCode,
        table: &TranslationTable,
    ) {
        let empty: Vec<&str> = table
            .sorted_keys()
            .into_iter()
            .filter(|key| table.get(key) == Some(""))
            .collect();
        if !empty.is_empty() {
            report.warnings.push(format!(
                "Language '{}' has empty value(s): {:?}",
                language, empty
            ));
        }
    }

    /// Extract the set of `{{name}}` placeholders from a value
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("placeholder pattern is valid")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
