//! Translate keys from the command line.
//!
//! Usage:
//!   locale-registry greeting menu.file.open      # Translate in the configured language
//!   locale-registry --lang en common.save        # Switch the active language first
//!
//! Optional environment variables:
//! - LOCALES_DIR (defaults to the bundled resources)
//! - I18N_LANGUAGE / I18N_FALLBACK_LANGUAGE (default to zh)
//! - I18N_REFERENCE_LANGUAGE (defaults to en)
//! - I18N_ESCAPE_VALUE / I18N_RETURN_EMPTY_STRING (default to false)

use anyhow::{bail, Context, Result};
use locale_registry::config::Config;
use locale_registry::i18n::{LanguageCode, RegistryValidator};
use tracing::{info, warn};

#[derive(Debug, PartialEq, Eq)]
struct Args {
    language: Option<LanguageCode>,
    keys: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut language = None;
    let mut keys = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => {
                let value = args.next().context("--lang requires a language code")?;
                language = Some(LanguageCode::new(&value).context("Invalid --lang value")?);
            }
            // Everything after `--` is a key, even if it looks like a flag
            "--" => {
                keys.extend(args.by_ref());
            }
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            other => keys.push(other.to_string()),
        }
    }

    Ok(Args { language, keys })
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_registry=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::from_env()?;
    let registry = config.build_registry()?;

    let report = RegistryValidator::validate(&registry, &config.reference_language);
    for error in &report.errors {
        warn!("Resource error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Resource warning: {}", warning);
    }

    if let Some(language) = args.language {
        registry.set_active_language(language);
    }
    info!(language = %registry.active_language(), "Translating {} key(s)", args.keys.len());

    for key in &args.keys {
        println!("{}", registry.translate(key));
    }

    let metrics = serde_json::to_string(&registry.metrics().report())?;
    info!("Lookup metrics: {}", metrics);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_keys_only() {
        let parsed = parse_args(args(&["greeting", "common.save"])).unwrap();
        assert_eq!(parsed.language, None);
        assert_eq!(parsed.keys, vec!["greeting", "common.save"]);
    }

    #[test]
    fn test_parse_lang_flag() {
        let parsed = parse_args(args(&["--lang", "en", "greeting"])).unwrap();
        assert_eq!(parsed.language, Some(LanguageCode::new("en").unwrap()));
        assert_eq!(parsed.keys, vec!["greeting"]);
    }

    #[test]
    fn test_parse_lang_without_value() {
        assert!(parse_args(args(&["--lang"])).is_err());
    }

    #[test]
    fn test_parse_blank_lang() {
        assert!(parse_args(args(&["--lang", " "])).is_err());
    }

    #[test]
    fn test_parse_unknown_flag() {
        let err = parse_args(args(&["--verbose"])).unwrap_err();
        assert!(err.to_string().contains("--verbose"));
    }

    #[test]
    fn test_parse_double_dash_keys() {
        let parsed = parse_args(args(&["--", "--lang", "x"])).unwrap();
        assert_eq!(parsed.language, None);
        assert_eq!(parsed.keys, vec!["--lang", "x"]);
    }
}
