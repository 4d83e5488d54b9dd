//! Toolkit configuration loaded from the environment.

use std::env;

use crate::models::value::NumericEquality;
use crate::utils::logging::LogFormat;

pub const NUMERIC_EQUALITY_VAR: &str = "SEQOPS_NUMERIC_EQUALITY";
pub const LOG_FORMAT_VAR: &str = "SEQOPS_LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Settings callers may want to share across a program.
///
/// The combinators themselves never read this; it only supplies defaults
/// (such as the equality policy for `has_value`) and drives logging setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolkitConfig {
    pub numeric_equality: NumericEquality,
    pub log_format: LogFormat,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            numeric_equality: NumericEquality::Strict,
            log_format: LogFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ToolkitConfig {
    /// Loads `.env` (if present) and reads configuration from the
    /// environment. Missing or unrecognised values fall back to defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            numeric_equality: lookup(NUMERIC_EQUALITY_VAR)
                .and_then(|raw| parse_numeric_equality(&raw))
                .unwrap_or(defaults.numeric_equality),
            log_format: lookup(LOG_FORMAT_VAR)
                .and_then(|raw| LogFormat::parse(&raw))
                .unwrap_or(defaults.log_format),
            log_filter: lookup(LOG_FILTER_VAR)
                .filter(|raw| !raw.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

fn parse_numeric_equality(raw: &str) -> Option<NumericEquality> {
    match raw.trim().to_lowercase().as_str() {
        "strict" => Some(NumericEquality::Strict),
        "loose" => Some(NumericEquality::Loose),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ToolkitConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_every_setting() {
        let config = ToolkitConfig::from_lookup(lookup_from(&[
            (NUMERIC_EQUALITY_VAR, "Loose"),
            (LOG_FORMAT_VAR, "json"),
            (LOG_FILTER_VAR, "seqops=debug"),
        ]));
        assert_eq!(config.numeric_equality, NumericEquality::Loose);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter, "seqops=debug");
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = ToolkitConfig::from_lookup(lookup_from(&[
            (NUMERIC_EQUALITY_VAR, "fuzzy"),
            (LOG_FORMAT_VAR, "xml"),
            (LOG_FILTER_VAR, "  "),
        ]));
        assert_eq!(config, ToolkitConfig::default());
    }
}
