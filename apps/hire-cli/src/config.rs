//! # CLI Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `CAR_HIRE_*` environment variables
//! 2. `RUST_LOG` (log filter only)
//! 3. Defaults (this file)
//!
//! Only ambient behavior is configurable. Rates, fees and discounts are
//! constants in `hire-core`.

/// Filter used when nothing is set in the environment.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `hire_cli=debug`.
    pub log_filter: String,

    /// Force ANSI colours on or off. `None` means colour only when stderr is
    /// a terminal.
    pub log_ansi: Option<bool>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_ansi: None,
        }
    }
}

impl CliConfig {
    /// Creates a CliConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CAR_HIRE_LOG`: log filter (falls back to `RUST_LOG`)
    /// - `CAR_HIRE_LOG_ANSI`: `true`/`false`
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = CliConfig::default();

        if let Some(filter) = lookup("CAR_HIRE_LOG").or_else(|| lookup("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        if let Some(ansi) = lookup("CAR_HIRE_LOG_ANSI") {
            config.log_ansi = ansi.trim().parse::<bool>().ok();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_vars(vars(&[]));
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.log_ansi, None);
    }

    #[test]
    fn test_own_variable_wins_over_rust_log() {
        let config = CliConfig::from_vars(vars(&[
            ("CAR_HIRE_LOG", "hire_cli=debug"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.log_filter, "hire_cli=debug");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = CliConfig::from_vars(vars(&[("RUST_LOG", "info")]));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_blank_filter_keeps_default() {
        let config = CliConfig::from_vars(vars(&[("CAR_HIRE_LOG", "  ")]));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_ansi_flag() {
        let on = CliConfig::from_vars(vars(&[("CAR_HIRE_LOG_ANSI", "true")]));
        assert_eq!(on.log_ansi, Some(true));

        let junk = CliConfig::from_vars(vars(&[("CAR_HIRE_LOG_ANSI", "sometimes")]));
        assert_eq!(junk.log_ansi, None);
    }
}
