use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::matcher::{MatcherOptions, DEFAULT_PARALLEL_THRESHOLD};

/// Application configuration for the batch runner
///
/// The matching core never reads this; the runner turns it into explicit
/// [`MatcherOptions`] at start-up.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    /// Reject cases and providers whose urgency or rating is out of range
    /// instead of scoring them as given
    #[serde(default = "default_reject_out_of_range")]
    pub reject_out_of_range: bool,
    #[serde(default = "default_shortlist_limit")]
    pub shortlist_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
            reject_out_of_range: default_reject_out_of_range(),
            shortlist_limit: default_shortlist_limit(),
        }
    }
}

impl MatchingSettings {
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions {
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }
fn default_reject_out_of_range() -> bool { true }
fn default_shortlist_limit() -> usize { 3 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputSettings {
    /// Batch file to read when no path is given on the command line
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DOCMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DOCMATCH__MATCHING__PARALLEL_THRESHOLD -> matching.parallel_threshold
            .add_source(
                Environment::with_prefix("DOCMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DOCMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(matching.reject_out_of_range);
        assert_eq!(matching.shortlist_limit, 3);
        assert_eq!(
            matching.matcher_options().parallel_threshold,
            DEFAULT_PARALLEL_THRESHOLD
        );
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let settings = Settings::load_from("config/default.toml").unwrap();
        assert!(settings.matching.parallel_threshold > 0);
        assert_eq!(settings.logging.level, "info");
    }
}
