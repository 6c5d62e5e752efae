//! Configuration for the web search filter.
//!
//! This module provides the filter's options with their defaults and range
//! checks, YAML loading, and CLI argument parsing via `arrrg` for the
//! `websearch-filter` binary.

use std::path::Path;

use arrrg_derive::CommandLine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default pipeline priority.
pub const DEFAULT_PRIORITY: u8 = 0;

/// Highest pipeline priority accepted.
pub const MAX_PRIORITY: u8 = 10;

/// Default cap on web searches per request.
pub const DEFAULT_MAX_SEARCHES: u32 = 5;

/// Lowest per-request search cap accepted.
pub const MIN_MAX_SEARCHES: u32 = 1;

/// Highest per-request search cap accepted.
pub const MAX_MAX_SEARCHES: u32 = 20;

/// Command-line arguments for the websearch-filter tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// YAML file holding a `FilterConfig`.
    #[arrrg(optional, "YAML configuration file", "PATH")]
    pub config: Option<String>,

    /// Which side of the exchange the input body is.
    #[arrrg(optional, "Stage: request or response (default: request)", "STAGE")]
    pub stage: Option<String>,

    /// Override the per-request search cap.
    #[arrrg(optional, "Maximum web searches per request (1-20)", "N")]
    pub max_searches: Option<u32>,

    /// Override the pipeline priority.
    #[arrrg(optional, "Pipeline priority (0-10)", "N")]
    pub priority: Option<u32>,

    /// Turn the filter off entirely.
    #[arrrg(flag, "Disable the filter")]
    pub disable: bool,

    /// Do not inject web search automatically.
    #[arrrg(flag, "Do not inject web search for Claude models")]
    pub no_auto_enable: bool,
}

/// Options for a [`crate::WebSearchFilter`].
///
/// Immutable once the filter is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Ordering hint for the host pipeline (0-10).  Higher priority filters run first.
    pub priority: u8,

    /// Global on/off switch.
    pub enabled: bool,

    /// Upper bound on searches, written into the injected tool (1-20).
    #[serde(alias = "maxSearches")]
    pub max_searches: u32,

    /// Inject web search automatically for Claude models.
    #[serde(alias = "autoEnable")]
    pub auto_enable: bool,
}

impl FilterConfig {
    /// Creates a new FilterConfig with default values.
    ///
    /// Defaults:
    /// - Priority: 0
    /// - Enabled: true
    /// - Max searches: 5
    /// - Auto enable: true
    pub fn new() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            enabled: true,
            max_searches: DEFAULT_MAX_SEARCHES,
            auto_enable: true,
        }
    }

    /// Sets the pipeline priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Enables or disables the filter.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the per-request search cap.
    pub fn with_max_searches(mut self, max_searches: u32) -> Self {
        self.max_searches = max_searches;
        self
    }

    /// Sets whether web search is injected automatically.
    pub fn with_auto_enable(mut self, auto_enable: bool) -> Self {
        self.auto_enable = auto_enable;
        self
    }

    /// Check every option against its documented range.
    pub fn validate(&self) -> Result<()> {
        if self.priority > MAX_PRIORITY {
            return Err(Error::validation(
                format!(
                    "priority must be between 0 and {MAX_PRIORITY}, got {}",
                    self.priority
                ),
                Some("priority".to_string()),
            ));
        }
        if !(MIN_MAX_SEARCHES..=MAX_MAX_SEARCHES).contains(&self.max_searches) {
            return Err(Error::validation(
                format!(
                    "max_searches must be between {MIN_MAX_SEARCHES} and {MAX_MAX_SEARCHES}, got {}",
                    self.max_searches
                ),
                Some("max_searches".to_string()),
            ));
        }
        Ok(())
    }

    /// Parse and validate a YAML configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, names an
    /// unknown option, or holds an out-of-range value.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|err| Error::io(format!("could not read {}: {err}", path.display()), err))?;
        Self::from_yaml_str(&content)
    }

    /// Resolve command-line arguments: the config file (or defaults) first, then flags.
    pub fn from_args(args: &FilterArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::new(),
        };
        if let Some(max_searches) = args.max_searches {
            config.max_searches = max_searches;
        }
        if let Some(priority) = args.priority {
            config.priority = u8::try_from(priority).map_err(|_| {
                Error::validation(
                    format!("priority must be between 0 and {MAX_PRIORITY}, got {priority}"),
                    Some("priority".to_string()),
                )
            })?;
        }
        if args.disable {
            config.enabled = false;
        }
        if args.no_auto_enable {
            config.auto_enable = false;
        }
        config.validate()?;
        Ok(config)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FilterConfig::new();
        assert_eq!(config.priority, 0);
        assert!(config.enabled);
        assert_eq!(config.max_searches, 5);
        assert!(config.auto_enable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_pattern() {
        let config = FilterConfig::new()
            .with_priority(10)
            .with_enabled(false)
            .with_max_searches(20)
            .with_auto_enable(false);
        assert_eq!(config.priority, 10);
        assert!(!config.enabled);
        assert_eq!(config.max_searches, 20);
        assert!(!config.auto_enable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn priority_out_of_range() {
        let err = FilterConfig::new().with_priority(11).validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.param(), Some("priority"));
    }

    #[test]
    fn max_searches_out_of_range() {
        for max_searches in [0, 21, 100] {
            let err = FilterConfig::new()
                .with_max_searches(max_searches)
                .validate()
                .unwrap_err();
            assert_eq!(err.param(), Some("max_searches"));
        }
        for max_searches in [1, 20] {
            assert!(FilterConfig::new()
                .with_max_searches(max_searches)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn yaml_partial_uses_defaults() {
        let config = FilterConfig::from_yaml_str("max_searches: 12\n").unwrap();
        assert_eq!(config, FilterConfig::new().with_max_searches(12));
    }

    #[test]
    fn yaml_accepts_camel_case() {
        let config = FilterConfig::from_yaml_str("maxSearches: 3\nautoEnable: false\n").unwrap();
        assert_eq!(config.max_searches, 3);
        assert!(!config.auto_enable);
    }

    #[test]
    fn yaml_rejects_unknown_and_invalid() {
        let err = FilterConfig::from_yaml_str("max_serches: 3\n").unwrap_err();
        assert!(err.is_serialization());
        let err = FilterConfig::from_yaml_str("max_searches: 50\n").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FilterConfig::from_file("/nonexistent/websearch-filter.yaml").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn config_from_args_defaults() {
        let config = FilterConfig::from_args(&FilterArgs::default()).unwrap();
        assert_eq!(config, FilterConfig::new());
    }

    #[test]
    fn config_from_args_custom() {
        let args = FilterArgs {
            config: None,
            stage: Some("response".to_string()),
            max_searches: Some(9),
            priority: Some(4),
            disable: true,
            no_auto_enable: true,
        };
        let config = FilterConfig::from_args(&args).unwrap();
        assert_eq!(config.max_searches, 9);
        assert_eq!(config.priority, 4);
        assert!(!config.enabled);
        assert!(!config.auto_enable);
    }

    #[test]
    fn config_from_args_rejects_out_of_range() {
        let args = FilterArgs {
            max_searches: Some(0),
            ..FilterArgs::default()
        };
        assert!(FilterConfig::from_args(&args).unwrap_err().is_validation());

        let args = FilterArgs {
            priority: Some(300),
            ..FilterArgs::default()
        };
        let err = FilterConfig::from_args(&args).unwrap_err();
        assert_eq!(err.param(), Some("priority"));
    }
}
