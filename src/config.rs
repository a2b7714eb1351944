use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::domain::Version;
use crate::error::{ChangelogError, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "changelog.toml";
/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = "git-changelog.toml";

pub const DEFAULT_RELEASE_MARKER: &str = "[Release]";
pub const DEFAULT_BREAKING_MARKER: &str = "[Breaking]";
pub const DEFAULT_FEATURE_MARKER: &str = "[Feature]";
pub const DEFAULT_BUG_MARKER: &str = "[Bug]";

/// Same layout as git's own log date (`Mon Jan 02 15:04:05 2006 -0700`).
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";
pub const DEFAULT_TITLE: &str = "Change log";

/// Represents the complete configuration for git-changelog.
///
/// Contains the sentinel markers, the seed version and output formatting options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub markers: MarkersConfig,

    #[serde(default)]
    pub versioning: VersioningConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_release_marker() -> String {
    DEFAULT_RELEASE_MARKER.to_string()
}

fn default_breaking_marker() -> String {
    DEFAULT_BREAKING_MARKER.to_string()
}

fn default_feature_marker() -> String {
    DEFAULT_FEATURE_MARKER.to_string()
}

fn default_bug_marker() -> String {
    DEFAULT_BUG_MARKER.to_string()
}

/// Literal sentinel tags searched for in commit messages.
///
/// Matching is a case-sensitive substring test; no tokenizing or regex.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MarkersConfig {
    #[serde(default = "default_release_marker")]
    pub release: String,

    #[serde(default = "default_breaking_marker")]
    pub breaking: String,

    #[serde(default = "default_feature_marker")]
    pub feature: String,

    #[serde(default = "default_bug_marker")]
    pub bug: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        MarkersConfig {
            release: default_release_marker(),
            breaking: default_breaking_marker(),
            feature: default_feature_marker(),
            bug: default_bug_marker(),
        }
    }
}

fn default_seed() -> Version {
    Version::new(1, 0, 0)
}

/// Configuration for version derivation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct VersioningConfig {
    /// Version given to the first sealed release
    #[serde(default = "default_seed")]
    pub seed: Version,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            seed: default_seed(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Configuration for rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// chrono `strftime` pattern used for release dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            title: default_title(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Reject configurations that would make the pipeline meaningless.
    ///
    /// An empty marker matches every message, so it is refused outright.
    pub fn validate(&self) -> Result<()> {
        let markers = [
            ("release", &self.markers.release),
            ("breaking", &self.markers.breaking),
            ("feature", &self.markers.feature),
            ("bug", &self.markers.bug),
        ];

        for (name, marker) in markers {
            if marker.is_empty() {
                return Err(ChangelogError::config(format!(
                    "marker '{}' must not be empty",
                    name
                )));
            }
        }

        if self.output.date_format.trim().is_empty() {
            return Err(ChangelogError::config("date_format must not be empty"));
        }

        if StrftimeItems::new(&self.output.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ChangelogError::config(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.output.date_format
            )));
        }

        Ok(())
    }
}

/// Parses and validates configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `git-changelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        debug!(path, "loading configuration");
        fs::read_to_string(path).map_err(|e| {
            ChangelogError::config(format!("cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        debug!(path = LOCAL_CONFIG_FILE, "loading configuration");
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading configuration");
            fs::read_to_string(config_path)?
        } else {
            debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sentinel_tags() {
        let config = Config::default();
        assert_eq!(config.markers.release, "[Release]");
        assert_eq!(config.markers.breaking, "[Breaking]");
        assert_eq!(config.markers.feature, "[Feature]");
        assert_eq!(config.markers.bug, "[Bug]");
        assert_eq!(config.versioning.seed, Version::new(1, 0, 0));
        assert_eq!(config.output.title, "Change log");
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r##"
            [markers]
            release = "#release"

            [versioning]
            seed = "0.1.0"
            "##,
        )
        .unwrap();

        assert_eq!(config.markers.release, "#release");
        assert_eq!(config.markers.bug, "[Bug]");
        assert_eq!(config.versioning.seed, Version::new(0, 1, 0));
        assert_eq!(config.output.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_parse_rejects_bad_seed() {
        let result = parse_config("[versioning]\nseed = \"1.0\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_empty_marker() {
        let err = parse_config("[markers]\nfeature = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("feature"));
    }

    #[test]
    fn test_parse_rejects_invalid_date_format() {
        let err = parse_config("[output]\ndate_format = \"%Q\"\n").unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = load_config(Some("/definitely/not/here/changelog.toml"));
        assert!(matches!(result, Err(ChangelogError::Config(_))));
    }
}
