//! Demo configuration, read from `config.json` in the config directory.

use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use tabula_lib::error::ConfigError;

use crate::error::DemoError;
use crate::paths;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Log level for `latest.log`.
    pub log_level: String,
    /// Rows per page in paged stories.
    pub page_size: usize,
    /// Overrides the empty-state text of tables.
    pub empty_text: Option<String>,
    /// Story rendered when none is named on the command line.
    pub story: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            page_size: 5,
            empty_text: None,
            story: None,
        }
    }
}

impl DemoConfig {
    /// Load from the config directory; a missing file gives the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match paths::config_file() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, DemoError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| DemoError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = DemoConfig::from_json_str(r#"{ "page_size": 8 }"#).unwrap();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.story, None);
    }

    #[test]
    fn test_bad_log_level() {
        let config = DemoConfig::from_json_str(r#"{ "log_level": "loud" }"#).unwrap();
        assert!(matches!(
            config.level_filter(),
            Err(DemoError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            DemoConfig::from_json_str("{ page_size: }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
