//! Front-end configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{Locale, WinRule};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "ultimate.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct UltimateConfig {
    /// Language for status text and board names.
    #[serde(default)]
    locale: Locale,

    /// Win condition for new games.
    #[serde(default)]
    win_rule: WinRule,

    /// Where the interactive session writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("ultimate_tui.log")
}

impl Default for UltimateConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            win_rule: WinRule::default(),
            log_file: default_log_file(),
        }
    }
}

impl UltimateConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(locale = %config.locale, win_rule = %config.win_rule, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the config for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(
        self,
        locale: Option<Locale>,
        win_rule: Option<WinRule>,
        log_file: Option<PathBuf>,
    ) -> Self {
        let mut config = self;
        if let Some(locale) = locale {
            config = config.with_locale(locale);
        }
        if let Some(win_rule) = win_rule {
            config = config.with_win_rule(win_rule);
        }
        if let Some(log_file) = log_file {
            config = config.with_log_file(log_file);
        }
        config
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_reads_all_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "locale = \"ar\"\nwin_rule = \"meta-board\"\nlog_file = \"game.log\""
        )
        .unwrap();

        let config = UltimateConfig::from_file(file.path()).unwrap();
        assert_eq!(config.locale(), &Locale::Arabic);
        assert_eq!(config.win_rule(), &WinRule::MetaBoard);
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "locale = \"english\"").unwrap();

        let config = UltimateConfig::from_file(file.path()).unwrap();
        assert_eq!(config, UltimateConfig::default());
    }

    #[test]
    fn test_parse_error_reports_location() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "win_rule = \"sudden-death\"").unwrap();

        let err = UltimateConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(UltimateConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = UltimateConfig::default().with_overrides(
            Some(Locale::Arabic),
            None,
            Some(PathBuf::from("other.log")),
        );
        assert_eq!(config.locale(), &Locale::Arabic);
        assert_eq!(config.win_rule(), &WinRule::FirstLocalWin);
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
    }
}
