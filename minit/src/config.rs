//! Configuration module for the minit CLI.
//!
//! Settings come from a `minit.toml` file. Every field has a default, so an
//! empty or partial file is valid.

use dirs::{config_dir, home_dir};
use minic_util::diagnostic::ColorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{MinitError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "minit.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Token output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// When to color diagnostics.
    #[serde(default)]
    pub color: ColorConfig,

    /// Lexer-specific configuration.
    #[serde(default)]
    pub lexer: LexerConfig,
}

/// Lexer-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Words reserved in addition to the built-in list.
    #[serde(default)]
    pub reserved_words: Vec<String>,

    /// Stop printing diagnostics for a file after this many (0 = no limit).
    #[serde(default)]
    pub max_errors: usize,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/minit/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MinitError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MinitError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject reserved words the lexer could never produce as identifiers.
    fn validate(&self) -> Result<()> {
        for word in &self.lexer.reserved_words {
            let mut chars = word.chars();
            let valid = chars
                .next()
                .map_or(false, minic_lex::charclass::is_ident_start)
                && chars.all(minic_lex::charclass::is_ident_continue);
            if !valid {
                return Err(MinitError::Config(format!(
                    "Reserved word is not an identifier: {:?}",
                    word
                )));
            }
        }
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("minit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("minit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            format: OutputFormat::Json,
            color: ColorConfig::Never,
            lexer: LexerConfig {
                reserved_words: vec!["repeat".to_string(), "until".to_string()],
                max_errors: 10,
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.color, ColorConfig::Auto);
        assert!(config.lexer.reserved_words.is_empty());
        assert_eq!(config.lexer.max_errors, 0);
    }

    #[test]
    fn test_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let original_config = create_test_config();
        let content = toml::to_string_pretty(&original_config).unwrap();
        std::fs::write(&config_path, content).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[lexer]\nmax_errors = 3\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.lexer.max_errors, 3);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_reserved_word() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[lexer]\nreserved_words = [\"two words\"]\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MinitError::Config(_))));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "format = \"yaml\"\n").unwrap();

        assert!(Config::load_from_path(&config_path).is_err());
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/minit.toml"));
        assert!(result.is_err());
    }
}
