//! # Configuration Management for sqldecor
//!
//! This crate provides the configuration structures that select the target
//! SQL platform and the placeholder style used for prepared statements.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{AppConfig, DialectConfig, PlaceholderStyle, PlatformKind};
//!
//! let config = AppConfig::new(DialectConfig::new(
//!     PlatformKind::Mysql,
//!     PlaceholderStyle::Positional,
//! ));
//! assert_eq!(config.dialect.platform, PlatformKind::Mysql);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [dialect]
//! platform = "mysql"        # or "sql92"
//! placeholder = "positional" # "?" markers, or "named" for ":name" markers
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from SQLDECOR_CONFIG or ./sqldecor.toml, falling back to defaults
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./sqldecor.toml";
const CONFIG_PATH_VAR: &str = "SQLDECOR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dialect: DialectConfig,
}

/// Target SQL platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// MySQL / MariaDB: backtick quoting, LIMIT required with OFFSET
    #[default]
    Mysql,
    /// Plain SQL-92 rendering with double-quoted identifiers
    Sql92,
}

/// How bound parameters are marked in prepared SQL text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// `?` markers, bound in textual order
    #[default]
    Positional,
    /// `:name` markers
    Named,
}

/// Dialect configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectConfig {
    #[serde(default)]
    pub platform: PlatformKind,
    #[serde(default)]
    pub placeholder: PlaceholderStyle,
}

impl AppConfig {
    /// Create a configuration from its sections
    pub fn new(dialect: DialectConfig) -> Self {
        Self { dialect }
    }

    /// Load configuration from the TOML file named in the environment (or .env),
    /// from the default path, or fall back to defaults when neither exists
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        match env::var(CONFIG_PATH_VAR) {
            Ok(config_path) => Self::from_file(&config_path),
            Err(env::VarError::NotPresent) => {
                if Path::new(DEFAULT_CONFIG_PATH).exists() {
                    Self::from_file(DEFAULT_CONFIG_PATH)
                } else {
                    Ok(Self::default())
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        // Named markers are a driver-side convention that plain SQL-92 output has no use for
        if self.dialect.platform == PlatformKind::Sql92
            && self.dialect.placeholder == PlaceholderStyle::Named
        {
            return Err(ConfigError::Invalid(
                "Named placeholders are only supported for the mysql platform".to_string(),
            ));
        }

        Ok(())
    }
}

impl DialectConfig {
    /// Create a new dialect configuration
    pub fn new(platform: PlatformKind, placeholder: PlaceholderStyle) -> Self {
        Self {
            platform,
            placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_mysql_positional() {
        let config = AppConfig::default();
        assert_eq!(config.dialect.platform, PlatformKind::Mysql);
        assert_eq!(config.dialect.placeholder, PlaceholderStyle::Positional);
    }

    #[test]
    fn test_parse_full_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [dialect]
            platform = "mysql"
            placeholder = "named"
            "#,
        )
        .unwrap();

        assert_eq!(config.dialect.platform, PlatformKind::Mysql);
        assert_eq!(config.dialect.placeholder, PlaceholderStyle::Named);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_toml_str("[dialect]\nplatform = \"sql92\"\n").unwrap();
        assert_eq!(config.dialect.platform, PlatformKind::Sql92);
        assert_eq!(config.dialect.placeholder, PlaceholderStyle::Positional);
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let result = AppConfig::from_toml_str("[dialect]\nplatform = \"oracle\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_sql92_with_named_placeholders_is_invalid() {
        let result = AppConfig::from_toml_str(
            "[dialect]\nplatform = \"sql92\"\nplaceholder = \"named\"\n",
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dialect]\nplatform = \"mysql\"\nplaceholder = \"positional\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.dialect.platform, PlatformKind::Mysql);
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
