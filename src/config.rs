use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{PatternError, Result};

/// Settings shared by every demo binary.
///
/// All fields are optional in the TOML source:
///
/// ```toml
/// color = false
/// log_filter = "healthcare_patterns=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub color: bool,
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl DemoConfig {
    pub const ENV_VAR: &'static str = "PATTERNS_CONFIG";
    pub const DEFAULT_PATH: &'static str = "patterns.toml";

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| PatternError::config_read(path, err))?;
        Self::from_toml(&content)
    }

    /// Resolves the config from `PATTERNS_CONFIG`, then `patterns.toml`, then defaults.
    pub fn load() -> Result<Self> {
        let explicit = env::var_os(Self::ENV_VAR).map(PathBuf::from);
        Self::resolve(explicit.as_deref(), Path::new(Self::DEFAULT_PATH))
    }

    fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None if fallback.is_file() => Self::load_from(fallback),
            None => Ok(Self::default()),
        }
    }

    /// Like [`DemoConfig::load`], but reports a broken config on stderr and keeps going.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => {
                debug!(?config, "loaded demo config");
                config
            }
            Err(err) => {
                eprintln!("{err}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert!(config.color);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DemoConfig::from_toml("color = false").unwrap();
        assert!(!config.color);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_toml() {
        let err = DemoConfig::from_toml("color = \"maybe\"").unwrap_err();
        assert!(matches!(err, PatternError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = DemoConfig::load_from(file.path()).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert!(config.color);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = DemoConfig::resolve(Some(&missing), Path::new("unused.toml")).unwrap_err();
        assert!(matches!(err, PatternError::ConfigRead { .. }));
    }

    #[test]
    fn test_absent_fallback_gives_defaults() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join(DemoConfig::DEFAULT_PATH);

        let config = DemoConfig::resolve(None, &fallback).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_present_fallback_is_read() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join(DemoConfig::DEFAULT_PATH);
        fs::write(&fallback, "color = false\n").unwrap();

        let config = DemoConfig::resolve(None, &fallback).unwrap();
        assert!(!config.color);
    }
}
