//! Configuration handling
//!
//! Parses and validates `webext-loader.toml` files.

mod schema;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LoaderError, Result};

pub use schema::*;

/// Default config file name, looked up relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "webext-loader.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output naming
    #[serde(default)]
    pub output: OutputConfig,

    /// Extension runtime settings
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// HTML bootstrap settings
    #[serde(default)]
    pub html: HtmlConfig,
}

impl Config {
    /// Load configuration from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse_at(&content, path)?;

        debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when the file does
    /// not exist and `required` is false
    pub fn load_or_default<P: AsRef<Path>>(path: P, required: bool) -> Result<Self> {
        let path = path.as_ref();
        if !required && !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_at(content, Path::new("<inline>"))
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| LoaderError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.runtime.url_resolver.trim().is_empty() {
            return Err(LoaderError::InvalidConfig(
                "runtime.url_resolver must not be empty".to_string(),
            ));
        }

        let service_worker = &self.runtime.service_worker;
        if service_worker.is_empty() || service_worker.contains('/') || !service_worker.ends_with(".js") {
            return Err(LoaderError::InvalidConfig(format!(
                "runtime.service_worker must be a plain `.js` file name, got '{}'",
                service_worker
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.output.dir, "");
        assert_eq!(config.runtime.url_resolver, "chrome.runtime.getURL");
        assert_eq!(config.runtime.service_worker, "serviceWorker.js");
        assert_eq!(config.html.lang, "en");
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
            [output]
            dir = "assets"

            [runtime]
            url_resolver = "browser.runtime.getURL"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.dir, "assets");
        assert_eq!(config.runtime.url_resolver, "browser.runtime.getURL");
        assert_eq!(config.runtime.service_worker, "serviceWorker.js");
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::parse("[runtime]\nurl_resolver = \"  \"").unwrap_err();
        assert!(matches!(err, LoaderError::InvalidConfig(_)));

        let err = Config::parse("[runtime]\nservice_worker = \"sw/background.js\"").unwrap_err();
        assert!(matches!(err, LoaderError::InvalidConfig(_)));

        let err = Config::parse("[runtime]\nservice_worker = \"background.mjs\"").unwrap_err();
        assert!(matches!(err, LoaderError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[html]\nlang = \"de\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.html.lang, "de");
    }

    #[test]
    fn test_load_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output\ndir = 1").unwrap();

        match Config::load(file.path()).unwrap_err() {
            LoaderError::Config { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(DEFAULT_CONFIG_FILE);

        let config = Config::load_or_default(&missing, false).unwrap();
        assert_eq!(config.runtime.service_worker, "serviceWorker.js");

        let err = Config::load_or_default(&missing, true).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }
}
