//! Configuration for airroute
//!
//! Configuration is read from `airroute.toml` in the working directory,
//! or from an explicit path given with `--config`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{RouteError, Result};

pub use types::{IngestConfig, MstConfig, RouteConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION};

impl RouteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RouteConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                path = %path.display(),
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer airroute"
            );
        }
        if !config.ingest.delimiter.is_ascii() {
            return Err(RouteError::invalid_value(
                "ingest.delimiter",
                config.ingest.delimiter,
            ));
        }

        Ok(config)
    }

    /// Look for `airroute.toml` in `dir`
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "loading config");
        Self::load(&path).map(Some)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
