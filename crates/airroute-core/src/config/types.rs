//! Configuration type definitions

use crate::tree::MstAlgorithm;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// File name searched for in the working directory
pub const CONFIG_FILE_NAME: &str = "airroute.toml";

/// Top-level airroute configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default flight data file (optional, overridden by `--data`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// CSV ingestion settings
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Spanning tree settings
    #[serde(default)]
    pub mst: MstConfig,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            data: None,
            ingest: IngestConfig::default(),
            mst: MstConfig::default(),
        }
    }
}

/// Settings for reading flight CSV files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Field delimiter (single ASCII character)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Whether the first row is a header row
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,

    /// Skip malformed rows with a warning instead of failing
    #[serde(default)]
    pub skip_invalid: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_headers: default_has_headers(),
            skip_invalid: false,
        }
    }
}

/// Settings for spanning tree construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MstConfig {
    /// Algorithm used when `--algorithm` is not given
    #[serde(default)]
    pub algorithm: MstAlgorithm,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_delimiter() -> char {
    ','
}

fn default_has_headers() -> bool {
    true
}
