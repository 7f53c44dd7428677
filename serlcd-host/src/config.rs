//! Configuration file
//!
//! A small TOML file naming the port and describing the display:
//!
//! ```toml
//! port = "/dev/ttyUSB0"
//!
//! [display]
//! baud_rate = 19200
//! rows = 4
//! columns = 20
//! ```
//!
//! Every key is optional; missing ones take the [`DisplayConfig`] defaults.
//! Unknown keys are rejected so typos do not go unnoticed.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serlcd_core::DisplayConfig;

use crate::error::Error;

/// Contents of a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Serial device path
    pub port: Option<PathBuf>,
    /// Link and geometry settings
    pub display: DisplayConfig,
}

impl FileConfig {
    /// Parse config text
    pub fn parse(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&input).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
