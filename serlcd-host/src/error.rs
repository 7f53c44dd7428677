//! Host errors

use std::io;
use std::path::PathBuf;

use serlcd_core::geometry::ConfigError;

/// Errors from the host layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Serial device could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serial device opened but could not be put in raw mode at the
    /// requested speed
    #[error("failed to configure {}: {source}", path.display())]
    Configure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Geometry or link settings rejected before any I/O
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Config file could not be read
    #[error("failed to read {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid
    #[error("invalid config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No serial port given on the command line or in the config file
    #[error("no serial port configured (use --port or set `port` in the config file)")]
    NoPort,

    /// Text could not be read from stdin
    #[error("failed to read text from stdin: {0}")]
    Input(#[source] io::Error),

    /// A display operation failed
    #[error(transparent)]
    Display(#[from] serlcd_core::Error<io::Error>),

    /// A thread panicked while holding a shared display
    #[error("display lock poisoned by a panicked thread")]
    Poisoned,
}
