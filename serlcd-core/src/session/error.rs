//! Session errors

use core::fmt;

use crate::geometry::{ConfigError, OutOfBounds};
use crate::render::InvalidText;

/// Errors returned by [`Display`](super::Display) operations
///
/// `E` is the transport's error type. Everything except `Transport` is
/// detected before any byte is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The link failed; the operation stopped at the failing write
    Transport(E),
    /// Geometry or link settings are unusable
    Config(ConfigError),
    /// Target coordinate is outside the display
    OutOfBounds { column: u16, row: u16 },
    /// Text contains a NUL byte
    InvalidText,
    /// Session is not in the `Ready` state
    NotReady,
}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl<E> From<OutOfBounds> for Error<E> {
    fn from(e: OutOfBounds) -> Self {
        Error::OutOfBounds {
            column: e.column,
            row: e.row,
        }
    }
}

impl<E> From<InvalidText> for Error<E> {
    fn from(_: InvalidText) -> Self {
        Error::InvalidText
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport error: {e}"),
            Error::Config(e) => write!(f, "configuration error: {e}"),
            Error::OutOfBounds { column, row } => {
                write!(f, "position ({column}, {row}) is outside the display")
            }
            Error::InvalidText => write!(f, "text contains a NUL byte"),
            Error::NotReady => write!(f, "display session is not ready"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for Error<E> {}
