//! Configuration type definitions
//!
//! Defaults match the common 16x2 backpack at 19200 baud. Nothing here is
//! global: a [`DisplayConfig`] is handed to the session when it is created.

use serlcd_hal::{SerialConfig, DEFAULT_BAUD_RATE};

use crate::geometry::{ConfigError, DisplayGeometry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default row count
pub const DEFAULT_ROWS: u16 = 2;

/// Default column count
pub const DEFAULT_COLUMNS: u16 = 16;

/// Connection and geometry settings for one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// Link speed in bits per second
    pub baud_rate: u32,
    /// Character rows
    pub rows: u16,
    /// Character columns
    pub columns: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl DisplayConfig {
    /// Validated geometry
    pub fn geometry(&self) -> Result<DisplayGeometry, ConfigError> {
        DisplayGeometry::new(self.rows, self.columns)
    }

    /// Serial link parameters (8N1 at the configured baud rate)
    pub fn serial(&self) -> SerialConfig {
        SerialConfig::with_baudrate(self.baud_rate)
    }
}

/// How segments of a print request are placed on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressingMode {
    /// Each line of text owns a physical row, starting at column 0
    #[default]
    LineIndexed,
    /// Text continues from wherever the cursor currently is
    CursorRelative,
}

/// Per-call rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Leave the hardware cursor visible after printing
    pub show_cursor: bool,
    /// Scroll (line-indexed) or wrap (cursor-relative) text wider than the
    /// display instead of cutting it off
    pub scroll: bool,
    /// Segment placement policy
    pub addressing: AddressingMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_cursor: false,
            scroll: true,
            addressing: AddressingMode::LineIndexed,
        }
    }
}

impl RenderOptions {
    pub fn with_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }

    pub fn with_scroll(mut self, scroll: bool) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_addressing(mut self, addressing: AddressingMode) -> Self {
        self.addressing = addressing;
        self
    }
}
