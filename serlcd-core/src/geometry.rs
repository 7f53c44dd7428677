//! Display geometry and cursor coordinates
//!
//! Both dimensions travel over the wire as single bytes, so anything past
//! [`MAX_DIMENSION`] is a configuration error.

/// Largest row or column count the protocol can address
pub const MAX_DIMENSION: u16 = 255;

/// Errors in a display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Display must have at least one row
    ZeroRows,
    /// Display must have at least one column
    ZeroColumns,
    /// Row count does not fit in one protocol byte
    RowsOutOfRange(u16),
    /// Column count does not fit in one protocol byte
    ColumnsOutOfRange(u16),
    /// Baud rate not supported by the link
    UnsupportedBaudRate(u32),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroRows => write!(f, "display needs at least one row"),
            ConfigError::ZeroColumns => write!(f, "display needs at least one column"),
            ConfigError::RowsOutOfRange(rows) => {
                write!(f, "{rows} rows exceeds the addressable maximum of {MAX_DIMENSION}")
            }
            ConfigError::ColumnsOutOfRange(columns) => {
                write!(f, "{columns} columns exceeds the addressable maximum of {MAX_DIMENSION}")
            }
            ConfigError::UnsupportedBaudRate(baud) => write!(f, "unsupported baud rate {baud}"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Target coordinate that falls outside the configured geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfBounds {
    pub column: u16,
    pub row: u16,
}

/// Size of the display in character cells
///
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    rows: u8,
    columns: u8,
}

impl DisplayGeometry {
    /// The common 16x2 module
    pub const DEFAULT: Self = Self {
        rows: 2,
        columns: 16,
    };

    /// Validate and build a geometry
    pub fn new(rows: u16, columns: u16) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        let rows = u8::try_from(rows).map_err(|_| ConfigError::RowsOutOfRange(rows))?;
        let columns =
            u8::try_from(columns).map_err(|_| ConfigError::ColumnsOutOfRange(columns))?;
        Ok(Self { rows, columns })
    }

    /// Number of rows
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Index of the bottom row
    pub const fn last_row(&self) -> u8 {
        self.rows - 1
    }

    /// Index of the rightmost column
    pub const fn last_column(&self) -> u8 {
        self.columns - 1
    }

    /// Check a coordinate against the geometry
    pub fn locate(&self, column: u16, row: u16) -> Result<CursorPosition, OutOfBounds> {
        if column < u16::from(self.columns) && row < u16::from(self.rows) {
            // Both fit in u8 because the geometry does
            Ok(CursorPosition {
                column: column as u8,
                row: row as u8,
            })
        } else {
            Err(OutOfBounds { column, row })
        }
    }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cursor location in character cells, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub column: u8,
    pub row: u8,
}

impl CursorPosition {
    /// Top-left cell
    pub const ORIGIN: Self = Self { column: 0, row: 0 };

    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}
