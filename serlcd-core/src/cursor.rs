//! Cursor bookkeeping
//!
//! The display never reports where its cursor is, so the host keeps its own
//! copy. It is only updated after the commands that moved the hardware
//! cursor have all been written successfully.

use crate::geometry::{CursorPosition, DisplayGeometry, OutOfBounds};

/// Host-side model of the hardware cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorModel {
    geometry: DisplayGeometry,
    position: CursorPosition,
}

impl CursorModel {
    /// Create a model with the cursor at the origin
    pub const fn new(geometry: DisplayGeometry) -> Self {
        Self {
            geometry,
            position: CursorPosition::ORIGIN,
        }
    }

    /// Current position
    pub const fn position(&self) -> CursorPosition {
        self.position
    }

    /// Geometry the position is bounded by
    pub const fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// Return the cursor to the origin
    pub fn reset(&mut self) -> CursorPosition {
        self.position = CursorPosition::ORIGIN;
        self.position
    }

    /// Move to a coordinate, rejecting anything outside the geometry
    pub fn set(&mut self, column: u16, row: u16) -> Result<CursorPosition, OutOfBounds> {
        self.position = self.geometry.locate(column, row)?;
        Ok(self.position)
    }

    /// Record a position produced by a completed render
    ///
    /// Out-of-range input is clamped into the geometry.
    pub fn commit(&mut self, position: CursorPosition) {
        self.position = CursorPosition {
            column: position.column.min(self.geometry.last_column()),
            row: position.row.min(self.geometry.last_row()),
        };
    }

    /// Where the cursor ends up after writing `length` bytes from here
    ///
    /// Without `wrap` the cursor stops at the last column of its row. With
    /// `wrap` it continues at column 0 of each following row, and stops on
    /// the last cell of the display.
    pub fn advance_by(&self, length: usize, wrap: bool) -> CursorPosition {
        let columns = usize::from(self.geometry.columns());
        let column = usize::from(self.position.column) + length;

        if !wrap {
            return CursorPosition {
                column: column.min(columns - 1) as u8,
                row: self.position.row,
            };
        }

        let row = usize::from(self.position.row) + column / columns;
        if row > usize::from(self.geometry.last_row()) {
            CursorPosition {
                column: self.geometry.last_column(),
                row: self.geometry.last_row(),
            }
        } else {
            CursorPosition {
                column: (column % columns) as u8,
                row: row as u8,
            }
        }
    }

    /// Position of the start of the row below, clamped to the last row
    pub fn next_line(&self) -> CursorPosition {
        CursorPosition {
            column: 0,
            row: self
                .position
                .row
                .saturating_add(1)
                .min(self.geometry.last_row()),
        }
    }
}
