//! Command types for the LCD backpack
//!
//! Commands flow one way only, from the host to the display.

use heapless::Vec;

// Opcodes
pub const OP_INIT: u8 = 0xA0;
pub const OP_MOVE: u8 = 0xA1;
pub const OP_PRINT: u8 = 0xA2;
pub const OP_CONTROL: u8 = 0xA3;

// Control codes (second byte of OP_CONTROL)
pub const CTRL_CLEAR: u8 = 0x01;
pub const CTRL_CURSOR_ON: u8 = 0x0E;
pub const CTRL_CURSOR_OFF: u8 = 0x0C;

/// Terminates the text of a PRINT command
pub const PRINT_TERMINATOR: u8 = 0x00;

/// Longest text a single PRINT can carry (one byte of column addressing)
pub const MAX_LINE_LEN: usize = 255;

/// Text payload of a PRINT command
pub type Line = Vec<u8, MAX_LINE_LEN>;

/// Build a [`Line`] from raw bytes
///
/// Bytes past [`MAX_LINE_LEN`] are dropped.
pub fn line_from(bytes: &[u8]) -> Line {
    let mut line = Line::new();
    for &byte in bytes.iter().take(MAX_LINE_LEN) {
        let _ = line.push(byte);
    }
    line
}

/// Commands sent from the host to the display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Reset the display controller
    Init,
    /// Blank the screen and home the hardware cursor
    Clear,
    /// Show or hide the hardware cursor
    SetCursorVisible(bool),
    /// Move the hardware cursor
    MoveCursor { column: u8, row: u8 },
    /// Write text starting at the hardware cursor
    PrintLine(Line),
}

impl Command {
    /// Shorthand for a PRINT of the given bytes
    pub fn print(bytes: &[u8]) -> Self {
        Command::PrintLine(line_from(bytes))
    }

    /// Shorthand for a MOVE
    pub const fn move_to(column: u8, row: u8) -> Self {
        Command::MoveCursor { column, row }
    }

    /// Opcode byte this command starts with
    pub const fn opcode(&self) -> u8 {
        match self {
            Command::Init => OP_INIT,
            Command::MoveCursor { .. } => OP_MOVE,
            Command::PrintLine(_) => OP_PRINT,
            Command::Clear | Command::SetCursorVisible(_) => OP_CONTROL,
        }
    }

    /// Number of bytes this command occupies on the wire
    pub fn encoded_len(&self) -> usize {
        match self {
            Command::Init => 1,
            Command::Clear | Command::SetCursorVisible(_) => 2,
            Command::MoveCursor { .. } => 3,
            Command::PrintLine(text) => text.len() + 2,
        }
    }

    /// Text payload, if this is a PRINT
    pub fn text(&self) -> Option<&[u8]> {
        match self {
            Command::PrintLine(text) => Some(text),
            _ => None,
        }
    }
}
