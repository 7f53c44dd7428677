//! Byte encoding and decoding of [`Command`]s.
//!
//! Wire format:
//! - INIT: `A0`
//! - MOVE: `A1 col row`
//! - PRINT: `A2` followed by the text bytes and a `00` terminator
//! - CONTROL: `A3 code`

use heapless::Vec;

use crate::command::{
    Command, Line, CTRL_CLEAR, CTRL_CURSOR_OFF, CTRL_CURSOR_ON, MAX_LINE_LEN, OP_CONTROL, OP_INIT,
    OP_MOVE, OP_PRINT, PRINT_TERMINATOR,
};

/// Largest encoded command (PRINT opcode + full line + terminator)
pub const MAX_PACKET_LEN: usize = 1 + MAX_LINE_LEN + 1;

/// Encoded bytes of one command
pub type Packet = Vec<u8, MAX_PACKET_LEN>;

/// Errors that can occur while encoding into a caller buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Buffer too small for the encoded command
    BufferTooSmall,
}

/// Errors that can occur while decoding a byte stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Command is incomplete (need more bytes)
    Incomplete,
    /// First byte is not a known opcode
    UnknownOpcode(u8),
    /// CONTROL code is not a known one
    UnknownControl(u8),
    /// PRINT text runs past [`MAX_LINE_LEN`] without a terminator
    LineTooLong,
}

impl Command {
    /// Encode this command into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode_into(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        let len = self.encoded_len();
        if buffer.len() < len {
            return Err(EncodeError::BufferTooSmall);
        }

        buffer[0] = self.opcode();
        match self {
            Command::Init => {}
            Command::Clear => buffer[1] = CTRL_CLEAR,
            Command::SetCursorVisible(true) => buffer[1] = CTRL_CURSOR_ON,
            Command::SetCursorVisible(false) => buffer[1] = CTRL_CURSOR_OFF,
            Command::MoveCursor { column, row } => {
                buffer[1] = *column;
                buffer[2] = *row;
            }
            Command::PrintLine(text) => {
                buffer[1..1 + text.len()].copy_from_slice(text);
                buffer[1 + text.len()] = PRINT_TERMINATOR;
            }
        }

        Ok(len)
    }

    /// Encode this command into a heapless Vec
    ///
    /// Cannot fail: a [`Packet`] holds the largest possible command.
    pub fn encode(&self) -> Packet {
        let mut buffer = [0u8; MAX_PACKET_LEN];
        let len = self.encode_into(&mut buffer).unwrap_or(0);
        Packet::from_slice(&buffer[..len]).unwrap_or_default()
    }

    /// Decode the first command in `bytes`
    ///
    /// Returns the command and the number of bytes it consumed.
    pub fn decode(bytes: &[u8]) -> Result<(Command, usize), DecodeError> {
        let (&opcode, rest) = bytes.split_first().ok_or(DecodeError::Incomplete)?;

        match opcode {
            OP_INIT => Ok((Command::Init, 1)),
            OP_MOVE => match rest {
                [column, row, ..] => Ok((
                    Command::MoveCursor {
                        column: *column,
                        row: *row,
                    },
                    3,
                )),
                _ => Err(DecodeError::Incomplete),
            },
            OP_CONTROL => match rest.first() {
                Some(&CTRL_CLEAR) => Ok((Command::Clear, 2)),
                Some(&CTRL_CURSOR_ON) => Ok((Command::SetCursorVisible(true), 2)),
                Some(&CTRL_CURSOR_OFF) => Ok((Command::SetCursorVisible(false), 2)),
                Some(&code) => Err(DecodeError::UnknownControl(code)),
                None => Err(DecodeError::Incomplete),
            },
            OP_PRINT => {
                let end = rest.iter().position(|&b| b == PRINT_TERMINATOR);
                match end {
                    Some(end) if end <= MAX_LINE_LEN => {
                        let text = Line::from_slice(&rest[..end])
                            .map_err(|_| DecodeError::LineTooLong)?;
                        Ok((Command::PrintLine(text), end + 2))
                    }
                    Some(_) => Err(DecodeError::LineTooLong),
                    None if rest.len() > MAX_LINE_LEN => Err(DecodeError::LineTooLong),
                    None => Err(DecodeError::Incomplete),
                }
            }
            other => Err(DecodeError::UnknownOpcode(other)),
        }
    }
}

/// Iterator over the commands in a byte stream
///
/// Stops at the first error, which it yields.
pub fn decode_all(bytes: &[u8]) -> impl Iterator<Item = Result<Command, DecodeError>> + '_ {
    let mut rest = bytes;
    let mut failed = false;
    core::iter::from_fn(move || {
        if rest.is_empty() || failed {
            return None;
        }
        match Command::decode(rest) {
            Ok((command, used)) => {
                rest = &rest[used..];
                Some(Ok(command))
            }
            Err(e) => {
                failed = true;
                Some(Err(e))
            }
        }
    })
}
