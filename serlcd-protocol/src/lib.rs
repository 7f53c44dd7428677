//! Serial LCD Command Protocol
//!
//! This crate defines the byte protocol spoken by the LCD backpack. Every
//! command starts with a one-byte opcode; only `PRINT` carries a variable
//! length, NUL-terminated payload.
//!
//! # Protocol Overview
//!
//! ```text
//! ┌────────────┬──────────────────────────────┐
//! │ INIT       │ A0                           │
//! │ MOVE       │ A1 col row                   │
//! │ PRINT      │ A2 text... 00                │
//! │ CONTROL    │ A3 code   (01 clear,         │
//! │            │            0E cursor on,     │
//! │            │            0C cursor off)    │
//! └────────────┴──────────────────────────────┘
//! ```
//!
//! There is no acknowledgement or flow control: the host paces itself by
//! waiting between writes.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod packet;

pub use command::{line_from, Command, Line, MAX_LINE_LEN};
pub use packet::{decode_all, DecodeError, EncodeError, Packet, MAX_PACKET_LEN};
