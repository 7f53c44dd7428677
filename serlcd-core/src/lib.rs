//! Transport-agnostic core of the serial LCD driver
//!
//! This crate contains everything that does not depend on how bytes reach
//! the display:
//!
//! - Display geometry and the cursor model
//! - The render engine, which turns text into an ordered plan of commands
//!   and settle delays
//! - The session lifecycle state machine
//! - [`Display`], the single-writer session that executes plans over a
//!   [`serlcd_hal::SerialTx`] link
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod geometry;
pub mod render;
pub mod session;

pub use config::{AddressingMode, DisplayConfig, RenderOptions};
pub use cursor::CursorModel;
pub use geometry::{ConfigError, CursorPosition, DisplayGeometry, OutOfBounds};
pub use render::{RenderPlan, Step};
pub use session::{Display, Error, SessionEvent, SessionState};
