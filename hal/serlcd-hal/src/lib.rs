//! serlcd Hardware Abstraction Layer
//!
//! This crate defines the transport seam between the display engine and
//! whatever carries its bytes to the LCD module. The engine only ever
//! pushes bytes; it never reads from the link.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (serlcd CLI, services)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  serlcd-core (render engine, session)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  serlcd-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  tty / USB    │       │  MCU UART     │
//! │  serial port  │       │  peripheral   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`serial::SerialTx`] - Byte-oriented transmit side of a serial link

#![no_std]
#![deny(unsafe_code)]

pub mod serial;

pub use serial::{DataBits, Parity, SerialConfig, SerialTx, StopBits, DEFAULT_BAUD_RATE};
