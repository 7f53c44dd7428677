//! Display sessions
//!
//! A session owns the link to one display, the host-side cursor model and
//! the lifecycle state. Everything that touches the hardware goes through
//! it, one operation at a time.

mod display;
mod error;
mod state;

pub use display::Display;
pub use error::Error;
pub use state::{SessionEvent, SessionState};
