//! Host-side driver for serial character LCD backpacks
//!
//! Opens a tty, runs the display's startup sequence and hands back a
//! [`Display`] session from `serlcd-core`:
//!
//! ```no_run
//! use serlcd::{connect, DisplayConfig, RenderOptions};
//!
//! let mut lcd = connect("/dev/ttyUSB0", &DisplayConfig::default())?;
//! lcd.print("Hello, World!", RenderOptions::default())?;
//! lcd.disconnect();
//! # Ok::<(), serlcd::Error>(())
//! ```
//!
//! Operations block for the whole render, including scroll animation
//! pauses. Use [`SharedDisplay`] to drive one display from several threads.

pub mod config;
pub mod delay;
pub mod error;
pub mod serial;
pub mod shared;

use std::path::Path;

use log::info;

pub use config::FileConfig;
pub use delay::StdDelay;
pub use error::Error;
pub use serial::SerialPort;
pub use serlcd_core::{
    AddressingMode, CursorPosition, Display, DisplayConfig, DisplayGeometry, RenderOptions,
    SessionState,
};
pub use shared::SharedDisplay;

/// A session over a local serial port
pub type Lcd = Display<SerialPort, StdDelay>;

/// Open the serial port at `path` and start a session on it
///
/// The configuration is validated before the port is touched. The call
/// returns once the startup sequence (including its settle delay) has been
/// written.
pub fn connect(path: impl AsRef<Path>, config: &DisplayConfig) -> Result<Lcd, Error> {
    let path = path.as_ref();
    let geometry = config.geometry()?;
    let port = SerialPort::open(path, &config.serial())?;
    let display = Display::start(port, StdDelay, geometry)?;
    info!(
        "connected to {} ({}x{} @ {} baud)",
        path.display(),
        geometry.columns(),
        geometry.rows(),
        config.baud_rate
    );
    Ok(display)
}
