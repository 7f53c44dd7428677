//! Thread-safe display handle
//!
//! One display, many callers. Each operation holds the lock for its whole
//! duration, scroll pauses included, so requests are served one at a time
//! and never interleave on the wire.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use embedded_hal::delay::DelayNs;
use serlcd_core::{CursorPosition, Display, RenderOptions, SessionState};
use serlcd_hal::SerialTx;

use crate::error::Error;

/// Cloneable, mutex-guarded [`Display`]
pub struct SharedDisplay<T: SerialTx<Error = io::Error>, D: DelayNs> {
    inner: Arc<Mutex<Display<T, D>>>,
}

impl<T: SerialTx<Error = io::Error>, D: DelayNs> Clone for SharedDisplay<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: SerialTx<Error = io::Error>, D: DelayNs> SharedDisplay<T, D> {
    pub fn new(display: Display<T, D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(display)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Display<T, D>>, Error> {
        self.inner.lock().map_err(|_| Error::Poisoned)
    }

    pub fn clear(&self) -> Result<(), Error> {
        Ok(self.lock()?.clear()?)
    }

    pub fn move_to(&self, column: u16, row: u16) -> Result<(), Error> {
        Ok(self.lock()?.move_to(column, row)?)
    }

    pub fn print(&self, text: &str, options: RenderOptions) -> Result<(), Error> {
        Ok(self.lock()?.print(text, options)?)
    }

    pub fn cursor_on(&self) -> Result<(), Error> {
        Ok(self.lock()?.cursor_on()?)
    }

    pub fn cursor_off(&self) -> Result<(), Error> {
        Ok(self.lock()?.cursor_off()?)
    }

    pub fn cursor(&self) -> Result<CursorPosition, Error> {
        Ok(self.lock()?.cursor())
    }

    pub fn state(&self) -> Result<SessionState, Error> {
        Ok(self.lock()?.state())
    }

    /// Release the link; later operations on any clone fail with
    /// `NotReady`
    pub fn disconnect(&self) {
        match self.inner.lock() {
            Ok(mut display) => display.disconnect(),
            Err(poisoned) => poisoned.into_inner().disconnect(),
        }
    }
}
