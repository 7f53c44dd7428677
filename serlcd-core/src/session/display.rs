//! Single-writer display session

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};
use serlcd_hal::SerialTx;
use serlcd_protocol::Command;

use super::error::Error;
use super::state::{SessionEvent, SessionState};
use crate::config::RenderOptions;
use crate::cursor::CursorModel;
use crate::geometry::{CursorPosition, DisplayGeometry};
use crate::render::{self, RenderPlan, Step, INIT_SETTLE_MS};

/// A started display session
///
/// Owns the link, the delay source and the cursor model. Every operation
/// takes `&mut self`, so commands from two callers can never interleave;
/// wrap the session in a mutex to share it between threads.
///
/// If a write fails partway through a multi-step operation, nothing after
/// it is sent and the cursor model keeps its previous value. The screen may
/// show partial output. The session stays `Ready`, so the caller can retry.
pub struct Display<T: SerialTx, D: DelayNs> {
    link: Option<T>,
    delay: D,
    cursor: CursorModel,
    state: SessionState,
}

impl<T: SerialTx, D: DelayNs> Display<T, D> {
    /// Run the startup sequence over an open link
    ///
    /// Sends INIT, waits for the controller to settle, then clears the
    /// screen and homes the cursor. If any of it fails the link is closed
    /// and the error returned; no half-started session is handed out.
    pub fn start(link: T, delay: D, geometry: DisplayGeometry) -> Result<Self, Error<T::Error>> {
        let mut display = Self {
            link: Some(link),
            delay,
            cursor: CursorModel::new(geometry),
            state: SessionState::Disconnected.transition(SessionEvent::TransportOpened),
        };

        match display.initialize() {
            Ok(()) => {
                display.state = display.state.transition(SessionEvent::InitComplete);
                debug!(
                    "display ready ({}x{})",
                    geometry.columns(),
                    geometry.rows()
                );
                Ok(display)
            }
            Err(e) => {
                display.state = display.state.transition(SessionEvent::InitFailed);
                if display.close_link().is_err() {
                    warn!("failed to close display link after startup failure");
                }
                Err(e)
            }
        }
    }

    fn initialize(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&Command::Init)?;
        self.settle(INIT_SETTLE_MS)?;
        self.send(&Command::Clear)?;
        self.send(&Command::move_to(0, 0))?;
        self.cursor.reset();
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Display size
    pub fn geometry(&self) -> DisplayGeometry {
        self.cursor.geometry()
    }

    /// Cursor position as of the last completed operation
    pub fn cursor(&self) -> CursorPosition {
        self.cursor.position()
    }

    /// The link, while the session holds it
    pub fn link(&self) -> Option<&T> {
        self.link.as_ref()
    }

    /// Blank the screen and home the cursor
    pub fn clear(&mut self) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        self.send(&Command::Clear)?;
        self.cursor.reset();
        Ok(())
    }

    /// Move the cursor
    ///
    /// Coordinates outside the display are rejected without touching the
    /// link.
    pub fn move_to(&mut self, column: u16, row: u16) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        let target = self.geometry().locate(column, row)?;
        self.send(&Command::move_to(target.column, target.row))?;
        self.cursor.commit(target);
        Ok(())
    }

    /// Show the hardware cursor
    pub fn cursor_on(&mut self) -> Result<(), Error<T::Error>> {
        self.set_cursor_visible(true)
    }

    /// Hide the hardware cursor
    pub fn cursor_off(&mut self) -> Result<(), Error<T::Error>> {
        self.set_cursor_visible(false)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        self.send(&Command::SetCursorVisible(visible))
    }

    /// Plan a print without executing it
    pub fn plan<'a>(
        &self,
        text: &'a str,
        options: RenderOptions,
    ) -> Result<RenderPlan<'a>, Error<T::Error>> {
        Ok(render::plan(text, options, &self.cursor)?)
    }

    /// Print text
    ///
    /// Blocks for every pause in the plan; a long scrolling line can take
    /// seconds.
    pub fn print(&mut self, text: &str, options: RenderOptions) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        let mut plan = self.plan(text, options)?;
        debug!("print: {} bytes, {:?}", text.len(), options);
        self.execute(&mut plan)?;
        self.cursor.commit(plan.cursor());
        Ok(())
    }

    /// Release the link
    ///
    /// Idempotent. A failure to close cleanly is logged, not returned.
    pub fn disconnect(&mut self)
    where
        T::Error: Debug,
    {
        if self.state.is_closed() {
            return;
        }
        if let Err(e) = self.close_link() {
            warn!("failed to close display link: {:?}", e);
        }
        self.state = self.state.transition(SessionEvent::Stopped);
    }

    fn close_link(&mut self) -> Result<(), T::Error> {
        match self.link.take() {
            Some(mut link) => {
                let result = link.close();
                debug!("display link closed");
                result
            }
            None => Ok(()),
        }
    }

    fn ensure_ready(&self) -> Result<(), Error<T::Error>> {
        if self.state.accepts_commands() {
            Ok(())
        } else {
            Err(Error::NotReady)
        }
    }

    fn execute(&mut self, steps: impl Iterator<Item = Step>) -> Result<(), Error<T::Error>> {
        for step in steps {
            self.send(&step.command)?;
            if let Some(ms) = step.delay_ms {
                self.settle(ms)?;
            }
        }
        Ok(())
    }

    /// Wait `ms` once everything written so far has left the link
    fn settle(&mut self, ms: u32) -> Result<(), Error<T::Error>> {
        let link = self.link.as_mut().ok_or(Error::NotReady)?;
        link.flush().map_err(Error::Transport)?;
        self.delay.delay_ms(ms);
        Ok(())
    }

    fn send(&mut self, command: &Command) -> Result<(), Error<T::Error>> {
        let link = self.link.as_mut().ok_or(Error::NotReady)?;
        trace!("send {:?}", command);
        link.write_blocking(&command.encode())
            .map_err(Error::Transport)
    }
}

impl<T: SerialTx, D: DelayNs> Debug for Display<T, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Display")
            .field("state", &self.state)
            .field("cursor", &self.cursor)
            .field("linked", &self.link.is_some())
            .finish()
    }
}
