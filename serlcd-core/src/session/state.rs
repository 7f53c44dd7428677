//! Session lifecycle state machine
//!
//! Commands are only accepted in [`SessionState::Ready`]. A failed startup
//! and an explicit stop both end in [`SessionState::Closed`], from which
//! there is no way back; a new session has to be opened.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// No link yet
    Disconnected,
    /// Link open, startup sequence in progress
    Initializing,
    /// Accepting commands
    Ready,
    /// Link released; terminal
    Closed,
}

/// Lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionEvent {
    /// Transport opened successfully
    TransportOpened,
    /// Startup sequence written
    InitComplete,
    /// Startup sequence failed
    InitFailed,
    /// Explicit stop
    Stopped,
}

impl SessionState {
    /// Check if this state accepts display commands
    pub fn accepts_commands(&self) -> bool {
        matches!(self, SessionState::Ready)
    }

    /// Check if this is the terminal state
    pub fn is_closed(&self) -> bool {
        matches!(self, SessionState::Closed)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: SessionEvent) -> Self {
        use SessionEvent::*;
        use SessionState::*;

        match (self, event) {
            (Disconnected, TransportOpened) => Initializing,

            (Initializing, InitComplete) => Ready,
            (Initializing, InitFailed) => Closed,
            (Initializing, Stopped) => Closed,

            (Ready, Stopped) => Closed,

            // Default: stay in current state
            _ => self,
        }
    }
}
