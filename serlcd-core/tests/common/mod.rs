//! Recording link and delay for session tests
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use serlcd_core::{Display, DisplayGeometry};
use serlcd_hal::SerialTx;
use serlcd_protocol::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write(Command),
    Flush,
    Delay(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkError;

#[derive(Debug, Default)]
struct Inner {
    events: RefCell<Vec<Event>>,
    attempts: Cell<usize>,
    fail_at: Cell<Option<usize>>,
    closed: Cell<bool>,
}

/// Shared view of everything the fakes saw, in order
#[derive(Debug, Clone, Default)]
pub struct Log(Rc<Inner>);

impl Log {
    pub fn link(&self) -> FakeLink {
        FakeLink(self.clone())
    }

    pub fn delay(&self) -> FakeDelay {
        FakeDelay(self.clone())
    }

    /// Drain recorded events, reset the write counter and disarm any failure
    pub fn take(&self) -> Vec<Event> {
        self.0.attempts.set(0);
        self.0.fail_at.set(None);
        self.0.events.take()
    }

    /// Fail the `k`-th write attempt (1-based) counted from now
    pub fn fail_at(&self, k: usize) {
        self.0.attempts.set(0);
        self.0.fail_at.set(Some(k));
    }

    /// Write attempts since the last `take` or `fail_at`, failed ones included
    pub fn attempts(&self) -> usize {
        self.0.attempts.get()
    }

    pub fn closed(&self) -> bool {
        self.0.closed.get()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.0
            .events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(command) => Some(command.clone()),
                Event::Flush | Event::Delay(_) => None,
            })
            .collect()
    }

    pub fn printed(&self) -> Vec<Vec<u8>> {
        self.commands()
            .iter()
            .filter_map(|c| c.text().map(<[u8]>::to_vec))
            .collect()
    }
}

pub struct FakeLink(Log);

impl SerialTx for FakeLink {
    type Error = LinkError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), LinkError> {
        let inner = &(self.0).0;
        let attempt = inner.attempts.get() + 1;
        inner.attempts.set(attempt);
        if inner.fail_at.get() == Some(attempt) {
            return Err(LinkError);
        }

        let (command, used) = Command::decode(data).expect("session wrote a malformed command");
        assert_eq!(used, data.len(), "one command per write");
        inner.events.borrow_mut().push(Event::Write(command));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LinkError> {
        (self.0).0.events.borrow_mut().push(Event::Flush);
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        (self.0).0.closed.set(true);
        Ok(())
    }
}

pub struct FakeDelay(Log);

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        (self.0).0.events.borrow_mut().push(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        (self.0).0.events.borrow_mut().push(Event::Delay(ms));
    }
}

pub type FakeDisplay = Display<FakeLink, FakeDelay>;

/// Start a session and discard the startup traffic
pub fn started(rows: u16, columns: u16) -> (FakeDisplay, Log) {
    let log = Log::default();
    let geometry = DisplayGeometry::new(rows, columns).unwrap();
    let display = Display::start(log.link(), log.delay(), geometry).unwrap();
    log.take();
    (display, log)
}
