//! Event source abstraction for terminal events.
//!
//! A trait-based wrapper over crossterm's event functions, so the run
//! loop can be driven by scripted events in tests instead of a real
//! terminal.

use crossterm::event::Event;
use std::io;
use std::time::Duration;

/// Trait for abstracting terminal event sources.
///
/// Mirrors crossterm's `event::poll` and `event::read` functions.
pub trait EventSource: Send + Sync {
    /// Check if an event is available within the timeout.
    fn poll(&self, timeout: Duration) -> io::Result<bool>;

    /// Read the next event.
    fn read(&self) -> io::Result<Event>;
}

/// Production event source reading real terminal input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    /// Create a new CrosstermEventSource.
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn poll(&self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&self) -> io::Result<Event> {
        crossterm::event::read()
    }
}
