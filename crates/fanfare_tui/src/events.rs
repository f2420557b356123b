//! Terminal input handling.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use fanfare_error::{TuiError, TuiErrorKind, TuiResult};
use std::time::Duration;

/// Input events surfaced to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Poll window elapsed without input
    Tick,
    /// Key press event
    Key(KeyEvent),
}

/// Polls the terminal for input with a bounded wait.
///
/// The poll window is kept short so the main loop's `select!` stays
/// responsive to campaign events arriving between key presses.
#[derive(Debug, Clone)]
pub struct EventHandler {
    poll_window: Duration,
}

impl EventHandler {
    /// Create a handler with the given poll window in milliseconds.
    pub fn new(poll_window_ms: u64) -> Self {
        Self {
            poll_window: Duration::from_millis(poll_window_ms),
        }
    }

    /// Get the next event, waiting at most one poll window.
    pub fn next(&self) -> TuiResult<Option<Event>> {
        if event::poll(self.poll_window)
            .map_err(|e| TuiError::new(TuiErrorKind::EventPoll(e.to_string())))?
        {
            match event::read()
                .map_err(|e| TuiError::new(TuiErrorKind::EventRead(e.to_string())))?
            {
                CrosstermEvent::Key(key) => Ok(Some(Event::Key(key))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(Event::Tick))
        }
    }
}
