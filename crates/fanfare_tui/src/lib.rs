//! Terminal User Interface for the Fanfare campaign studio.
//!
//! Provides an interactive TUI for generating a social campaign from a video
//! concept: per-platform copy cards, thumbnail rendering progress, clipboard
//! copy, and thumbnail download. Built with ratatui for terminal rendering.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod clipboard;
mod events;
mod runner;
mod ui;

pub use app::{App, Focus};
pub use clipboard::copy_to_clipboard;
pub use events::{Event, EventHandler};
pub use fanfare_error::{TuiError, TuiErrorKind, TuiResult};
pub use runner::run_tui;
