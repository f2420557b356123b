//! Error types for the Fanfare library.
//!
//! This crate provides the foundation error types used throughout the Fanfare
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fanfare_error::{ConfigError, FanfareResult};
//!
//! fn load_settings() -> FanfareResult<String> {
//!     Err(ConfigError::new("Missing models table"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod campaign;
mod config;
mod error;
mod gemini;
mod json;
mod storage;
#[cfg(feature = "tui")]
mod tui;

pub use campaign::{CampaignError, CampaignErrorKind, CampaignResult};
pub use config::ConfigError;
pub use error::{FanfareError, FanfareErrorKind, FanfareResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
