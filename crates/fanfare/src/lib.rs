//! Fanfare - AI Social Campaign Studio
//!
//! Fanfare turns a single video concept into a coordinated social media
//! campaign: platform-tuned copy (title, description, hashtags) plus a
//! generated thumbnail for each selected platform, rendered concurrently.
//!
//! # Features
//!
//! - **Structured Copy**: Schema-constrained JSON generation, one item per
//!   selected platform
//! - **Concurrent Thumbnails**: Per-platform image tasks that stream results
//!   back as they finish
//! - **Regeneration**: Replace a single thumbnail without touching the rest
//!   of the campaign
//! - **Credential Gating**: Generation stays blocked until an API key is
//!   available
//! - **Terminal UI**: Interactive campaign studio with clipboard copy and
//!   thumbnail download
//! - **Rate Limiting**: Shared request budget across copy and thumbnail calls
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fanfare::{ContentClient, GeminiClient, Platform};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ContentClient::new(GeminiClient::new()?);
//!
//!     let items = client
//!         .generate_text("A day in the life of a street cat", &[Platform::YouTube])
//!         .await?;
//!     for item in &items {
//!         println!("{}: {}", item.platform(), item.title());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini API support
//! - `tui` - Terminal user interface
//! - `all` - Enable all features
//!
//! # Architecture
//!
//! Fanfare is organized as a workspace with focused crates:
//!
//! - `fanfare_core` - Core data types (Message, Output, ImageOptions, etc.)
//! - `fanfare_interface` - FanfareDriver trait definitions
//! - `fanfare_error` - Error types
//! - `fanfare_storage` - Data URI codec and thumbnail persistence
//! - `fanfare_models` - Model provider implementations
//! - `fanfare_campaign` - Campaign prompts, schema, state, and orchestration
//! - `fanfare_tui` - Terminal UI
//!
//! This crate (`fanfare`) re-exports everything for convenience.

// Re-export core crates (always available)
pub use fanfare_campaign::*;
pub use fanfare_core::*;
pub use fanfare_error::*;
pub use fanfare_interface::*;
pub use fanfare_storage::*;

// Re-export optional crates based on features
#[cfg(feature = "gemini")]
pub use fanfare_models::*;

#[cfg(feature = "tui")]
pub use fanfare_tui::*;
