//! Trait definitions for the Fanfare social campaign generator.
//!
//! This crate provides the core driver trait and capability traits that define
//! the Fanfare interface to generative model backends.

mod traits;
mod types;

pub use traits::{FanfareDriver, ImageGeneration, JsonMode, Metadata};
pub use types::ModelMetadata;
