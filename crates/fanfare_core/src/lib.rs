//! Core data types for the Fanfare social campaign generator.
//!
//! This crate provides the foundation data types used across all Fanfare interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod message;
mod output;
mod request;
mod role;
mod usage;

pub use image::{AspectRatio, ImageOptions, ImageSize};
pub use message::Message;
pub use output::Output;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use usage::TokenUsage;
