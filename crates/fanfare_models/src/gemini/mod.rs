//! Google Gemini API client implementation.
//!
//! This module provides a REST client for the Gemini `generateContent` API:
//! - [`GeminiClient`] - text generation, structured JSON output, and image
//!   generation over a single HTTP connection pool
//!
//! # REST API Client
//!
//! The REST API client supports:
//! - Per-request model selection
//! - Structured JSON output constrained by a response schema
//! - Image generation with aspect ratio and resolution control
//! - Request pacing through a shared rate limiter
//! - Thread-safe concurrent access

mod client;
mod extraction;
mod protocol;

pub use client::GeminiClient;
pub use extraction::{extract_json, parse_json};
pub use protocol::{
    ApiError, ApiErrorResponse, Candidate, Content, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, ImageConfig, InlineData, InlineDataPart,
    ModelContent, Part, SystemInstruction, TextPart, UsageMetadata,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, fanfare_error::GeminiError>;
