//! Generative model backends for Fanfare.
//!
//! This crate provides client implementations for the model services Fanfare
//! talks to, each behind its own feature flag for flexible dependency
//! management.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature
//!
//! # Example
//!
//! ```toml
//! [dependencies]
//! fanfare_models = { version = "0.2", features = ["gemini"] }
//! ```
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use fanfare_models::GeminiClient;
//! use fanfare_interface::FanfareDriver;
//! use fanfare_core::{GenerateRequest, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest {
//!     messages: vec![Message {
//!         role: Role::User,
//!         content: "Hello".to_string(),
//!     }],
//!     ..Default::default()
//! };
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    ApiError, ApiErrorResponse, Candidate, Content, GeminiClient, GeminiResult,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig, InlineData,
    InlineDataPart, ModelContent, Part, SystemInstruction, TextPart, UsageMetadata, extract_json,
    parse_json,
};
