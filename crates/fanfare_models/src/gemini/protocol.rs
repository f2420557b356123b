//! Message types for the Gemini REST `generateContent` protocol.
//!
//! This module defines the JSON message structures used to communicate with
//! the Gemini API over HTTPS.
//!
//! # Protocol Overview
//!
//! 1. Client POSTs a `GenerateContentRequest` to
//!    `models/{model}:generateContent`
//! 2. On success, the server responds with a `GenerateContentResponse`
//!    carrying zero or more candidates plus token accounting
//! 3. On failure, the server responds with a non-2xx status and an
//!    `ApiErrorResponse` body describing what went wrong
//!
//! # Message Types
//!
//! **Request side** (sent to server):
//! - `GenerateContentRequest` - Conversation turns plus generation controls
//! - `GenerationConfig` - Sampling, JSON mode, and image output settings
//!
//! **Response side** (received from server):
//! - `GenerateContentResponse` - Candidates and usage metadata
//! - `ApiErrorResponse` - Structured error body on rejected requests
//!
//! # Example
//!
//! ```
//! use fanfare_models::{Content, GenerateContentRequest, GenerationConfig};
//!
//! let request = GenerateContentRequest {
//!     contents: vec![Content::user("Name three colors of a desert sunset")],
//!     system_instruction: None,
//!     generation_config: Some(GenerationConfig {
//!         temperature: Some(0.8),
//!         max_output_tokens: Some(64),
//!         ..Default::default()
//!     }),
//! };
//!
//! let json = serde_json::to_string(&request).expect("serializable");
//! assert!(json.contains("\"maxOutputTokens\":64"));
//! ```

use serde::{Deserialize, Serialize};

//
// ─── REQUEST MESSAGES ───────────────────────────────────────────────────────
//

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns in order
    pub contents: Vec<Content>,

    /// System instruction applied to the whole request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A single conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Role ("user", "model")
    pub role: String,

    /// Content parts
    pub parts: Vec<Part>,
}

/// System instruction for the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// Generation configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature for sampling (0.0 - 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,

    /// Response MIME type (e.g., "application/json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    /// JSON schema the response must conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,

    /// Response modalities (e.g., ["TEXT"], ["IMAGE"])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,

    /// Image output settings for image-capable models
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

/// Image output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Aspect ratio (e.g., "16:9", "1:1", "9:16")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// Resolution tier (e.g., "1K", "2K", "4K")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
}

//
// ─── CONTENT PARTS ──────────────────────────────────────────────────────────
//

/// Content part (text, inline data, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text(TextPart),
    /// Inline data (images, audio, etc.)
    InlineData(InlineDataPart),
}

/// Text content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPart {
    pub text: String,
}

/// Inline data content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPart {
    pub inline_data: InlineData,
}

/// Inline data with MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String, // base64-encoded
}

//
// ─── RESPONSE MESSAGES ──────────────────────────────────────────────────────
//

/// Response body from a `generateContent` call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates. Empty when the prompt was blocked outright.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token usage metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// One generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content. Absent when the candidate was stopped before
    /// producing any parts (e.g., a safety block).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ModelContent>,

    /// Why generation stopped (e.g., "STOP", "MAX_TOKENS", "SAFETY")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Content of a single candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelContent {
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,

    /// Role ("model")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Token usage metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_token_count: Option<u32>,

    /// Tokens in the candidates (responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<u32>,

    /// Total tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_token_count: Option<u32>,
}

//
// ─── ERROR MESSAGES ─────────────────────────────────────────────────────────
//

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// Error details from the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Numeric status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    /// Human-readable message
    pub message: String,

    /// Symbolic status (e.g., "INVALID_ARGUMENT", "RESOURCE_EXHAUSTED")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

//
// ─── HELPER IMPLEMENTATIONS ─────────────────────────────────────────────────
//

impl Content {
    /// Create a user turn with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// Create a model turn with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part::text(text)],
        }
    }
}

impl SystemInstruction {
    /// Create a system instruction from one or more text parts.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(TextPart { text: text.into() })
    }

    /// Extract text from a part, if it contains text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(TextPart { text }) => Some(text),
            _ => None,
        }
    }

    /// Extract inline data from a part, if it carries any.
    pub fn as_inline_data(&self) -> Option<&InlineData> {
        match self {
            Part::InlineData(InlineDataPart { inline_data }) => Some(inline_data),
            _ => None,
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it produced any.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .filter_map(|part| part.as_text())
            .collect::<Vec<_>>()
            .join("");
        (!text.is_empty()).then_some(text)
    }

    /// First inline data blob across all candidates, if any.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.as_inline_data())
    }
}
