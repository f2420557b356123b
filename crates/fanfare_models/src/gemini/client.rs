//! Google Gemini API implementation.
//!
//! This module provides a REST client for the Gemini `generateContent` API
//! with support for:
//! - Per-request model selection (different requests can use different models)
//! - Structured JSON output constrained by a response schema
//! - Image generation with aspect ratio and resolution control
//! - Request pacing through a shared rate limiter
//!
//! # Architecture
//!
//! The [`GeminiClient`] wraps one HTTP connection pool and one rate limiter,
//! both shared across clones. Every call waits for the limiter before hitting
//! the API, so a campaign fanning out one request per platform stays inside
//! free-tier request budgets. When a request names a model (via
//! `GenerateRequest.model`), that model overrides the client default for that
//! call only.
//!
//! # Example
//!
//! ```no_run
//! use fanfare_models::GeminiClient;
//! use fanfare_core::{GenerateRequest, Message, Role};
//! use fanfare_interface::FanfareDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! // Use the client default model
//! let request1 = GenerateRequest {
//!     messages: vec![Message {
//!         role: Role::User,
//!         content: "Hello".to_string(),
//!     }],
//!     model: None,
//!     ..Default::default()
//! };
//! let response1 = client.generate(&request1).await?;
//!
//! // Override to use a different model
//! let request2 = GenerateRequest {
//!     messages: vec![Message {
//!         role: Role::User,
//!         content: "Complex task".to_string(),
//!     }],
//!     model: Some("gemini-2.5-pro".to_string()),
//!     ..Default::default()
//! };
//! let response2 = client.generate(&request2).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use base64::Engine;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::env;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::instrument;

use fanfare_core::{GenerateRequest, GenerateResponse, ImageOptions, Output, Role, TokenUsage};
use fanfare_error::{FanfareResult, GeminiError, GeminiErrorKind};
use fanfare_interface::{FanfareDriver, ImageGeneration, JsonMode, Metadata, ModelMetadata};

use super::GeminiResult;
use super::extraction::{extract_json, parse_json, preview};
use super::protocol::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part, SystemInstruction,
};

// Type alias for our direct rate limiter
type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Base URL for the Gemini REST API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when neither the client nor the request names one.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Requests per minute allowed on the free tier.
const DEFAULT_RPM: u32 = 10;

//
// ─── GEMINI CLIENT ──────────────────────────────────────────────────────────
//

/// Client for the Google Gemini REST API.
///
/// Clones share the underlying connection pool and rate limiter, so a client
/// can be handed to concurrent tasks without multiplying the request budget.
#[derive(Clone)]
pub struct GeminiClient {
    /// Shared HTTP connection pool
    http: reqwest::Client,
    /// API key sent with every request
    api_key: String,
    /// Default model when a request does not name one
    model: String,
    /// Request pacing shared across clones
    limiter: Arc<DirectRateLimiter>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with the default model and request budget.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the variable is unset.
    pub fn new() -> GeminiResult<Self> {
        Self::with_model(DEFAULT_MODEL)
    }

    /// Create a client with a specific default model.
    pub fn with_model(model: impl Into<String>) -> GeminiResult<Self> {
        Self::with_model_and_limit(model, DEFAULT_RPM)
    }

    /// Create a client with a specific default model and requests-per-minute
    /// budget.
    pub fn with_model_and_limit(model: impl Into<String>, rpm: u32) -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key, model, rpm))
    }

    /// Create a client with an explicit API key.
    ///
    /// Requests made with an invalid or empty key fail with an HTTP status
    /// error rather than at construction.
    ///
    /// An `rpm` of zero is clamped to one request per minute.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>, rpm: u32) -> Self {
        let rpm = NonZeroU32::new(rpm).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_minute(rpm);

        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Resolve the model for a request, preferring the per-request override.
    fn resolve_model<'a>(&'a self, req: &'a GenerateRequest) -> &'a str {
        req.model.as_deref().unwrap_or(&self.model)
    }

    /// Split request messages into conversation turns and a system
    /// instruction.
    ///
    /// Gemini carries system text in a dedicated `systemInstruction` field
    /// rather than as a conversation turn. User messages map to the "user"
    /// role, assistant messages to "model".
    fn build_contents(req: &GenerateRequest) -> (Vec<Content>, Option<SystemInstruction>) {
        let mut contents = Vec::new();
        let mut system_parts = Vec::new();

        for message in &req.messages {
            match message.role {
                Role::System => system_parts.push(Part::text(message.content.clone())),
                Role::User => contents.push(Content::user(message.content.clone())),
                Role::Assistant => contents.push(Content::model(message.content.clone())),
            }
        }

        let system_instruction =
            (!system_parts.is_empty()).then(|| SystemInstruction::new(system_parts));

        (contents, system_instruction)
    }

    /// Base sampling configuration from the generic request fields.
    fn base_config(req: &GenerateRequest) -> GenerationConfig {
        GenerationConfig {
            temperature: req.temperature.map(f64::from),
            max_output_tokens: req
                .max_tokens
                .map(|tokens| i32::try_from(tokens).unwrap_or(i32::MAX)),
            ..Default::default()
        }
    }

    /// Assemble a full request body from the generic request plus a config.
    fn build_body(
        req: &GenerateRequest,
        generation_config: GenerationConfig,
    ) -> GenerateContentRequest {
        let (contents, system_instruction) = Self::build_contents(req);
        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config: Some(generation_config),
        }
    }

    /// POST a request body to the `generateContent` endpoint.
    ///
    /// Waits for the rate limiter before sending. Non-2xx responses are
    /// mapped to [`GeminiErrorKind::HttpStatus`], using the structured error
    /// body when the service provides one.
    async fn post_generate(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        self.limiter.until_ready().await;

        let url = format!("{API_BASE_URL}/models/{model}:generateContent");
        tracing::debug!(model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|parsed| parsed.error.message)
                .unwrap_or(text);

            tracing::error!(
                status = status.as_u16(),
                model,
                message,
                "Gemini API request rejected"
            );

            return Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        serde_json::from_str(&text).map_err(|e| {
            GeminiError::new(GeminiErrorKind::ResponseParse {
                message: e.to_string(),
                preview: preview(&text),
            })
        })
    }

    /// Record token accounting when the service reports it.
    fn log_usage(model: &str, response: &GenerateContentResponse) {
        if let Some(metadata) = &response.usage_metadata {
            let usage = TokenUsage::new(
                metadata.prompt_token_count.unwrap_or(0) as usize,
                metadata.candidates_token_count.unwrap_or(0) as usize,
            );
            tracing::debug!(
                model,
                prompt_tokens = *usage.prompt_tokens(),
                completion_tokens = *usage.completion_tokens(),
                total_tokens = *usage.total_tokens(),
                "Gemini token usage"
            );
        }
    }
}

/// Decode a base64 inline data blob into an image output.
fn decode_inline_data(inline: &InlineData) -> GeminiResult<Output> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&inline.data)
        .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

    Ok(Output::Image {
        mime: Some(inline.mime_type.clone()),
        data: bytes,
    })
}

//
// ─── DRIVER IMPLEMENTATIONS ─────────────────────────────────────────────────
//

#[async_trait]
impl FanfareDriver for GeminiClient {
    #[instrument(skip_all, fields(model = %self.resolve_model(req)))]
    async fn generate(&self, req: &GenerateRequest) -> FanfareResult<GenerateResponse> {
        let model = self.resolve_model(req);
        let body = Self::build_body(req, Self::base_config(req));
        let response = self.post_generate(model, &body).await?;

        Self::log_usage(model, &response);

        // An empty candidate list is a valid empty response, not an error.
        let mut outputs = Vec::new();
        if let Some(content) = response.candidates.first().and_then(|c| c.content.as_ref()) {
            let text = content
                .parts
                .iter()
                .filter_map(|part| part.as_text())
                .collect::<Vec<_>>()
                .join("");
            if !text.is_empty() {
                outputs.push(Output::Text(text));
            }

            for part in &content.parts {
                if let Some(inline) = part.as_inline_data() {
                    outputs.push(decode_inline_data(inline)?);
                }
            }
        }

        Ok(GenerateResponse { outputs })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl JsonMode for GeminiClient {
    #[instrument(skip_all, fields(model = %self.resolve_model(req)))]
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> FanfareResult<serde_json::Value> {
        let model = self.resolve_model(req);

        let mut config = Self::base_config(req);
        config.response_mime_type = Some("application/json".to_string());
        config.response_schema = Some(schema.clone());

        let body = Self::build_body(req, config);
        let response = self.post_generate(model, &body).await?;

        Self::log_usage(model, &response);

        // A response with no text at all is a valid empty result, not a
        // parse failure.
        let Some(text) = response.first_text() else {
            return Ok(serde_json::Value::Null);
        };

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            // Schema mode should return bare JSON, but models still fence it
            // on occasion.
            Err(_) => {
                let extracted = extract_json(&text)?;
                Ok(parse_json(&extracted)?)
            }
        }
    }
}

#[async_trait]
impl ImageGeneration for GeminiClient {
    #[instrument(skip_all, fields(model = %self.resolve_model(req), options = %options))]
    async fn generate_image(
        &self,
        req: &GenerateRequest,
        options: &ImageOptions,
    ) -> FanfareResult<Output> {
        let model = self.resolve_model(req);

        let mut config = Self::base_config(req);
        config.response_modalities = Some(vec!["IMAGE".to_string()]);
        config.image_config = Some(ImageConfig {
            aspect_ratio: Some(options.aspect_ratio().to_string()),
            image_size: Some(options.size().to_string()),
        });

        let body = Self::build_body(req, config);
        let response = self.post_generate(model, &body).await?;

        Self::log_usage(model, &response);

        let inline = response
            .first_inline_data()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoImageGenerated))?;

        Ok(decode_inline_data(inline)?)
    }
}

impl Metadata for GeminiClient {
    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            provider: "gemini",
            model: self.model.clone(),
            max_input_tokens: 1_048_576,
            max_output_tokens: 65_536,
            supports_json_mode: true,
            supports_image_generation: self.model.contains("image"),
        }
    }
}
