//! Trait definitions for model backends and their capabilities.

use crate::ModelMetadata;
use async_trait::async_trait;
use fanfare_core::{GenerateRequest, GenerateResponse, ImageOptions, Output};
use fanfare_error::FanfareResult;

/// Core trait that all model backends must implement.
///
/// This provides the minimal interface for text generation. Additional
/// capabilities are exposed through optional traits.
#[async_trait]
pub trait FanfareDriver: Send + Sync {
    /// Generate model output given a request.
    async fn generate(&self, req: &GenerateRequest) -> FanfareResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Trait for models that support structured JSON output.
#[async_trait]
pub trait JsonMode: FanfareDriver {
    /// Generate output conforming to a JSON schema.
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> FanfareResult<serde_json::Value>;
}

/// Trait for models that can generate images.
#[async_trait]
pub trait ImageGeneration: FanfareDriver {
    /// Generate a single image for the request's prompt.
    ///
    /// Returns the first image output found in the response. Backends fail
    /// with a no-image error when the service responds without inline image
    /// data.
    async fn generate_image(
        &self,
        req: &GenerateRequest,
        options: &ImageOptions,
    ) -> FanfareResult<Output>;

    /// Supported output formats (MIME types).
    fn supported_image_formats(&self) -> &[&'static str] {
        &["image/png", "image/jpeg", "image/webp"]
    }
}

/// Trait for querying model metadata and capabilities.
pub trait Metadata: FanfareDriver {
    /// Get comprehensive metadata about this model.
    fn metadata(&self) -> ModelMetadata;

    /// Maximum tokens in input context.
    fn max_input_tokens(&self) -> usize {
        self.metadata().max_input_tokens
    }

    /// Maximum tokens in output.
    fn max_output_tokens(&self) -> usize {
        self.metadata().max_output_tokens
    }
}
