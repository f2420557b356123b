//! Mock campaign driver for testing.

use async_trait::async_trait;
use fanfare_core::{GenerateRequest, GenerateResponse, ImageOptions, Output};
use fanfare_error::{FanfareResult, GeminiError, GeminiErrorKind};
use fanfare_interface::{FanfareDriver, ImageGeneration, JsonMode, Metadata, ModelMetadata};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Behavior for structured text calls.
#[derive(Debug, Clone)]
pub enum MockJson {
    /// Always return this payload
    Success(Value),
    /// Always fail with the specified error
    Error(GeminiErrorKind),
}

/// Behavior for image calls.
///
/// Image tasks run concurrently, so behaviors are keyed on the prompt rather
/// than on call order.
#[derive(Debug, Clone)]
pub enum MockImage {
    /// Always succeed with a small fake payload
    Success,
    /// Always fail with the specified error
    Error(GeminiErrorKind),
    /// Fail only the calls whose prompt contains this marker
    FailWhenPromptContains(String),
}

/// Mock driver for campaign tests.
///
/// This mock allows tests to control responses and verify behavior without
/// making actual API calls. Clones share call counters and the recorded
/// prompt list, so tests can keep one handle for assertions while the
/// runner owns another.
#[derive(Debug, Clone)]
pub struct MockDriver {
    json: MockJson,
    image: MockImage,
    json_calls: Arc<Mutex<usize>>,
    image_calls: Arc<Mutex<usize>>,
    image_prompts: Arc<Mutex<Vec<String>>>,
}

impl MockDriver {
    /// Create a mock with the given text and image behaviors.
    pub fn new(json: MockJson, image: MockImage) -> Self {
        Self {
            json,
            image,
            json_calls: Arc::new(Mutex::new(0)),
            image_calls: Arc::new(Mutex::new(0)),
            image_prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of structured text calls made.
    pub fn json_calls(&self) -> usize {
        *self.json_calls.lock().unwrap()
    }

    /// Number of image calls made.
    pub fn image_calls(&self) -> usize {
        *self.image_calls.lock().unwrap()
    }

    /// Prompts of every image call, in arrival order.
    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl FanfareDriver for MockDriver {
    async fn generate(&self, _req: &GenerateRequest) -> FanfareResult<GenerateResponse> {
        Ok(GenerateResponse { outputs: vec![] })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-campaign"
    }
}

#[async_trait]
impl JsonMode for MockDriver {
    async fn generate_json(
        &self,
        _req: &GenerateRequest,
        _schema: &Value,
    ) -> FanfareResult<Value> {
        // Small delay to simulate network latency (but keep it minimal for fast tests)
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        *self.json_calls.lock().unwrap() += 1;

        match &self.json {
            MockJson::Success(value) => Ok(value.clone()),
            MockJson::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }
}

#[async_trait]
impl ImageGeneration for MockDriver {
    async fn generate_image(
        &self,
        req: &GenerateRequest,
        _options: &ImageOptions,
    ) -> FanfareResult<Output> {
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        *self.image_calls.lock().unwrap() += 1;

        let prompt = req
            .messages
            .first()
            .map(|message| message.content.clone())
            .unwrap_or_default();
        self.image_prompts.lock().unwrap().push(prompt.clone());

        match &self.image {
            MockImage::Success => Ok(Output::Image {
                mime: Some("image/png".to_string()),
                data: b"mock-image-bytes".to_vec(),
            }),
            MockImage::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
            MockImage::FailWhenPromptContains(marker) => {
                if prompt.contains(marker) {
                    Err(GeminiError::new(GeminiErrorKind::NoImageGenerated).into())
                } else {
                    Ok(Output::Image {
                        mime: Some("image/png".to_string()),
                        data: b"mock-image-bytes".to_vec(),
                    })
                }
            }
        }
    }
}

impl Metadata for MockDriver {
    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            provider: "mock",
            model: "mock-campaign".to_string(),
            max_input_tokens: 1_048_576,
            max_output_tokens: 65_536,
            supports_json_mode: true,
            supports_image_generation: true,
        }
    }
}
