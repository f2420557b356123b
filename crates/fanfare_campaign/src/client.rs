//! High-level generation calls for campaign cycles.

use crate::{
    campaign_instruction, campaign_schema, enhance_image_prompt, GeneratedContent, Platform,
    CAMPAIGN_PERSONA,
};
use fanfare_core::{GenerateRequest, ImageOptions, ImageSize, Message, Output, Role};
use fanfare_error::{FanfareResult, GeminiError, GeminiErrorKind};
use fanfare_interface::{ImageGeneration, JsonMode};
use fanfare_storage::encode_data_uri;

/// Default model for campaign text generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
/// Default model for thumbnail generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Issues the text and image calls of a campaign cycle against one driver.
///
/// The driver carries the transport, key, and pacing; this wrapper owns the
/// domain shape of the calls: prompt assembly, response schema, per-platform
/// aspect ratios, and decoding into [`GeneratedContent`] and data URIs.
///
/// # Examples
///
/// ```no_run
/// use fanfare_campaign::{ContentClient, Platform};
/// use fanfare_models::GeminiClient;
///
/// # async fn example() -> fanfare_error::FanfareResult<()> {
/// let client = ContentClient::new(GeminiClient::new()?);
/// let items = client
///     .generate_text("a rooftop beekeeping series", &[Platform::YouTube])
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ContentClient<D> {
    driver: D,
    text_model: String,
    image_model: String,
    temperature: Option<f32>,
}

impl<D> ContentClient<D> {
    /// Wrap a driver with the default text and image models.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            temperature: None,
        }
    }

    /// Override the text and image models.
    pub fn with_models(mut self, text_model: impl Into<String>, image_model: impl Into<String>) -> Self {
        self.text_model = text_model.into();
        self.image_model = image_model.into();
        self
    }

    /// Set the sampling temperature for text calls.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl<D: JsonMode> ContentClient<D> {
    /// Generate per-platform campaign copy for a concept.
    ///
    /// Sends one structured-output request covering every selected platform
    /// and deserializes the returned array. A null payload (the service
    /// produced no text) yields an empty vector rather than an error.
    #[tracing::instrument(skip(self, concept, platforms), fields(platforms = platforms.len()))]
    pub async fn generate_text(
        &self,
        concept: &str,
        platforms: &[Platform],
    ) -> FanfareResult<Vec<GeneratedContent>> {
        let request = GenerateRequest {
            messages: vec![
                Message {
                    role: Role::System,
                    content: CAMPAIGN_PERSONA.to_string(),
                },
                Message {
                    role: Role::User,
                    content: campaign_instruction(concept, platforms),
                },
            ],
            max_tokens: None,
            temperature: self.temperature,
            model: Some(self.text_model.clone()),
        };
        let schema = campaign_schema();

        let value = self.driver.generate_json(&request, &schema).await?;
        if value.is_null() {
            tracing::debug!("text response was empty");
            return Ok(Vec::new());
        }

        let preview = preview(&value);
        let items: Vec<GeneratedContent> = serde_json::from_value(value).map_err(|e| {
            GeminiError::new(GeminiErrorKind::ResponseParse {
                message: e.to_string(),
                preview,
            })
        })?;
        tracing::debug!(items = items.len(), "campaign text parsed");
        Ok(items)
    }
}

impl<D: ImageGeneration> ContentClient<D> {
    /// Generate one thumbnail and return it as a data URI.
    ///
    /// Enhances the prompt with fixed quality qualifiers, requests the
    /// platform's aspect ratio at the 4K tier, and encodes the first inline
    /// image. A missing MIME type falls back to PNG.
    #[tracing::instrument(skip(self, prompt))]
    pub async fn generate_image(&self, prompt: &str, platform: Platform) -> FanfareResult<String> {
        let request = GenerateRequest {
            messages: vec![Message {
                role: Role::User,
                content: enhance_image_prompt(prompt),
            }],
            max_tokens: None,
            temperature: None,
            model: Some(self.image_model.clone()),
        };
        let options = ImageOptions::new(platform.aspect_ratio(), ImageSize::FourK);

        match self.driver.generate_image(&request, &options).await? {
            Output::Image { mime, data } => {
                tracing::debug!(bytes = data.len(), "thumbnail generated");
                let mime = mime.unwrap_or_else(|| "image/png".to_string());
                Ok(encode_data_uri(&mime, &data))
            }
            Output::Text(_) => Err(GeminiError::new(GeminiErrorKind::NoImageGenerated).into()),
        }
    }
}

/// Truncated view of a payload for parse errors.
fn preview(value: &serde_json::Value) -> String {
    value.to_string().chars().take(100).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fanfare_core::{AspectRatio, GenerateResponse};
    use fanfare_error::FanfareErrorKind;
    use fanfare_interface::FanfareDriver;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Driver that records the last request and replays canned payloads.
    #[derive(Default)]
    struct RecordingDriver {
        json: Value,
        image: Option<Output>,
        last_request: Mutex<Option<GenerateRequest>>,
        last_schema: Mutex<Option<Value>>,
        last_options: Mutex<Option<ImageOptions>>,
    }

    #[async_trait]
    impl FanfareDriver for RecordingDriver {
        async fn generate(&self, _req: &GenerateRequest) -> FanfareResult<GenerateResponse> {
            Ok(GenerateResponse { outputs: vec![] })
        }

        fn provider_name(&self) -> &'static str {
            "recording"
        }

        fn model_name(&self) -> &str {
            "recording-model"
        }
    }

    #[async_trait]
    impl JsonMode for RecordingDriver {
        async fn generate_json(
            &self,
            req: &GenerateRequest,
            schema: &Value,
        ) -> FanfareResult<Value> {
            *self.last_request.lock().unwrap() = Some(req.clone());
            *self.last_schema.lock().unwrap() = Some(schema.clone());
            Ok(self.json.clone())
        }
    }

    #[async_trait]
    impl ImageGeneration for RecordingDriver {
        async fn generate_image(
            &self,
            req: &GenerateRequest,
            options: &ImageOptions,
        ) -> FanfareResult<Output> {
            *self.last_request.lock().unwrap() = Some(req.clone());
            *self.last_options.lock().unwrap() = Some(*options);
            match &self.image {
                Some(output) => Ok(output.clone()),
                None => Err(GeminiError::new(GeminiErrorKind::NoImageGenerated).into()),
            }
        }
    }

    #[tokio::test]
    async fn text_call_sends_persona_schema_and_model() {
        let client = ContentClient::new(RecordingDriver {
            json: json!([]),
            ..Default::default()
        });

        let items = client
            .generate_text("llama yoga", &[Platform::YouTube, Platform::TikTok])
            .await
            .unwrap();
        assert!(items.is_empty());

        let request = client.driver.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.model.as_deref(), Some(DEFAULT_TEXT_MODEL));
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, CAMPAIGN_PERSONA);
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1].content.contains("\"llama yoga\""));
        assert!(request.messages[1].content.contains("(YouTube, TikTok)"));

        let schema = client.driver.last_schema.lock().unwrap().clone().unwrap();
        assert_eq!(schema, campaign_schema());
    }

    #[tokio::test]
    async fn null_payload_yields_empty_vector() {
        let client = ContentClient::new(RecordingDriver {
            json: Value::Null,
            ..Default::default()
        });

        let items = client
            .generate_text("llama yoga", &[Platform::YouTube])
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn array_payload_parses_into_items() {
        let client = ContentClient::new(RecordingDriver {
            json: json!([{
                "platform": "YouTube",
                "title": "Llamas Do Yoga Better Than You",
                "description": "We took llamas to a yoga retreat.",
                "hashtags": ["#llamayoga"],
                "imagePrompt": "A llama in tree pose on a mountain deck"
            }]),
            ..Default::default()
        });

        let items = client
            .generate_text("llama yoga", &[Platform::YouTube])
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(*items[0].platform(), Platform::YouTube);
        assert_eq!(items[0].title(), "Llamas Do Yoga Better Than You");
    }

    #[tokio::test]
    async fn non_array_payload_is_a_parse_error() {
        let client = ContentClient::new(RecordingDriver {
            json: json!({"unexpected": "object"}),
            ..Default::default()
        });

        let err = client
            .generate_text("llama yoga", &[Platform::YouTube])
            .await
            .unwrap_err();
        match err.kind() {
            FanfareErrorKind::Gemini(e) => {
                assert!(matches!(e.kind, GeminiErrorKind::ResponseParse { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn image_call_encodes_data_uri_with_platform_aspect() {
        let client = ContentClient::new(RecordingDriver {
            image: Some(Output::Image {
                mime: Some("image/png".to_string()),
                data: b"hello".to_vec(),
            }),
            ..Default::default()
        });

        let uri = client
            .generate_image("A llama in tree pose", Platform::Instagram)
            .await
            .unwrap();
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");

        let request = client.driver.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.model.as_deref(), Some(DEFAULT_IMAGE_MODEL));
        assert!(request.messages[0].content.contains("4K resolution"));

        let options = client.driver.last_options.lock().unwrap().unwrap();
        assert_eq!(options, ImageOptions::new(AspectRatio::Square, ImageSize::FourK));
    }

    #[tokio::test]
    async fn image_call_defaults_missing_mime_to_png() {
        let client = ContentClient::new(RecordingDriver {
            image: Some(Output::Image {
                mime: None,
                data: b"hello".to_vec(),
            }),
            ..Default::default()
        });

        let uri = client
            .generate_image("A llama", Platform::YouTube)
            .await
            .unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn text_only_image_response_is_no_image_error() {
        let client = ContentClient::new(RecordingDriver {
            image: Some(Output::Text("cannot draw that".to_string())),
            ..Default::default()
        });

        let err = client
            .generate_image("A llama", Platform::YouTube)
            .await
            .unwrap_err();
        match err.kind() {
            FanfareErrorKind::Gemini(e) => {
                assert!(matches!(e.kind, GeminiErrorKind::NoImageGenerated));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn model_overrides_apply() {
        let client = ContentClient::new(RecordingDriver {
            json: json!([]),
            ..Default::default()
        })
        .with_models("text-custom", "image-custom")
        .with_temperature(0.9);

        client
            .generate_text("llama yoga", &[Platform::YouTube])
            .await
            .unwrap();

        let request = client.driver.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.model.as_deref(), Some("text-custom"));
        assert_eq!(request.temperature, Some(0.9));
    }
}
