//! Structured campaign copy returned by the text model.

use crate::Platform;
use serde::{Deserialize, Serialize};

/// One platform's generated copy.
///
/// Matches the structured response schema from [`crate::campaign_schema`]:
/// the model returns an array of these, one per requested platform. Text
/// fields are immutable once received; presentation state lives in
/// [`crate::PostResult`].
///
/// # Examples
///
/// ```
/// use fanfare_campaign::{GeneratedContent, Platform};
///
/// let json = r##"{
///     "platform": "YouTube",
///     "title": "I Tried Urban Beekeeping for 30 Days",
///     "description": "What happens when you put a hive on a city roof?",
///     "hashtags": ["#beekeeping", "#urbanfarming"],
///     "imagePrompt": "Close-up of a beekeeper on a rooftop at golden hour"
/// }"##;
///
/// let content: GeneratedContent = serde_json::from_str(json).unwrap();
/// assert_eq!(*content.platform(), Platform::YouTube);
/// assert_eq!(content.hashtags().len(), 2);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GeneratedContent {
    /// Which platform this item targets (required)
    platform: Platform,
    /// Post title or hook line (required)
    title: String,
    /// Post body, caption, or description (required)
    description: String,
    /// Suggested hashtags (may be empty for platforms that skip them)
    #[serde(default)]
    #[builder(default)]
    hashtags: Vec<String>,
    /// Visual description for the thumbnail (optional)
    #[serde(default)]
    #[builder(default)]
    image_prompt: Option<String>,
}

impl GeneratedContent {
    /// The prompt to hand to image generation.
    ///
    /// Falls back to the title when the model returned no usable image
    /// prompt, so every item can still get a thumbnail.
    pub fn image_prompt_or_title(&self) -> &str {
        self.image_prompt
            .as_deref()
            .filter(|prompt| !prompt.trim().is_empty())
            .unwrap_or(&self.title)
    }
}
