//! Structured-output schema for campaign text responses.

use crate::Platform;
use serde_json::{json, Value};
use strum::IntoEnumIterator;

/// JSON schema for the campaign text call.
///
/// Describes an array of per-platform objects in the schema dialect the
/// Gemini `responseSchema` field accepts (uppercase type names). Every
/// property is required so the model cannot omit the image prompt, though
/// deserialization still tolerates it as optional.
///
/// # Examples
///
/// ```
/// use fanfare_campaign::campaign_schema;
///
/// let schema = campaign_schema();
/// assert_eq!(schema["type"], "ARRAY");
/// assert_eq!(schema["items"]["type"], "OBJECT");
/// ```
pub fn campaign_schema() -> Value {
    let platform_names: Vec<String> = Platform::iter().map(|p| p.to_string()).collect();

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "platform": { "type": "STRING", "enum": platform_names },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "hashtags": { "type": "ARRAY", "items": { "type": "STRING" } },
                "imagePrompt": { "type": "STRING" }
            },
            "required": ["platform", "title", "description", "hashtags", "imagePrompt"]
        }
    })
}
