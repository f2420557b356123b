//! Prompt assembly for campaign text and image generation.

use crate::Platform;
use fanfare_core::AspectRatio;
use std::fmt::Write;

/// System persona for the text-generation call.
pub const CAMPAIGN_PERSONA: &str = "You are an expert social media manager.";

/// Fixed qualifiers appended to every image prompt.
const IMAGE_QUALITY_SUFFIX: &str =
    "4K resolution, photorealistic, cinematic lighting, vibrant colors, high detail, masterpiece.";

/// Per-platform copywriting rule for the instruction prompt.
fn style_rule(platform: Platform) -> &'static str {
    match platform {
        Platform::YouTube => {
            "YouTube: clickbaity but relevant title, SEO-rich description (approx 100 words)."
        }
        Platform::Instagram => {
            "Instagram: engaging caption, line breaks, mix of popular and niche hashtags."
        }
        Platform::TikTok => "TikTok: short, punchy caption, trending hashtags.",
        Platform::Facebook => "Facebook: conversational tone, community-focused.",
        Platform::Reddit => {
            "Reddit: authentic title (no clickbait), detailed context for the post body."
        }
    }
}

/// Thumbnail guidance matching the platform's aspect ratio.
fn visual_hint(platform: Platform) -> &'static str {
    match platform.aspect_ratio() {
        AspectRatio::Landscape => {
            "a 16:9 landscape thumbnail with high contrast and legible text space"
        }
        AspectRatio::Square => "a 1:1 square visual that pops",
        AspectRatio::Portrait => "a 9:16 vertical visual that pops",
    }
}

/// Build the instruction for one campaign text call.
///
/// Embeds the concept verbatim, names exactly the selected platforms, and
/// includes the copywriting rule and thumbnail guidance for each of them.
/// Platforms outside the selection are never mentioned, which keeps the
/// model from returning items the cycle did not ask for.
///
/// # Examples
///
/// ```
/// use fanfare_campaign::{campaign_instruction, Platform};
///
/// let prompt = campaign_instruction("urban beekeeping", &[Platform::YouTube]);
/// assert!(prompt.contains("\"urban beekeeping\""));
/// assert!(prompt.contains("YouTube"));
/// assert!(!prompt.contains("TikTok"));
/// ```
pub fn campaign_instruction(concept: &str, platforms: &[Platform]) -> String {
    let names = platforms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut prompt = format!(
        "Video concept: \"{concept}\"\n\n\
         For each selected platform ({names}), generate optimized content.\n"
    );
    for platform in platforms {
        let _ = writeln!(prompt, "- {}", style_rule(*platform));
    }

    prompt.push_str(
        "\nAlso provide a specific, highly detailed visual description \
         for an image or thumbnail for each post.\n",
    );
    for platform in platforms {
        let _ = writeln!(prompt, "- For {platform}, describe {}.", visual_hint(*platform));
    }

    prompt
}

/// Append the fixed quality qualifiers to an image prompt.
///
/// # Examples
///
/// ```
/// use fanfare_campaign::enhance_image_prompt;
///
/// let enhanced = enhance_image_prompt("A rooftop hive at sunset");
/// assert!(enhanced.starts_with("A rooftop hive at sunset. 4K resolution"));
/// ```
pub fn enhance_image_prompt(prompt: &str) -> String {
    let base = prompt.trim_end().trim_end_matches('.');
    format!("{base}. {IMAGE_QUALITY_SUFFIX}")
}
