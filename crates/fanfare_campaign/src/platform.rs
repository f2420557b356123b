//! Target platforms for campaign generation.

use fanfare_core::AspectRatio;
use serde::{Deserialize, Serialize};

/// A social platform targeted by a campaign cycle.
///
/// The `Display` form ("YouTube", "TikTok", ...) is the name used in prompts
/// and in the structured response payload, so the deserialized `platform`
/// field of generated items maps straight back onto this enum.
///
/// # Examples
///
/// ```
/// use fanfare_campaign::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(format!("{}", Platform::TikTok), "TikTok");
/// assert_eq!(Platform::from_str("tiktok").ok(), Some(Platform::TikTok));
/// assert_eq!(Platform::Instagram.thumbnail_filename(), "instagram_thumbnail.png");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    /// Long-form video
    #[display("YouTube")]
    YouTube,
    /// Square-visual feed and stories
    #[display("Instagram")]
    Instagram,
    /// Short-form vertical video
    #[display("TikTok")]
    TikTok,
    /// Community feed posts
    #[display("Facebook")]
    Facebook,
    /// Discussion threads
    #[display("Reddit")]
    Reddit,
}

impl Platform {
    /// Aspect ratio for this platform's thumbnail.
    ///
    /// Landscape is the default; Instagram gets square and TikTok vertical.
    pub fn aspect_ratio(&self) -> AspectRatio {
        match self {
            Platform::Instagram => AspectRatio::Square,
            Platform::TikTok => AspectRatio::Portrait,
            _ => AspectRatio::Landscape,
        }
    }

    /// Deterministic filename for a downloaded thumbnail.
    pub fn thumbnail_filename(&self) -> String {
        format!("{}_thumbnail.png", self.to_string().to_lowercase())
    }

    /// The platforms selected when a session starts.
    pub fn default_selection() -> Vec<Platform> {
        vec![Platform::YouTube, Platform::Instagram, Platform::TikTok]
    }
}
