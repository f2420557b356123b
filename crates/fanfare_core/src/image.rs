//! Image generation option types.

use serde::{Deserialize, Serialize};

/// Aspect ratios supported by image generation.
///
/// Display renders the wire form the image service expects.
///
/// # Examples
///
/// ```
/// use fanfare_core::AspectRatio;
///
/// assert_eq!(format!("{}", AspectRatio::Landscape), "16:9");
/// assert_eq!(format!("{}", AspectRatio::Square), "1:1");
/// assert_eq!(format!("{}", AspectRatio::Portrait), "9:16");
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
)]
pub enum AspectRatio {
    /// 16:9 landscape, the default for video-first platforms
    #[display("16:9")]
    Landscape,
    /// 1:1 square
    #[display("1:1")]
    Square,
    /// 9:16 vertical
    #[display("9:16")]
    Portrait,
}

/// Resolution tier requested from the image service.
///
/// # Examples
///
/// ```
/// use fanfare_core::ImageSize;
///
/// assert_eq!(format!("{}", ImageSize::FourK), "4K");
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
)]
pub enum ImageSize {
    /// 1K tier
    #[display("1K")]
    OneK,
    /// 2K tier
    #[display("2K")]
    TwoK,
    /// 4K tier
    #[display("4K")]
    FourK,
}

/// Options for a single image generation call.
///
/// # Examples
///
/// ```
/// use fanfare_core::{AspectRatio, ImageOptions, ImageSize};
///
/// let options = ImageOptions::new(AspectRatio::Square, ImageSize::FourK);
/// assert_eq!(*options.aspect_ratio(), AspectRatio::Square);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
    derive_getters::Getters,
)]
#[display("{} at {}", aspect_ratio, size)]
pub struct ImageOptions {
    /// Aspect ratio of the requested image
    aspect_ratio: AspectRatio,
    /// Resolution tier of the requested image
    size: ImageSize,
}
