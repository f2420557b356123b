//! Image format vocabulary.

/// Image formats Fanfare accepts from the image service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ImageFormat {
    /// PNG, the format image models return by default
    #[display("png")]
    Png,
    /// JPEG
    #[display("jpeg")]
    Jpeg,
    /// WebP
    #[display("webp")]
    Webp,
}

impl ImageFormat {
    /// Classify a MIME type, if it names a supported image format.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    /// The canonical MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
        }
    }
}
