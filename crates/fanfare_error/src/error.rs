//! Top-level error wrapper types.

use crate::{CampaignError, ConfigError, GeminiError, JsonError, StorageError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// This is the foundation error enum. Each fanfare crate contributes its
/// wrapper type as a variant.
///
/// # Examples
///
/// ```
/// use fanfare_error::{FanfareError, GeminiError, GeminiErrorKind};
///
/// let gem_err = GeminiError::new(GeminiErrorKind::NoImageGenerated);
/// let err: FanfareError = gem_err.into();
/// assert!(format!("{}", err).contains("No image"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FanfareErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini client error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Campaign workflow error
    #[from(CampaignError)]
    Campaign(CampaignError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Fanfare error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fanfare_error::{ConfigError, FanfareResult};
///
/// fn might_fail() -> FanfareResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fanfare Error: {}", _0)]
pub struct FanfareError(Box<FanfareErrorKind>);

impl FanfareError {
    /// Create a new error from a kind.
    pub fn new(kind: FanfareErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FanfareErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FanfareErrorKind
impl<T> From<T> for FanfareError
where
    T: Into<FanfareErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fanfare operations.
///
/// # Examples
///
/// ```
/// use fanfare_error::{FanfareResult, JsonError};
///
/// fn serialize_card() -> FanfareResult<String> {
///     Err(JsonError::new("key must be a string"))?
/// }
/// ```
pub type FanfareResult<T> = std::result::Result<T, FanfareError>;
