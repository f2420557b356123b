//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Data URI did not match `data:<mime>;base64,<payload>`
    #[display("Invalid data URI: {}", _0)]
    InvalidDataUri(String),
    /// Base64 payload failed to decode
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// MIME type is not a supported image format
    #[display("Unsupported media type: {}", _0)]
    UnsupportedMediaType(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use fanfare_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::InvalidDataUri("no comma".to_string()));
/// assert!(format!("{}", err).contains("data URI"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
