//! Thumbnail persistence and media vocabulary for Fanfare.
//!
//! Generated images travel through the campaign pipeline as `data:` URIs, the
//! same hand-off format the model client produces. This crate provides the
//! codec for that format, the vocabulary of image formats Fanfare accepts,
//! and the thumbnail writer used by the download action and one-shot runs.
//!
//! # Example
//!
//! ```rust
//! use fanfare_storage::{decode_data_uri, encode_data_uri};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let uri = encode_data_uri("image/png", b"fake png bytes");
//! let (mime, bytes) = decode_data_uri(&uri)?;
//! assert_eq!(mime, "image/png");
//! assert_eq!(bytes, b"fake png bytes");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod data_uri;
mod media_type;
mod thumbnail;

pub use data_uri::{decode_data_uri, encode_data_uri};
pub use fanfare_error::{StorageError, StorageErrorKind};
pub use media_type::ImageFormat;
pub use thumbnail::save_thumbnail;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, fanfare_error::StorageError>;
