//! Data URI encoding and decoding.
//!
//! Generated images are handed between the model client, the campaign state,
//! and the presentation layer as `data:<mime>;base64,<payload>` strings.

use crate::StorageResult;
use base64::Engine;
use fanfare_error::{StorageError, StorageErrorKind};

/// Encode raw bytes as a `data:` URI.
///
/// # Examples
///
/// ```
/// use fanfare_storage::encode_data_uri;
///
/// let uri = encode_data_uri("image/png", b"hello");
/// assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
/// ```
pub fn encode_data_uri(mime: &str, data: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(data);
    format!("data:{};base64,{}", mime, payload)
}

/// Split a `data:` URI into its MIME type and decoded bytes.
///
/// # Errors
///
/// Returns [`StorageErrorKind::InvalidDataUri`] when the URI does not match
/// `data:<mime>;base64,<payload>`, and [`StorageErrorKind::Base64Decode`]
/// when the payload is not valid base64.
///
/// # Examples
///
/// ```
/// use fanfare_storage::decode_data_uri;
///
/// let (mime, bytes) = decode_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
/// assert_eq!(mime, "image/png");
/// assert_eq!(bytes, b"hello");
/// ```
pub fn decode_data_uri(uri: &str) -> StorageResult<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:").ok_or_else(|| {
        StorageError::new(StorageErrorKind::InvalidDataUri(
            "missing data: prefix".to_string(),
        ))
    })?;

    let (header, payload) = rest.split_once(',').ok_or_else(|| {
        StorageError::new(StorageErrorKind::InvalidDataUri(
            "missing comma separator".to_string(),
        ))
    })?;

    let mime = header.strip_suffix(";base64").ok_or_else(|| {
        StorageError::new(StorageErrorKind::InvalidDataUri(
            "missing ;base64 marker".to_string(),
        ))
    })?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| StorageError::new(StorageErrorKind::Base64Decode(e.to_string())))?;

    Ok((mime.to_string(), bytes))
}
