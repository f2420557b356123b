//! Thumbnail persistence.
//!
//! Writes decoded images into an output directory using temp file + rename,
//! so a thumbnail overwritten by a regenerate is never observed half-written.

use crate::{ImageFormat, StorageResult, decode_data_uri};
use fanfare_error::{StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Decode a data URI and write it under `directory` as `filename`.
///
/// Creates the output directory if it does not exist and silently replaces
/// an existing file of the same name. Returns the path written.
///
/// # Errors
///
/// Returns a storage error when the URI is malformed, the MIME type is not a
/// supported image format, or the filesystem rejects the write.
#[tracing::instrument(skip(data_uri))]
pub async fn save_thumbnail(
    directory: &Path,
    filename: &str,
    data_uri: &str,
) -> StorageResult<PathBuf> {
    let (mime, bytes) = decode_data_uri(data_uri)?;

    if ImageFormat::from_mime(&mime).is_none() {
        return Err(StorageError::new(StorageErrorKind::UnsupportedMediaType(
            mime,
        )));
    }

    tokio::fs::create_dir_all(directory).await.map_err(|e| {
        StorageError::new(StorageErrorKind::DirectoryCreation(format!(
            "{}: {}",
            directory.display(),
            e
        )))
    })?;

    let path = directory.join(filename);

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    tracing::info!(
        path = %path.display(),
        size = bytes.len(),
        mime = %mime,
        "Saved thumbnail"
    );

    Ok(path)
}
