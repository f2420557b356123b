//! Tests for thumbnail persistence.

use fanfare_storage::{StorageErrorKind, encode_data_uri, save_thumbnail};
use tempfile::TempDir;

#[tokio::test]
async fn test_save_and_read_back() {
    let temp_dir = TempDir::new().unwrap();
    let uri = encode_data_uri("image/png", b"png payload");

    let path = save_thumbnail(temp_dir.path(), "youtube_thumbnail.png", &uri)
        .await
        .unwrap();

    assert_eq!(path, temp_dir.path().join("youtube_thumbnail.png"));
    let written = tokio::fs::read(&path).await.unwrap();
    assert_eq!(written, b"png payload");
}

#[tokio::test]
async fn test_overwrite_replaces_content() {
    let temp_dir = TempDir::new().unwrap();

    let first = encode_data_uri("image/png", b"first render");
    let second = encode_data_uri("image/png", b"second render");

    // Save twice under the same name, as a regenerate does
    let path1 = save_thumbnail(temp_dir.path(), "tiktok_thumbnail.png", &first)
        .await
        .unwrap();
    let path2 = save_thumbnail(temp_dir.path(), "tiktok_thumbnail.png", &second)
        .await
        .unwrap();

    assert_eq!(path1, path2);
    let written = tokio::fs::read(&path2).await.unwrap();
    assert_eq!(written, b"second render");
}

#[tokio::test]
async fn test_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("campaigns").join("latest");
    let uri = encode_data_uri("image/jpeg", b"jpeg payload");

    let path = save_thumbnail(&nested, "instagram_thumbnail.png", &uri)
        .await
        .unwrap();

    assert!(nested.is_dir());
    assert!(path.exists());
}

#[tokio::test]
async fn test_no_temp_file_left_behind() {
    let temp_dir = TempDir::new().unwrap();
    let uri = encode_data_uri("image/png", b"payload");

    save_thumbnail(temp_dir.path(), "facebook_thumbnail.png", &uri)
        .await
        .unwrap();

    let mut entries = tokio::fs::read_dir(temp_dir.path()).await.unwrap();
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    assert_eq!(names, vec!["facebook_thumbnail.png".to_string()]);
}

#[tokio::test]
async fn test_rejects_unsupported_media_type() {
    let temp_dir = TempDir::new().unwrap();
    let uri = encode_data_uri("application/pdf", b"not an image");

    let result = save_thumbnail(temp_dir.path(), "bad.png", &uri).await;

    assert!(matches!(
        result.unwrap_err().kind,
        StorageErrorKind::UnsupportedMediaType(_)
    ));
    assert!(!temp_dir.path().join("bad.png").exists());
}

#[tokio::test]
async fn test_rejects_malformed_uri() {
    let temp_dir = TempDir::new().unwrap();

    let result = save_thumbnail(temp_dir.path(), "bad.png", "https://example.com/x.png").await;

    assert!(matches!(
        result.unwrap_err().kind,
        StorageErrorKind::InvalidDataUri(_)
    ));
}
