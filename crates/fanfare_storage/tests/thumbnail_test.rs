//! Tests for thumbnail persistence.

use fanfare_storage::{StorageErrorKind, encode_data_uri, save_thumbnail};
use tempfile::TempDir;

#[tokio::test]
async fn test_save_and_read_back() {
    let temp_dir = TempDir::new().unwrap();

    let data = b"fake png bytes";
    let uri = encode_data_uri("image/png", data);

    let path = save_thumbnail(temp_dir.path(), "youtube_thumbnail.png", &uri)
        .await
        .unwrap();

    assert!(path.ends_with("youtube_thumbnail.png"));
    let written = tokio::fs::read(&path).await.unwrap();
    assert_eq!(written, data);
}

#[tokio::test]
async fn test_save_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("campaign").join("out");

    let uri = encode_data_uri("image/png", b"bytes");
    let path = save_thumbnail(&nested, "tiktok_thumbnail.png", &uri)
        .await
        .unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_save_overwrites_previous_thumbnail() {
    let temp_dir = TempDir::new().unwrap();

    let first = encode_data_uri("image/png", b"first image");
    let second = encode_data_uri("image/png", b"second image");

    save_thumbnail(temp_dir.path(), "instagram_thumbnail.png", &first)
        .await
        .unwrap();
    let path = save_thumbnail(temp_dir.path(), "instagram_thumbnail.png", &second)
        .await
        .unwrap();

    let written = tokio::fs::read(&path).await.unwrap();
    assert_eq!(written, b"second image");
}

#[tokio::test]
async fn test_save_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();

    let uri = encode_data_uri("image/png", b"bytes");
    save_thumbnail(temp_dir.path(), "reddit_thumbnail.png", &uri)
        .await
        .unwrap();

    assert!(!temp_dir.path().join("reddit_thumbnail.tmp").exists());
}

#[tokio::test]
async fn test_save_rejects_malformed_uri() {
    let temp_dir = TempDir::new().unwrap();

    let result = save_thumbnail(temp_dir.path(), "youtube_thumbnail.png", "not a data uri").await;
    let err = result.unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::InvalidDataUri(_)));
}

#[tokio::test]
async fn test_save_rejects_non_image_mime() {
    let temp_dir = TempDir::new().unwrap();

    let uri = encode_data_uri("video/mp4", b"not an image");
    let result = save_thumbnail(temp_dir.path(), "youtube_thumbnail.png", &uri).await;
    let err = result.unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::UnsupportedMediaType(_)));
}
