//! Profile image upload handling.
//!
//! Validation runs before any byte touches disk; storing happens only after
//! the rest of the request has been validated, and `remove` is the
//! compensating action when a later step fails.

use crate::api::error::ApiError;

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use log::warn;
use uuid::Uuid;

/// Upload size ceiling: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted media types and the file extensions they may arrive with.
const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// A multipart image part, read into memory but not yet validated or stored.
#[derive(Debug)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// An image written to the uploads directory.
#[derive(Debug)]
pub struct StoredImage {
    pub disk_path: PathBuf,
    /// Relative path recorded on the user row, e.g. "/uploads/<name>".
    pub public_path: String,
}

/// Check media type, file extension and size. Returns the extension to store
/// the file under.
pub fn validate(image: &UploadedImage) -> Result<&'static str, ApiError> {
    let content_type = image.content_type.as_deref().unwrap_or_default();
    if !ALLOWED_TYPES.contains(&content_type) {
        return Err(ApiError::validation("Only image files are allowed"));
    }

    let extension = image
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let extension = ALLOWED_EXTENSIONS
        .iter()
        .find(|allowed| **allowed == extension)
        .copied()
        .ok_or_else(|| ApiError::validation("Only image files are allowed"))?;

    if image.bytes.len() > MAX_IMAGE_BYTES {
        return Err(ApiError::validation("Image must not exceed 5 MiB"));
    }

    Ok(extension)
}

/// Write a validated image under a generated name and return where it lives.
pub async fn store(
    dir: &Path,
    image: &UploadedImage,
    extension: &str,
) -> Result<StoredImage, ApiError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to prepare uploads directory: {}", e)))?;

    let file_name = format!("{}.{}", Uuid::new_v4(), extension);
    let disk_path = dir.join(&file_name);

    tokio::fs::write(&disk_path, &image.bytes)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to store image: {}", e)))?;

    Ok(StoredImage {
        disk_path,
        public_path: format!("/uploads/{}", file_name),
    })
}

/// Best-effort compensating delete. A failure is logged, never re-raised.
pub async fn remove(stored: &StoredImage) {
    if let Err(e) = tokio::fs::remove_file(&stored.disk_path).await {
        warn!(
            "Failed to delete uploaded file {}: {}",
            stored.disk_path.display(),
            e
        );
    }
}
