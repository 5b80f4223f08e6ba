use crate::api::error::ApiError;
use crate::api::uploads::{MAX_IMAGE_BYTES, UploadedImage, validate};

use axum::body::Bytes;

fn image(file_name: &str, content_type: &str, size: usize) -> UploadedImage {
    UploadedImage {
        file_name: Some(file_name.to_string()),
        content_type: Some(content_type.to_string()),
        bytes: Bytes::from(vec![0u8; size]),
    }
}

#[test]
fn test_png_accepted_with_extension() {
    let extension = validate(&image("avatar.PNG", "image/png", 1024)).unwrap();
    assert_eq!(extension, "png");
}

#[test]
fn test_jpeg_extension_variants_accepted() {
    assert_eq!(validate(&image("a.jpg", "image/jpeg", 10)).unwrap(), "jpg");
    assert_eq!(validate(&image("a.jpeg", "image/jpeg", 10)).unwrap(), "jpeg");
}

#[test]
fn test_non_image_media_type_rejected() {
    let result = validate(&image("report.pdf", "application/pdf", 10));
    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn test_mismatched_extension_rejected() {
    // Right media type, wrong extension: both checks must pass.
    let result = validate(&image("script.exe", "image/png", 10));
    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn test_missing_filename_rejected() {
    let no_name = UploadedImage {
        file_name: None,
        content_type: Some("image/png".to_string()),
        bytes: Bytes::from_static(b"x"),
    };
    assert!(matches!(
        validate(&no_name),
        Err(ApiError::Validation { .. })
    ));
}

#[test]
fn test_oversize_image_rejected() {
    let result = validate(&image("big.png", "image/png", MAX_IMAGE_BYTES + 1));
    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn test_exact_ceiling_accepted() {
    assert!(validate(&image("edge.gif", "image/gif", MAX_IMAGE_BYTES)).is_ok());
}
