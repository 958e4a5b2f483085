// File encoding — bytes to base64 `data:` URLs, extension-based typing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine};

use crate::moderation::types::ContentItem;

/// Infer a MIME type from the file extension (case-insensitive).
///
/// Only the image types the moderation endpoint documents are mapped;
/// everything else goes out as an opaque octet stream.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Whether this file should be submitted as plain text instead of an image.
pub fn is_text_path(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    matches!(ext.as_deref(), Some("txt" | "md" | "text"))
}

/// Read a file and encode its bytes with the standard base64 alphabet.
pub fn encode_base64(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(general_purpose::STANDARD.encode(bytes))
}

/// Build a `data:` URL embedding the file's base64-encoded bytes.
pub fn data_url(path: &Path) -> Result<String> {
    Ok(format!(
        "data:{};base64,{}",
        mime_for_path(path),
        encode_base64(path)?
    ))
}

/// Turn a file into a typed content item for a moderation request.
///
/// Text files are read as UTF-8 and submitted verbatim; everything else
/// is submitted as an inline image.
pub fn content_item(path: &Path) -> Result<ContentItem> {
    if is_text_path(path) {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file {}", path.display()))?;
        Ok(ContentItem::text(text))
    } else {
        Ok(ContentItem::image(data_url(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mime_inference_covers_known_image_types() {
        assert_eq!(mime_for_path(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.JPEG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("a.webp")), "image/webp");
    }

    #[test]
    fn unknown_extensions_are_octet_stream() {
        assert_eq!(mime_for_path(Path::new("a.bmp")), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn text_extensions_are_detected() {
        assert!(is_text_path(Path::new("notes.txt")));
        assert!(is_text_path(Path::new("README.md")));
        assert!(is_text_path(Path::new("UPPER.TXT")));
        assert!(!is_text_path(Path::new("photo.png")));
        assert!(!is_text_path(Path::new("noext")));
    }

    #[test]
    fn sidecar_txt_of_txt_is_text() {
        // double extensions resolve by the last one
        assert!(is_text_path(&PathBuf::from("photo.litmus.txt")));
    }
}
