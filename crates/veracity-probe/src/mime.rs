//! Mime type to file extension table
//!
//! The provenance tool picks its container parser from the file extension,
//! so the scratch file must carry the right one.

use std::path::Path;

const MIME_EXTENSIONS: [(&str, &str); 11] = [
    ("image/avif", ".avif"),
    ("image/bmp", ".bmp"),
    ("image/gif", ".gif"),
    ("image/heic", ".heic"),
    ("image/heif", ".heif"),
    ("image/jpeg", ".jpg"),
    ("image/jpg", ".jpg"),
    ("image/png", ".png"),
    ("image/svg+xml", ".svg"),
    ("image/tiff", ".tiff"),
    ("image/webp", ".webp"),
];

/// Extension (with leading dot) for a supported mime type
pub fn extension_for(mime_type: &str) -> Option<&'static str> {
    let mime_type = mime_type.trim();
    MIME_EXTENSIONS
        .iter()
        .find(|(mime, _)| mime.eq_ignore_ascii_case(mime_type))
        .map(|(_, extension)| *extension)
}

/// Mime type for a file extension (with or without the leading dot)
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    match extension.as_str() {
        "jpeg" | "jpe" => return Some("image/jpeg"),
        "tif" => return Some("image/tiff"),
        _ => {}
    }

    MIME_EXTENSIONS
        .iter()
        .find(|(_, ext)| ext[1..] == extension)
        .map(|(mime, _)| *mime)
}

/// Mime type guessed from a path's extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|extension| extension.to_str())
        .and_then(mime_for_extension)
}

/// All mime types the provenance probe accepts
pub fn supported_mime_types() -> impl Iterator<Item = &'static str> {
    MIME_EXTENSIONS.iter().map(|(mime, _)| *mime)
}
