//! File probing
//!
//! Builds a [`FileDescriptor`] for a file on disk the way an upload form
//! does: file name, byte length and an extension-based MIME type. Content
//! is never read.

use crate::core::DescriptorError;
use crate::domain::entities::FileDescriptor;
use std::fs;
use std::path::Path;

/// Extension to MIME type table, matching what browsers report on upload
const MIME_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("rtf", "application/rtf"),
    ("txt", "text/plain"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// Guesses a MIME type from a file name; empty when unknown
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return "";
    };
    let ext = ext.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}

/// Describes the file at `path`, optionally forcing its MIME type
pub fn probe_file(
    path: &Path,
    mime_override: Option<&str>,
) -> Result<FileDescriptor, DescriptorError> {
    let display = path.display().to_string();
    let meta = fs::metadata(path).map_err(|e| DescriptorError::from_probe(&display, e))?;

    if !meta.is_file() {
        return Err(DescriptorError::NotAFile(display));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = mime_override
        .map(str::to_string)
        .unwrap_or_else(|| guess_mime_type(&name).to_string());

    Ok(FileDescriptor::new(name, meta.len(), mime))
}
