use std::io;
use thiserror::Error;

/// Errors that can occur when building a file descriptor from disk
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Not a regular file: {0}")]
    NotAFile(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl DescriptorError {
    /// Maps an I/O error raised while probing `path` onto a descriptor error
    pub fn from_probe(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => DescriptorError::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => DescriptorError::PermissionDenied(path.to_string()),
            _ => DescriptorError::IoError(err),
        }
    }
}
