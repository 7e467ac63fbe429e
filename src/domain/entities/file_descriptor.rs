//! File descriptor entity
//!
//! The identity of an uploaded file as the scoring core sees it: name,
//! byte size and declared MIME type. File content never enters the core.

use humansize::{format_size, WINDOWS};

/// Identity attributes of a file submitted for analysis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileDescriptor {
    /// File name as supplied by the uploader (may be empty)
    name: String,
    /// Size of the file in bytes
    size_bytes: u64,
    /// Declared MIME type (empty when unknown)
    mime_type: String,
}

impl FileDescriptor {
    /// Creates a new file descriptor
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Returns the file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the size in bytes
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Returns the declared MIME type
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the size as a human-readable string
    pub fn size_human(&self) -> String {
        format_size(self.size_bytes, WINDOWS.decimal_places(1))
    }
}
