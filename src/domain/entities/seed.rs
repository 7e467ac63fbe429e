//! Seed entity
//!
//! A 32-bit value folded from a file's identity. Every synthetic score is
//! drawn from it, so the fold must wrap exactly like two's-complement
//! 32-bit arithmetic.

use super::file_descriptor::FileDescriptor;
use std::fmt;

/// Prefix for generated case identifiers
pub const CASE_ID_PREFIX: &str = "FX-";

/// Deterministic seed derived from a file's name, size and MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(u32);

impl Seed {
    /// Wraps a raw seed value
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Folds `"{name}-{size_bytes}-{mime_type}"` into a seed.
    ///
    /// Each UTF-16 code unit updates `h = h * 31 + unit` with wrapping
    /// `i32` arithmetic; the seed is `|h|`.
    pub fn derive(name: &str, size_bytes: u64, mime_type: &str) -> Self {
        let key = format!("{name}-{size_bytes}-{mime_type}");
        let hash = key
            .encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
        Self(hash.unsigned_abs())
    }

    /// Derives the seed for a file descriptor
    pub fn from_descriptor(file: &FileDescriptor) -> Self {
        Self::derive(file.name(), file.size_bytes(), file.mime_type())
    }

    /// Returns the raw value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the case identifier, e.g. `FX-6A503CE7`
    pub fn case_id(self) -> String {
        let mut hex = format!("{:08X}", self.0);
        hex.truncate(8);
        format!("{CASE_ID_PREFIX}{hex}")
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
