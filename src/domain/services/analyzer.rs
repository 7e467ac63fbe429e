//! Forensic analyzer trait
//!
//! Each scoring module reads only the shared seed and produces its own
//! result, so analyzers can run in any order or in parallel.

use crate::domain::entities::{ForensicModule, Seed};

/// A stateless scoring module keyed by a seed
pub trait ForensicAnalyzer: Send + Sync {
    /// Result record produced by this module
    type Output;

    /// Returns which module this analyzer implements
    fn module(&self) -> ForensicModule;

    /// Runs the module for `seed`
    fn analyze(&self, seed: Seed) -> Self::Output;
}
