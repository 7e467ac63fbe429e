//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories, plus the
//! filesystem probing that turns paths into descriptors.

pub mod clock;
pub mod descriptor;
pub mod persistence;

pub use clock::{FixedClock, SystemClock};
pub use descriptor::{guess_mime_type, probe_file};
pub use persistence::{LocalReportWriter, verify_report};
