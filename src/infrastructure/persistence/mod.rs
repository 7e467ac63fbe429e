//! Report persistence

mod local_report_writer;

pub use local_report_writer::{
    DIGEST_EXTENSION, LocalReportWriter, digest_path, sha256_hex, verify_report,
};
