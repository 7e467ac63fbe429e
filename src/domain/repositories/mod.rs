//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.
//! They follow the Dependency Inversion Principle (DIP) from SOLID.

mod clock;
mod report_writer;

pub use clock::Clock;
pub use report_writer::{
    ReportFormat, ReportWriter, ReportWriterError, WriteOptions, WrittenReport,
};
