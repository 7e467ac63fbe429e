//! Presentation layer
//!
//! Command-line front end over the application use cases.

pub mod cli;
