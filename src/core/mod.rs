//! Crate-wide primitives shared by every layer.

pub mod error;
pub mod numeric;

pub use error::DescriptorError;
pub use numeric::{round_to, to_fixed};
