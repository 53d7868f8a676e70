//! Small helpers shared across the crate.

/// Hex and padding helpers
pub mod hex;

pub use self::hex::*;
