//! Helper Utilities
//!
//! Platform directories and secret sealing used by the configuration layer.

mod fs;
mod secret;

pub use fs::*;
pub use secret::*;
