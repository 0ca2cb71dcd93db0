//! Views - Page assembly
//!
//! Puts the three sections together and follows container events.

pub mod content;

pub use content::*;
