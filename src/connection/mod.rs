//! Connection Management
//!
//! Backend (hosted table store) configuration and persistence.

mod config;

pub use config::*;
