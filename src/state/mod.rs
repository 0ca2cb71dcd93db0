//! State - Dashboard containers
//!
//! One container per table, each with its own rows and flags. Containers
//! are split so a change to one never touches the others.

pub mod container;
pub mod dashboard;
pub mod slice;

pub use container::{Container, Operation};
pub use dashboard::{Dashboard, DashboardSnapshot, LoadReport};
pub use slice::Slice;
