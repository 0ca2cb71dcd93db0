//! Components - Text rendering building blocks
//!
//! Shared by the feature pages to draw tables, the pager and progress bars.

pub mod pagination;
pub mod progress;
pub mod table;

pub use pagination::Pager;
pub use progress::progress_bar;
pub use table::{Column, ColumnWidth, TextTable, truncate};
