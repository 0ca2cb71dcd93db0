//! Services feature - Top services with progress

pub mod controller;
pub mod page;

pub use controller::{ServiceForm, ServicesController};
pub use page::render_services;
