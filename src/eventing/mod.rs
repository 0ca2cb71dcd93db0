//! Eventing - State change notifications for the rendering layer

pub mod state_event;

pub use state_event::*;
