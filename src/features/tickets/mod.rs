//! Tickets feature - Latest tickets table

pub mod controller;
pub mod page;

pub use controller::{TicketForm, TicketFormMode, TicketsController};
pub use page::render_tickets;
