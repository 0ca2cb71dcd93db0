//! Domain - Pure Data Structures for the dashboard tables
//!
//! These types don't depend on any store or renderer and mirror the rows
//! of the `cards`, `services` and `tickets` tables.

pub mod card;
pub mod record;
pub mod service;
pub mod ticket;

pub use card::{DashboardCard, NewCard};
pub use record::{Editable, Record, RecordId};
pub use service::{NewService, Service};
pub use ticket::{NewTicket, Ticket, TicketStatus};
