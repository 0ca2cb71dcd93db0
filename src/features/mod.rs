//! Features - Dashboard sections
//!
//! Each section has a controller (dialog state and dispatch) and a page
//! (text rendering of its container).

pub mod cards;
pub mod form;
pub mod services;
pub mod tickets;
