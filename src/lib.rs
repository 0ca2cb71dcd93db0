//! Admin Dashboard Client Library
//!
//! State and rendering for the admin dashboard: summary cards, top services
//! with progress, and a latest-tickets table, all backed by a hosted table
//! store.

pub mod components;
pub mod connection;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod views;
