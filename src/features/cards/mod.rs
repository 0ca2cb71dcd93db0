//! Cards feature - Summary cards row

pub mod controller;
pub mod page;

pub use controller::{CardForm, CardsController};
pub use page::render_cards;
