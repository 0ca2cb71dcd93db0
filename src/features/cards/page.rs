//! Cards page section

use crate::components::{Column, TextTable};
use crate::domain::DashboardCard;
use crate::state::Container;

/// Summary cards, or the loading/error line in their place
pub fn render_cards(cards: &Container<DashboardCard>) -> String {
    if cards.is_loading() {
        return "Loading dashboard cards...".to_string();
    }
    if let Some(error) = cards.error() {
        return format!("Error: {error}");
    }

    let table = TextTable::new(vec![
        Column::new("CARD", |c: &DashboardCard| c.title.clone()).max_width(28),
        Column::new("VALUE", |c: &DashboardCard| c.value.clone()).align_right(),
        Column::new("", |c: &DashboardCard| c.subtitle.clone()).max_width(32),
    ])
    .empty_message("No cards yet. Use add-card to create one.");

    let action = if cards.is_adding() { "Adding..." } else { "+ Add Card" };
    format!("{}\n[{action}]", table.render(cards.items()))
}
