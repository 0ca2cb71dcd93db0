//! Main Content Area
//!
//! Composes the cards, services and tickets sections into the dashboard
//! page and tracks which sections need redrawing from the event stream.

use std::collections::HashSet;

use crossbeam_channel::Receiver;
use tracing::debug;

use crate::components::Pager;
use crate::eventing::{Phase, StateEvent};
use crate::features::cards::render_cards;
use crate::features::services::render_services;
use crate::features::tickets::render_tickets;
use crate::state::DashboardSnapshot;

/// Full dashboard page as text
pub fn render_dashboard(snapshot: &DashboardSnapshot, pager: &Pager) -> String {
    [
        "Dashboard".to_string(),
        render_cards(&snapshot.cards),
        render_services(&snapshot.services),
        render_tickets(&snapshot.tickets, pager),
    ]
    .join("\n\n")
}

/// Subscriber that turns container events into "these tables changed"
pub struct DashboardView {
    events: Receiver<StateEvent>,
    dirty: HashSet<&'static str>,
    pub pager: Pager,
}

impl DashboardView {
    pub fn new(events: Receiver<StateEvent>) -> Self {
        Self {
            events,
            dirty: HashSet::new(),
            pager: Pager::new(),
        }
    }

    /// Drain pending events; returns true when something needs redrawing
    pub fn pump(&mut self) -> bool {
        for event in self.events.try_iter() {
            debug!(
                action = %event.action_type(),
                request_id = %event.request_id,
                "State event"
            );
            if event.phase == Phase::Rejected {
                debug!(table = event.table, error = ?event.error, "Section shows an error");
            }
            self.dirty.insert(event.table);
        }
        !self.dirty.is_empty()
    }

    /// Tables changed since the last render
    pub fn dirty_tables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dirty.iter().copied()
    }

    /// Render and clear the dirty set
    pub fn render(&mut self, snapshot: &DashboardSnapshot) -> String {
        self.dirty.clear();
        render_dashboard(snapshot, &self.pager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TICKETS_TABLE;
    use crate::services::MemoryTableStore;
    use crate::state::Dashboard;

    #[tokio::test]
    async fn view_tracks_changed_tables() {
        let dashboard = Dashboard::new(MemoryTableStore::demo().expect("demo"));
        let mut view = DashboardView::new(dashboard.events());
        assert!(!view.pump());

        dashboard.tickets.fetch_all().await.expect("tickets");
        assert!(view.pump());
        let dirty: Vec<_> = view.dirty_tables().collect();
        assert_eq!(dirty, vec![TICKETS_TABLE]);

        let page = view.render(&dashboard.snapshot());
        assert!(page.starts_with("Dashboard"));
        assert!(!view.pump());
    }

    #[tokio::test]
    async fn page_contains_all_sections() {
        let dashboard = Dashboard::new(MemoryTableStore::demo().expect("demo"));
        dashboard.load().await;

        let page = render_dashboard(&dashboard.snapshot(), &Pager::new());
        assert!(page.contains("Total Clients"));
        assert!(page.contains("Top Services"));
        assert!(page.contains("Latest Tickets"));
    }
}
