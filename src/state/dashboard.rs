//! Dashboard - The three containers composed over one store
//!
//! Cards, services and tickets never talk to each other; they only share
//! the store handle and the event channel.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use tracing::info;

use crate::domain::{DashboardCard, Service, Ticket};
use crate::eventing::StateEvent;
use crate::services::TableStore;
use crate::state::container::Container;
use crate::state::slice::Slice;

/// Point-in-time copy of all three containers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub cards: Container<DashboardCard>,
    pub services: Container<Service>,
    pub tickets: Container<Ticket>,
}

/// Result of loading the page, one entry per container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub cards_ok: bool,
    pub services_ok: bool,
    pub tickets_ok: bool,
}

impl LoadReport {
    pub fn all_ok(&self) -> bool {
        self.cards_ok && self.services_ok && self.tickets_ok
    }
}

/// The dashboard page's state
pub struct Dashboard<S: TableStore> {
    pub cards: Slice<DashboardCard, S>,
    pub services: Slice<Service, S>,
    pub tickets: Slice<Ticket, S>,
    tx: Sender<StateEvent>,
    rx: Receiver<StateEvent>,
}

impl<S: TableStore> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    pub fn with_shared_store(store: Arc<S>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();

        Self {
            cards: Slice::new(store.clone(), tx.clone()),
            services: Slice::new(store.clone(), tx.clone()),
            tickets: Slice::new(store, tx.clone()),
            tx,
            rx,
        }
    }

    /// Receiver for container transitions
    ///
    /// Events from all three containers are multiplexed into this channel.
    pub fn events(&self) -> Receiver<StateEvent> {
        self.rx.clone()
    }

    /// Fetch all three lists concurrently, as mounting the page does
    ///
    /// A failure in one container does not affect the others; each failure
    /// is already recorded in its container's error.
    pub async fn load(&self) -> LoadReport {
        let (cards, services, tickets) = futures::join!(
            self.cards.fetch_all(),
            self.services.fetch_all(),
            self.tickets.fetch_all()
        );

        let report = LoadReport {
            cards_ok: cards.is_ok(),
            services_ok: services.is_ok(),
            tickets_ok: tickets.is_ok(),
        };
        info!(?report, "Dashboard loaded");
        report
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            cards: self.cards.snapshot(),
            services: self.services.snapshot(),
            tickets: self.tickets.snapshot(),
        }
    }
}

impl<S: TableStore> std::fmt::Debug for Dashboard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("cards", &self.cards)
            .field("services", &self.services)
            .field("tickets", &self.tickets)
            .field("queued_events", &self.tx.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SERVICES_TABLE;
    use crate::services::MemoryTableStore;

    #[tokio::test]
    async fn load_fills_all_containers() {
        let dashboard = Dashboard::new(MemoryTableStore::demo().expect("demo"));
        let report = dashboard.load().await;
        assert!(report.all_ok());

        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.cards.len(), 3);
        assert_eq!(snapshot.services.len(), 3);
        assert_eq!(snapshot.tickets.len(), 3);
    }

    #[tokio::test]
    async fn one_failing_container_leaves_others_alone() {
        let store = Arc::new(MemoryTableStore::demo().expect("demo"));
        store.fail_next(SERVICES_TABLE, Some("relation \"services\" does not exist"));

        let dashboard = Dashboard::with_shared_store(store);
        let report = dashboard.load().await;

        assert!(report.cards_ok && report.tickets_ok);
        assert!(!report.services_ok);

        let snapshot = dashboard.snapshot();
        assert_eq!(
            snapshot.services.error(),
            Some("relation \"services\" does not exist")
        );
        assert_eq!(snapshot.cards.error(), None);
        assert_eq!(snapshot.tickets.len(), 3);
    }

    #[tokio::test]
    async fn events_are_multiplexed() {
        let dashboard = Dashboard::new(MemoryTableStore::new());
        let rx = dashboard.events();
        dashboard.load().await;

        let tables: std::collections::HashSet<_> = rx.try_iter().map(|e| e.table).collect();
        assert_eq!(tables.len(), 3);
    }
}
