//! Container - List state for one dashboard table
//!
//! Holds the rows of one entity kind plus its loading/adding/error flags.
//! Every operation outcome (pending, fulfilled, rejected) is a plain
//! method here, so the state can be driven and checked without a store
//! or a renderer attached.

use crate::domain::{Editable, Record, RecordId};

/// Operation kinds, used for fallback error messages and events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fetch,
    Add,
    Update,
    Delete,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Fetch => "fetch",
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// "Failed to fetch cards", "Failed to add card", ...
    pub fn fallback_message<R: Record>(&self) -> String {
        let noun = match self {
            Operation::Fetch => R::PLURAL,
            _ => R::SINGULAR,
        };
        format!("Failed to {} {}", self.label(), noun)
    }
}

/// State of one entity kind's list
#[derive(Debug, Clone, PartialEq)]
pub struct Container<R: Record> {
    items: Vec<R>,
    is_loading: bool,
    is_adding: bool,
    error: Option<String>,
}

impl<R: Record> Default for Container<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            is_adding: false,
            error: None,
        }
    }
}

impl<R: Record> Container<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Set while an add (or a ticket update) is in flight
    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn reject(&mut self, op: Operation, message: Option<String>) {
        self.error = Some(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| op.fallback_message::<R>()),
        );
    }

    // ==================== Fetch ====================

    pub fn fetch_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Replace the whole list; no merge with what was there
    pub fn fetch_fulfilled(&mut self, items: Vec<R>) {
        self.is_loading = false;
        self.items = items;
    }

    /// Items are left as they were before the fetch
    pub fn fetch_rejected(&mut self, message: Option<String>) {
        self.is_loading = false;
        self.reject(Operation::Fetch, message);
    }

    // ==================== Add ====================

    pub fn add_pending(&mut self) {
        self.is_adding = true;
        self.error = None;
    }

    /// New rows go to the front, matching the newest-first order
    pub fn add_fulfilled(&mut self, item: R) {
        self.is_adding = false;
        self.items.insert(0, item);
    }

    pub fn add_rejected(&mut self, message: Option<String>) {
        self.is_adding = false;
        self.reject(Operation::Add, message);
    }
}

impl<R: Editable> Container<R> {
    // ==================== Update ====================

    /// Updates share the adding flag: the edit dialog shows "Saving..."
    pub fn update_pending(&mut self) {
        self.is_adding = true;
        self.error = None;
    }

    /// Replace the matching entry in place; unknown ids are ignored
    pub fn update_fulfilled(&mut self, item: R) {
        self.is_adding = false;
        if let Some(slot) = self.items.iter_mut().find(|slot| slot.id() == item.id()) {
            *slot = item;
        }
    }

    pub fn update_rejected(&mut self, message: Option<String>) {
        self.is_adding = false;
        self.reject(Operation::Update, message);
    }

    // ==================== Delete ====================

    pub fn delete_pending(&mut self) {
        self.error = None;
    }

    pub fn delete_fulfilled(&mut self, id: &RecordId) {
        self.items.retain(|item| item.id() != id);
    }

    /// Nothing was removed up front, so nothing needs restoring
    pub fn delete_rejected(&mut self, message: Option<String>) {
        self.reject(Operation::Delete, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DashboardCard, Service, Ticket, TicketStatus};

    fn card(id: &str, title: &str) -> DashboardCard {
        DashboardCard {
            id: RecordId::from(id),
            title: title.to_string(),
            value: "1".to_string(),
            subtitle: String::new(),
            color: "text-foreground".to_string(),
            created_at: None,
        }
    }

    fn ticket(id: &str, status: TicketStatus) -> Ticket {
        Ticket {
            id: RecordId::from(id),
            customer: format!("customer {id}"),
            issue: "Broken link".to_string(),
            status,
            project: "Website".to_string(),
            date: "2024-05-01".to_string(),
            created_at: None,
        }
    }

    fn tickets(ids: &[&str]) -> Container<Ticket> {
        let mut state = Container::new();
        state.fetch_fulfilled(ids.iter().map(|id| ticket(id, TicketStatus::ToDo)).collect());
        state
    }

    fn ids(state: &Container<Ticket>) -> Vec<&str> {
        state.items().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn initial_state_is_empty() {
        let state: Container<Service> = Container::new();
        assert!(state.is_empty());
        assert!(!state.is_loading());
        assert!(!state.is_adding());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn fetch_pending_sets_loading_and_clears_error() {
        let mut state: Container<DashboardCard> = Container::new();
        state.add_rejected(Some("boom".to_string()));
        state.fetch_pending();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn fetch_fulfilled_replaces_list() {
        let mut state = Container::new();
        state.fetch_fulfilled(vec![card("c1", "old")]);
        state.fetch_pending();
        state.fetch_fulfilled(vec![card("c2", "a"), card("c3", "b")]);

        assert!(!state.is_loading());
        let titles: Vec<_> = state.items().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn failed_fetch_keeps_items() {
        let mut state = Container::new();
        state.fetch_fulfilled(vec![card("c1", "kept")]);
        let before = state.items().to_vec();

        state.fetch_pending();
        state.fetch_rejected(Some("network error".to_string()));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("network error"));
        assert_eq!(state.items(), before.as_slice());
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let mut cards: Container<DashboardCard> = Container::new();
        cards.fetch_rejected(None);
        assert_eq!(cards.error(), Some("Failed to fetch cards"));

        let mut services: Container<Service> = Container::new();
        services.add_rejected(Some(String::new()));
        assert_eq!(services.error(), Some("Failed to add service"));

        let mut state = tickets(&["t1"]);
        state.update_rejected(None);
        assert_eq!(state.error(), Some("Failed to update ticket"));
        state.delete_rejected(None);
        assert_eq!(state.error(), Some("Failed to delete ticket"));
    }

    #[test]
    fn add_prepends_and_clears_flags() {
        let mut state = Container::new();
        state.fetch_fulfilled(vec![card("c1", "existing")]);

        state.add_pending();
        assert!(state.is_adding());
        state.add_fulfilled(card("c2", "new"));

        assert!(!state.is_adding());
        assert_eq!(state.error(), None);
        assert_eq!(state.items()[0].id.as_str(), "c2");
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn racing_adds_last_resolved_is_first() {
        let mut state: Container<DashboardCard> = Container::new();
        state.add_pending();
        state.add_pending();
        state.add_fulfilled(card("c1", "first to resolve"));
        state.add_fulfilled(card("c2", "second to resolve"));

        assert_eq!(state.items()[0].id.as_str(), "c2");
        assert_eq!(state.items()[1].id.as_str(), "c1");
    }

    #[test]
    fn update_replaces_in_place() {
        let mut state = tickets(&["t1", "t2", "t3"]);
        let mut edited = ticket("t2", TicketStatus::Completed);
        edited.issue = "Fixed".to_string();

        state.update_pending();
        assert!(state.is_adding());
        state.update_fulfilled(edited.clone());

        assert!(!state.is_adding());
        assert_eq!(ids(&state), vec!["t1", "t2", "t3"]);
        assert_eq!(state.items()[1], edited);
        assert_eq!(state.items()[0], ticket("t1", TicketStatus::ToDo));
    }

    #[test]
    fn update_of_unknown_id_changes_nothing() {
        let mut state = tickets(&["t1"]);
        let before = state.items().to_vec();
        state.update_pending();
        state.update_fulfilled(ticket("t9", TicketStatus::Cancelled));
        assert_eq!(state.items(), before.as_slice());
    }

    #[test]
    fn delete_filters_and_keeps_order() {
        let mut state = tickets(&["t1", "t2", "t3"]);
        state.delete_pending();
        state.delete_fulfilled(&RecordId::from("t2"));
        assert_eq!(ids(&state), vec!["t1", "t3"]);
    }

    #[test]
    fn failed_delete_removes_nothing() {
        let mut state = tickets(&["t1", "t2"]);
        state.delete_pending();
        state.delete_rejected(Some("permission denied".to_string()));
        assert_eq!(ids(&state), vec!["t1", "t2"]);
        assert_eq!(state.error(), Some("permission denied"));
    }

    #[test]
    fn delete_pending_leaves_flags_alone() {
        let mut state = tickets(&["t1"]);
        state.fetch_pending();
        state.delete_pending();
        assert!(state.is_loading());
        assert!(!state.is_adding());
    }
}
