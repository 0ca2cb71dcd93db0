//! Tickets Controller
//!
//! One dialog serves both "Add New Ticket" and "Edit Ticket"; submitting
//! dispatches an add or an update depending on how it was opened. Delete
//! goes straight to the container.

use tracing::info;

use crate::domain::{NewTicket, RecordId, Ticket, TicketStatus};
use crate::error::Result;
use crate::features::form::{required, unknown_field};
use crate::services::TableStore;
use crate::state::Slice;

/// How the ticket dialog was opened
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TicketFormMode {
    #[default]
    Add,
    /// Editing this ticket; its id and timestamp are kept on submit
    Edit(Ticket),
}

/// Add/edit ticket dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketForm {
    pub open: bool,
    pub mode: TicketFormMode,
    pub draft: NewTicket,
}

impl TicketForm {
    /// Open blank: status "To do", dated today
    pub fn open_add(&mut self) {
        self.mode = TicketFormMode::Add;
        self.draft = NewTicket::default();
        self.open = true;
    }

    /// Open prefilled with `ticket`
    pub fn open_edit(&mut self, ticket: &Ticket) {
        self.mode = TicketFormMode::Edit(ticket.clone());
        self.draft = ticket.to_draft();
        self.open = true;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, TicketFormMode::Edit(_))
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "customer" => self.draft.customer = value.to_string(),
            "issue" => self.draft.issue = value.to_string(),
            "project" => self.draft.project = value.to_string(),
            "date" => self.draft.date = value.to_string(),
            "status" => self.draft.status = TicketStatus::from(value),
            other => return Err(unknown_field("ticket", other)),
        }
        Ok(())
    }

    pub fn set_status(&mut self, status: TicketStatus) {
        self.draft.status = status;
    }

    /// Submit button label for the current state
    pub fn submit_label(&self, saving: bool) -> &'static str {
        match (saving, self.is_editing()) {
            (true, _) => "Saving...",
            (false, true) => "Update Ticket",
            (false, false) => "Add Ticket",
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Ticket"
        } else {
            "Add New Ticket"
        }
    }

    fn checked_draft(&self) -> Result<NewTicket> {
        Ok(NewTicket {
            customer: required("customer", &self.draft.customer)?,
            issue: required("issue", &self.draft.issue)?,
            status: self.draft.status.clone(),
            project: required("project", &self.draft.project)?,
            date: required("date", &self.draft.date)?,
        })
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Tickets section controller
pub struct TicketsController<S: TableStore> {
    tickets: Slice<Ticket, S>,
}

impl<S: TableStore> TicketsController<S> {
    pub fn new(tickets: Slice<Ticket, S>) -> Self {
        Self { tickets }
    }

    /// Add or update from the dialog; it closes only on success
    pub async fn submit(&self, form: &mut TicketForm) -> Result<Ticket> {
        let draft = form.checked_draft()?;
        let saved = match &form.mode {
            TicketFormMode::Add => self.tickets.add(draft).await?,
            TicketFormMode::Edit(original) => self.tickets.update(original.with_draft(draft)).await?,
        };
        info!(id = %saved.id, editing = form.is_editing(), "Ticket saved from form");
        form.close();
        Ok(saved)
    }

    pub async fn delete(&self, id: RecordId) -> Result<RecordId> {
        self.tickets.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TICKETS_TABLE;
    use crate::services::MemoryTableStore;
    use std::sync::Arc;

    fn setup() -> (Arc<MemoryTableStore>, Slice<Ticket, MemoryTableStore>, TicketsController<MemoryTableStore>) {
        let store = Arc::new(MemoryTableStore::sequential());
        let (tx, _rx) = crossbeam_channel::unbounded();
        let slice = Slice::new(store.clone(), tx);
        let controller = TicketsController::new(slice.clone());
        (store, slice, controller)
    }

    fn fill(form: &mut TicketForm, customer: &str) {
        form.set_field("customer", customer).expect("customer");
        form.set_field("issue", "Password reset email missing").expect("issue");
        form.set_field("project", "Client Portal").expect("project");
    }

    #[tokio::test]
    async fn add_then_edit_through_one_dialog() {
        let (_store, slice, controller) = setup();
        let mut form = TicketForm::default();

        form.open_add();
        assert_eq!(form.title(), "Add New Ticket");
        fill(&mut form, "Jacob Jones");
        let added = controller.submit(&mut form).await.expect("add");
        assert_eq!(added.status, TicketStatus::ToDo);
        assert!(!form.open);

        form.open_edit(&added);
        assert_eq!(form.submit_label(false), "Update Ticket");
        form.set_status(TicketStatus::Completed);
        let updated = controller.submit(&mut form).await.expect("update");

        assert_eq!(updated.id, added.id);
        let state = slice.snapshot();
        assert_eq!(state.len(), 1);
        assert_eq!(state.items()[0].status, TicketStatus::Completed);
    }

    #[tokio::test]
    async fn failed_update_keeps_dialog_open() {
        let (store, _slice, controller) = setup();
        let mut form = TicketForm::default();
        form.open_add();
        fill(&mut form, "Kristin Watson");
        let added = controller.submit(&mut form).await.expect("add");

        form.open_edit(&added);
        form.set_field("status", "Cancelled").expect("status");
        store.fail_next(TICKETS_TABLE, Some("network error"));

        assert!(controller.submit(&mut form).await.is_err());
        assert!(form.open);
        assert!(form.is_editing());
    }

    #[tokio::test]
    async fn delete_goes_through_container() {
        let (store, slice, controller) = setup();
        let mut form = TicketForm::default();
        form.open_add();
        fill(&mut form, "Cody Fisher");
        let added = controller.submit(&mut form).await.expect("add");

        controller.delete(added.id.clone()).await.expect("delete");
        assert!(slice.snapshot().is_empty());
        assert_eq!(store.row_count(TICKETS_TABLE), 0);
    }

    #[test]
    fn blank_required_field_blocks_submit() {
        let mut form = TicketForm::default();
        form.open_add();
        form.set_field("customer", "Jacob").expect("customer");
        assert!(form.checked_draft().is_err());
        form.set_field("issue", "Broken link").expect("issue");
        form.set_field("project", "").expect("project");
        assert!(form.checked_draft().is_err());
    }

    #[test]
    fn saving_label_wins() {
        let mut form = TicketForm::default();
        form.open_add();
        assert_eq!(form.submit_label(true), "Saving...");
        assert_eq!(form.submit_label(false), "Add Ticket");
    }
}
