//! Cards Controller
//!
//! Add-card dialog state and dispatch into the cards container.

use tracing::info;

use crate::domain::{DashboardCard, NewCard};
use crate::error::Result;
use crate::features::form::{required, unknown_field};
use crate::services::TableStore;
use crate::state::Slice;

/// "Add New Dashboard Card" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub open: bool,
    pub title: String,
    pub value: String,
    pub subtitle: String,
}

impl CardForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Set an input by its field name
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            "title" => self.title = value,
            "value" => self.value = value,
            "subtitle" => self.subtitle = value,
            other => return Err(unknown_field("card", other)),
        }
        Ok(())
    }

    /// Insert payload; every input is required
    pub fn to_draft(&self) -> Result<NewCard> {
        Ok(NewCard::new(
            required("title", &self.title)?,
            required("value", &self.value)?,
            required("subtitle", &self.subtitle)?,
        ))
    }

    /// Clear the inputs and close the dialog
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Cards section controller
pub struct CardsController<S: TableStore> {
    cards: Slice<DashboardCard, S>,
}

impl<S: TableStore> CardsController<S> {
    pub fn new(cards: Slice<DashboardCard, S>) -> Self {
        Self { cards }
    }

    /// Submit the dialog; it is reset only once the card is stored
    pub async fn submit(&self, form: &mut CardForm) -> Result<DashboardCard> {
        let draft = form.to_draft()?;
        let card = self.cards.add(draft).await?;
        info!(id = %card.id, title = %card.title, "Card added from form");
        form.reset();
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CARDS_TABLE;
    use crate::services::MemoryTableStore;
    use std::sync::Arc;

    fn controller(store: &Arc<MemoryTableStore>) -> CardsController<MemoryTableStore> {
        let (tx, _rx) = crossbeam_channel::unbounded();
        CardsController::new(Slice::new(store.clone(), tx))
    }

    fn filled_form() -> CardForm {
        let mut form = CardForm::default();
        form.open();
        form.set_field("title", "Total Clients").expect("title");
        form.set_field("value", "120").expect("value");
        form.set_field("subtitle", "New Prospects").expect("subtitle");
        form
    }

    #[tokio::test]
    async fn submit_adds_card_with_default_color_and_closes() {
        let store = Arc::new(MemoryTableStore::sequential());
        let cards = controller(&store);
        let mut form = filled_form();

        let card = cards.submit(&mut form).await.expect("submit");
        assert_eq!(card.color, "text-foreground");
        assert!(!form.open);
        assert!(form.title.is_empty());
    }

    #[tokio::test]
    async fn failed_submit_keeps_dialog_open() {
        let store = Arc::new(MemoryTableStore::sequential());
        let cards = controller(&store);
        let mut form = filled_form();

        store.fail_next(CARDS_TABLE, Some("insert failed"));
        assert!(cards.submit(&mut form).await.is_err());
        assert!(form.open);
        assert_eq!(form.title, "Total Clients");
    }

    #[tokio::test]
    async fn missing_field_is_not_dispatched() {
        let store = Arc::new(MemoryTableStore::sequential());
        let cards = controller(&store);
        let mut form = filled_form();
        form.set_field("value", "").expect("value");

        assert!(cards.submit(&mut form).await.is_err());
        assert_eq!(store.row_count(CARDS_TABLE), 0);
        assert_eq!(cards.cards.snapshot().error(), None);
    }

    #[tokio::test]
    async fn inputs_are_stored_as_typed() {
        let store = Arc::new(MemoryTableStore::sequential());
        let cards = controller(&store);
        let mut form = filled_form();
        form.set_field("title", "  Total Clients ").expect("title");
        form.set_field("subtitle", " ").expect("subtitle");

        let card = cards.submit(&mut form).await.expect("submit");
        assert_eq!(card.title, "  Total Clients ");
        assert_eq!(card.subtitle, " ");
        assert_eq!(cards.cards.snapshot().items()[0].title, "  Total Clients ");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = CardForm::default();
        assert!(form.set_field("color", "red").is_err());
    }
}
