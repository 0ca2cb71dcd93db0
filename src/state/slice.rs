//! Slice - A container wired to the table store
//!
//! Each operation applies its pending transition, awaits the store, then
//! applies fulfilled or rejected. The lock is only taken for the
//! transitions themselves and never across the await. The store result is
//! also returned so the caller can react (close a dialog on success).
//!
//! ```text
//! add(draft) ──► add_pending ──► store.insert ──┬─► add_fulfilled(row)
//!                                               └─► add_rejected(message)
//! ```

use std::sync::Arc;

use crossbeam_channel::Sender;
use parking_lot::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{Editable, Record, RecordId};
use crate::error::{Error, Result};
use crate::eventing::{Phase, RequestId, StateEvent};
use crate::services::TableStore;
use crate::state::container::{Container, Operation};

/// Container plus the store it talks to
pub struct Slice<R: Record, S: TableStore> {
    state: Arc<RwLock<Container<R>>>,
    store: Arc<S>,
    events: Sender<StateEvent>,
}

impl<R: Record, S: TableStore> Slice<R, S> {
    pub fn new(store: Arc<S>, events: Sender<StateEvent>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Container::new())),
            store,
            events,
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> Container<R> {
        self.state.read().clone()
    }

    /// Read the current state without cloning it
    pub fn with_state<T>(&self, f: impl FnOnce(&Container<R>) -> T) -> T {
        let state = self.state.read();
        f(&*state)
    }

    fn apply(
        &self,
        operation: Operation,
        phase: Phase,
        request_id: RequestId,
        transition: impl FnOnce(&mut Container<R>),
    ) {
        let error = {
            let mut state = self.state.write();
            transition(&mut *state);
            state.error().map(str::to_string)
        };

        debug!(
            table = R::TABLE,
            op = operation.label(),
            phase = phase.label(),
            %request_id,
            "Container transition"
        );
        let _ = self
            .events
            .send(StateEvent::new(R::TABLE, operation, phase, request_id, error));
    }

    fn fail(&self, operation: Operation, request_id: RequestId, err: &Error) {
        warn!(
            table = R::TABLE,
            op = operation.label(),
            %request_id,
            "Operation failed: {err}"
        );
    }

    /// Load every row, newest first, replacing the list
    pub async fn fetch_all(&self) -> Result<Vec<R>> {
        let request_id = Uuid::new_v4();
        self.apply(Operation::Fetch, Phase::Pending, request_id, |s| {
            s.fetch_pending()
        });

        match self.store.select_all::<R>().await {
            Ok(items) => {
                info!(table = R::TABLE, count = items.len(), "Fetched {}", R::PLURAL);
                let result = items.clone();
                self.apply(Operation::Fetch, Phase::Fulfilled, request_id, |s| {
                    s.fetch_fulfilled(items)
                });
                Ok(result)
            }
            Err(err) => {
                self.fail(Operation::Fetch, request_id, &err);
                let message = err.store_message();
                self.apply(Operation::Fetch, Phase::Rejected, request_id, |s| {
                    s.fetch_rejected(message)
                });
                Err(err)
            }
        }
    }

    /// Insert one row and put the stored version at the front
    pub async fn add(&self, draft: R::Draft) -> Result<R> {
        let request_id = Uuid::new_v4();
        self.apply(Operation::Add, Phase::Pending, request_id, |s| s.add_pending());

        match self.store.insert::<R>(&draft).await {
            Ok(item) => {
                info!(table = R::TABLE, id = %item.id(), "Added {}", R::SINGULAR);
                let result = item.clone();
                self.apply(Operation::Add, Phase::Fulfilled, request_id, |s| {
                    s.add_fulfilled(item)
                });
                Ok(result)
            }
            Err(err) => {
                self.fail(Operation::Add, request_id, &err);
                let message = err.store_message();
                self.apply(Operation::Add, Phase::Rejected, request_id, |s| {
                    s.add_rejected(message)
                });
                Err(err)
            }
        }
    }
}

impl<R: Editable, S: TableStore> Slice<R, S> {
    /// Replace a row; the local entry is swapped in place once stored
    pub async fn update(&self, record: R) -> Result<R> {
        let request_id = Uuid::new_v4();
        self.apply(Operation::Update, Phase::Pending, request_id, |s| {
            s.update_pending()
        });

        match self.store.update(&record).await {
            Ok(item) => {
                info!(table = R::TABLE, id = %item.id(), "Updated {}", R::SINGULAR);
                let result = item.clone();
                self.apply(Operation::Update, Phase::Fulfilled, request_id, |s| {
                    s.update_fulfilled(item)
                });
                Ok(result)
            }
            Err(err) => {
                self.fail(Operation::Update, request_id, &err);
                let message = err.store_message();
                self.apply(Operation::Update, Phase::Rejected, request_id, |s| {
                    s.update_rejected(message)
                });
                Err(err)
            }
        }
    }

    /// Delete a row; it leaves the local list only after the store confirms
    pub async fn delete(&self, id: RecordId) -> Result<RecordId> {
        let request_id = Uuid::new_v4();
        self.apply(Operation::Delete, Phase::Pending, request_id, |s| {
            s.delete_pending()
        });

        match self.store.delete::<R>(&id).await {
            Ok(deleted) => {
                info!(table = R::TABLE, id = %deleted, "Deleted {}", R::SINGULAR);
                self.apply(Operation::Delete, Phase::Fulfilled, request_id, |s| {
                    s.delete_fulfilled(&deleted)
                });
                Ok(deleted)
            }
            Err(err) => {
                self.fail(Operation::Delete, request_id, &err);
                let message = err.store_message();
                self.apply(Operation::Delete, Phase::Rejected, request_id, |s| {
                    s.delete_rejected(message)
                });
                Err(err)
            }
        }
    }
}

impl<R: Record, S: TableStore> Clone for Slice<R, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            store: self.store.clone(),
            events: self.events.clone(),
        }
    }
}

impl<R: Record, S: TableStore> std::fmt::Debug for Slice<R, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Slice")
            .field("table", &R::TABLE)
            .field("items", &state.len())
            .field("is_loading", &state.is_loading())
            .field("is_adding", &state.is_adding())
            .field("error", &state.error())
            .finish()
    }
}
