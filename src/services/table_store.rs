//! Table Store
//!
//! The seam between the state containers and the hosted table API. Every
//! call is one request/response pair; the caller decides ordering and
//! what to do with a failure.

use std::future::Future;
use std::sync::Arc;

use crate::domain::{Editable, Record, RecordId};
use crate::error::Result;

/// Remote persistence exposing select/insert/update/delete per table
pub trait TableStore: Send + Sync + 'static {
    /// All rows of `R::TABLE`, newest first
    fn select_all<R: Record>(&self) -> impl Future<Output = Result<Vec<R>>> + Send;

    /// Insert one row and return it with its store-assigned id
    fn insert<R: Record>(&self, draft: &R::Draft) -> impl Future<Output = Result<R>> + Send;

    /// Replace the row matching `record.id()` and return the stored row
    fn update<R: Editable>(&self, record: &R) -> impl Future<Output = Result<R>> + Send;

    /// Delete the row matching `id`; the id is echoed back on success
    fn delete<R: Editable>(&self, id: &RecordId) -> impl Future<Output = Result<RecordId>> + Send;
}

impl<S: TableStore> TableStore for Arc<S> {
    fn select_all<R: Record>(&self) -> impl Future<Output = Result<Vec<R>>> + Send {
        (**self).select_all::<R>()
    }

    fn insert<R: Record>(&self, draft: &R::Draft) -> impl Future<Output = Result<R>> + Send {
        (**self).insert::<R>(draft)
    }

    fn update<R: Editable>(&self, record: &R) -> impl Future<Output = Result<R>> + Send {
        (**self).update(record)
    }

    fn delete<R: Editable>(&self, id: &RecordId) -> impl Future<Output = Result<RecordId>> + Send {
        (**self).delete::<R>(id)
    }
}
