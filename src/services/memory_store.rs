//! In-Memory Table Store
//!
//! Keeps each table as a list of JSON rows in insertion order and answers
//! selects newest first, the way the hosted store orders by `created_at`.
//! Ids are assigned here, never by the caller. Failures can be queued per
//! table to exercise the error paths of the containers.

use std::collections::{HashMap, VecDeque};

use chrono::{Duration, Utc};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::constants::ORDER_COLUMN;
use crate::domain::{
    DashboardCard, Editable, NewCard, NewService, NewTicket, Record, RecordId, Service, Ticket,
    TicketStatus,
};
use crate::error::{Error, Result};
use crate::services::table_store::TableStore;

/// Message the hosted store returns when a single-row write matches nothing
const NO_ROWS_MESSAGE: &str = "JSON object requested, multiple (or no) rows returned";

/// How the store assigns ids to inserted rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Random UUID v4
    #[default]
    Uuid,
    /// First letter of the table plus a per-table counter ("c1", "t2")
    Sequential,
}

#[derive(Debug, Default)]
struct Tables {
    rows: HashMap<&'static str, Vec<Value>>,
    counters: HashMap<&'static str, u64>,
    failures: HashMap<&'static str, VecDeque<Option<String>>>,
}

/// Table store living entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryTableStore {
    ids: IdStrategy,
    tables: Mutex<Tables>,
}

impl MemoryTableStore {
    /// Empty store with UUID ids
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with readable sequential ids
    pub fn sequential() -> Self {
        Self {
            ids: IdStrategy::Sequential,
            ..Default::default()
        }
    }

    /// Store seeded with a small sample dashboard
    pub fn demo() -> Result<Self> {
        let store = Self::sequential();

        for card in [
            NewCard::new("Total Clients", "120", "New Prospects"),
            NewCard::new("Open Tickets", "34", "Awaiting Response"),
            NewCard::new("Revenue", "$48,200", "This Month"),
        ] {
            store.insert_row::<DashboardCard>(&card)?;
        }

        for service in [
            NewService::new("Web Development", 72, 18),
            NewService::new("SEO Audit", 45, 9),
            NewService::new("Brand Design", 90, 27),
        ] {
            store.insert_row::<Service>(&service)?;
        }

        for (customer, issue, status, project, date) in [
            ("Jacob Jones", "Login page not loading", "To do", "Client Portal", "2024-05-02"),
            ("Kristin Watson", "Invoice totals mismatch", "Completed", "Billing", "2024-05-04"),
            ("Cody Fisher", "Request to close account", "Cancelled", "Accounts", "2024-05-06"),
        ] {
            store.insert_row::<Ticket>(&NewTicket {
                customer: customer.to_string(),
                issue: issue.to_string(),
                status: TicketStatus::from(status),
                project: project.to_string(),
                date: date.to_string(),
            })?;
        }

        Ok(store)
    }

    /// Make the next request against `table` fail with `message`
    ///
    /// `None` simulates a failure that carries no message at all.
    pub fn fail_next(&self, table: &'static str, message: Option<&str>) {
        self.tables
            .lock()
            .failures
            .entry(table)
            .or_default()
            .push_back(message.map(str::to_string));
    }

    /// Number of rows currently stored in `table`
    pub fn row_count(&self, table: &str) -> usize {
        self.tables.lock().rows.get(table).map_or(0, Vec::len)
    }

    fn take_failure(tables: &mut Tables, table: &'static str) -> Result<()> {
        match tables.failures.get_mut(table).and_then(VecDeque::pop_front) {
            Some(message) => Err(Error::Store {
                table: table.to_string(),
                status: None,
                message,
            }),
            None => Ok(()),
        }
    }

    fn next_id(&self, tables: &mut Tables, table: &'static str) -> String {
        match self.ids {
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
            IdStrategy::Sequential => {
                let counter = tables.counters.entry(table).or_insert(0);
                *counter += 1;
                let prefix = table.chars().next().unwrap_or('r');
                format!("{prefix}{counter}")
            }
        }
    }

    fn to_object<T: serde::Serialize>(value: &T) -> Result<Map<String, Value>> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Invalid {
                message: format!("Row must serialize to an object, got {other}"),
            }),
        }
    }

    fn select_rows<R: Record>(&self) -> Result<Vec<R>> {
        let mut tables = self.tables.lock();
        Self::take_failure(&mut tables, R::TABLE)?;

        let rows = tables.rows.get(R::TABLE).map(Vec::as_slice).unwrap_or(&[]);
        rows.iter()
            .rev()
            .map(|row| Ok(serde_json::from_value(row.clone())?))
            .collect()
    }

    fn insert_row<R: Record>(&self, draft: &R::Draft) -> Result<R> {
        let mut tables = self.tables.lock();
        Self::take_failure(&mut tables, R::TABLE)?;

        let mut row = Self::to_object(draft)?;
        let id = self.next_id(&mut tables, R::TABLE);
        // Rows inserted in the same instant still sort by insertion order.
        let position = tables.rows.get(R::TABLE).map_or(0, Vec::len) as i64;
        let created_at = Utc::now() + Duration::microseconds(position);
        row.insert("id".to_string(), Value::String(id));
        row.insert(
            ORDER_COLUMN.to_string(),
            serde_json::to_value(created_at)?,
        );

        let row = Value::Object(row);
        let record: R = serde_json::from_value(row.clone())?;
        tables.rows.entry(R::TABLE).or_default().push(row);

        debug!(table = R::TABLE, id = %record.id(), "Inserted row in memory");
        Ok(record)
    }

    fn update_row<R: Editable>(&self, record: &R) -> Result<R> {
        let mut tables = self.tables.lock();
        Self::take_failure(&mut tables, R::TABLE)?;

        let id = Value::String(record.id().to_string());
        let mut incoming = Self::to_object(record)?;

        let Some(row) = tables
            .rows
            .get_mut(R::TABLE)
            .and_then(|rows| rows.iter_mut().find(|row| row.get("id") == Some(&id)))
        else {
            return Err(Error::Store {
                table: R::TABLE.to_string(),
                status: Some(406),
                message: Some(NO_ROWS_MESSAGE.to_string()),
            });
        };

        if let Some(created_at) = row.get(ORDER_COLUMN) {
            incoming
                .entry(ORDER_COLUMN.to_string())
                .or_insert_with(|| created_at.clone());
        }
        *row = Value::Object(incoming);
        Ok(serde_json::from_value(row.clone())?)
    }

    fn delete_row<R: Editable>(&self, id: &RecordId) -> Result<RecordId> {
        let mut tables = self.tables.lock();
        Self::take_failure(&mut tables, R::TABLE)?;

        let key = Value::String(id.to_string());
        if let Some(rows) = tables.rows.get_mut(R::TABLE) {
            rows.retain(|row| row.get("id") != Some(&key));
        }
        Ok(id.clone())
    }
}

impl TableStore for MemoryTableStore {
    async fn select_all<R: Record>(&self) -> Result<Vec<R>> {
        self.select_rows()
    }

    async fn insert<R: Record>(&self, draft: &R::Draft) -> Result<R> {
        self.insert_row::<R>(draft)
    }

    async fn update<R: Editable>(&self, record: &R) -> Result<R> {
        self.update_row(record)
    }

    async fn delete<R: Editable>(&self, id: &RecordId) -> Result<RecordId> {
        self.delete_row::<R>(id)
    }
}
