//! StateEvent - Emitted after every container transition
//!
//! A renderer subscribes to these and re-reads the container snapshot
//! for the table named in the event.

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::state::container::Operation;

/// Outcome stage of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Fulfilled,
    Rejected,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Pending => "pending",
            Phase::Fulfilled => "fulfilled",
            Phase::Rejected => "rejected",
        }
    }
}

/// Identifier shared by the pending and settled events of one request
pub type RequestId = Uuid;

/// A container transition
#[derive(Debug, Clone)]
pub struct StateEvent {
    /// Table whose container changed
    pub table: &'static str,
    pub operation: Operation,
    pub phase: Phase,
    pub request_id: RequestId,
    /// Error now held by the container, if any
    pub error: Option<String>,
    pub timestamp: DateTime<Local>,
}

impl StateEvent {
    pub fn new(
        table: &'static str,
        operation: Operation,
        phase: Phase,
        request_id: RequestId,
        error: Option<String>,
    ) -> Self {
        Self {
            table,
            operation,
            phase,
            request_id,
            error,
            timestamp: Local::now(),
        }
    }

    /// "tickets/update/rejected"
    pub fn action_type(&self) -> String {
        format!(
            "{}/{}/{}",
            self.table,
            self.operation.label(),
            self.phase.label()
        )
    }

    pub fn is_settled(&self) -> bool {
        self.phase != Phase::Pending
    }
}
