//! Ticket - Support ticket row

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TICKETS_TABLE;
use crate::domain::record::{Editable, Record, RecordId};

/// Ticket workflow status
///
/// Unknown values coming from the table are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    #[default]
    ToDo,
    Completed,
    Cancelled,
    Other(String),
}

impl TicketStatus {
    /// Statuses offered by the ticket form
    pub const CHOICES: [TicketStatus; 3] = [
        TicketStatus::ToDo,
        TicketStatus::Completed,
        TicketStatus::Cancelled,
    ];

    pub fn label(&self) -> &str {
        match self {
            TicketStatus::ToDo => "To do",
            TicketStatus::Completed => "Completed",
            TicketStatus::Cancelled => "Cancelled",
            TicketStatus::Other(s) => s,
        }
    }

    /// Style tag of the status dot in the ticket table
    pub fn indicator(&self) -> &'static str {
        match self {
            TicketStatus::ToDo => "bg-cyan-500",
            TicketStatus::Completed => "bg-green-500",
            TicketStatus::Cancelled => "bg-red-500",
            TicketStatus::Other(_) => "bg-neutral-500",
        }
    }
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "To do" => TicketStatus::ToDo,
            "Completed" => TicketStatus::Completed,
            "Cancelled" => TicketStatus::Cancelled,
            _ => TicketStatus::Other(s),
        }
    }
}

impl From<&str> for TicketStatus {
    fn from(s: &str) -> Self {
        TicketStatus::from(s.to_string())
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Other(s) => s,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A support ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: RecordId,
    pub customer: String,
    pub issue: String,
    pub status: TicketStatus,
    pub project: String,
    /// ISO date (YYYY-MM-DD), kept as entered
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Copy of the editable fields, used to prefill the edit form
    pub fn to_draft(&self) -> NewTicket {
        NewTicket {
            customer: self.customer.clone(),
            issue: self.issue.clone(),
            status: self.status.clone(),
            project: self.project.clone(),
            date: self.date.clone(),
        }
    }

    /// Same ticket with its editable fields replaced
    pub fn with_draft(&self, draft: NewTicket) -> Ticket {
        Ticket {
            id: self.id.clone(),
            customer: draft.customer,
            issue: draft.issue,
            status: draft.status,
            project: draft.project,
            date: draft.date,
            created_at: self.created_at,
        }
    }
}

/// Insert payload for a ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    pub customer: String,
    pub issue: String,
    pub status: TicketStatus,
    pub project: String,
    pub date: String,
}

impl Default for NewTicket {
    /// Blank ticket dated today with status "To do"
    fn default() -> Self {
        Self {
            customer: String::new(),
            issue: String::new(),
            status: TicketStatus::ToDo,
            project: String::new(),
            date: Utc::now().date_naive().to_string(),
        }
    }
}

impl Record for Ticket {
    type Draft = NewTicket;

    const TABLE: &'static str = TICKETS_TABLE;
    const SINGULAR: &'static str = "ticket";
    const PLURAL: &'static str = "tickets";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Editable for Ticket {}
