//! DashboardCard - Summary card shown at the top of the dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CARDS_TABLE, DEFAULT_CARD_COLOR};
use crate::domain::record::{Record, RecordId};

/// A summary card ("Total Clients: 120")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCard {
    pub id: RecordId,
    pub title: String,
    pub value: String,
    pub subtitle: String,
    /// Style tag applied to the value
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCard {
    pub title: String,
    pub value: String,
    pub subtitle: String,
    pub color: String,
}

impl NewCard {
    /// Card as submitted by the add form, with the default style tag
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: subtitle.into(),
            color: DEFAULT_CARD_COLOR.to_string(),
        }
    }
}

impl Record for DashboardCard {
    type Draft = NewCard;

    const TABLE: &'static str = CARDS_TABLE;
    const SINGULAR: &'static str = "card";
    const PLURAL: &'static str = "cards";

    fn id(&self) -> &RecordId {
        &self.id
    }
}
