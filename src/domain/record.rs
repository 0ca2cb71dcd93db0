//! Record - Shared shape of every dashboard row
//!
//! A record is one row of a remote table with a store-assigned id. The
//! capability a container exposes (read/add only, or also update/delete)
//! is decided by which of these traits the row type implements.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Store-assigned row identifier
///
/// Tables may use text/uuid or integer keys; both are kept as text on
/// the client side.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct RecordId(pub Arc<str>);

impl RecordId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => RecordId::from(s),
            RawId::Int(n) => RecordId::from(n.to_string()),
        })
    }
}

/// A row of one dashboard table
pub trait Record:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Field map sent on insert (everything except the id and timestamp)
    type Draft: Clone + fmt::Debug + Serialize + Send + Sync + 'static;

    /// Remote table name
    const TABLE: &'static str;
    /// Label used in fallback messages ("Failed to add card")
    const SINGULAR: &'static str;
    /// Label used in fallback messages ("Failed to fetch cards")
    const PLURAL: &'static str;

    fn id(&self) -> &RecordId;
}

/// Rows that can be updated and deleted after creation
///
/// Only tickets carry this capability; cards and services are
/// create/read only.
pub trait Editable: Record {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_text_and_integer_keys() {
        let text: RecordId = serde_json::from_str("\"c1\"").expect("text id");
        assert_eq!(text.as_str(), "c1");

        let int: RecordId = serde_json::from_str("42").expect("integer id");
        assert_eq!(int.as_str(), "42");
    }

    #[test]
    fn record_id_serializes_as_text() {
        let id = RecordId::from("t1");
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "\"t1\"");
    }
}
