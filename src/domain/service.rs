//! Service - Service progress row

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVICE_COLOR, SERVICES_TABLE};
use crate::domain::record::{Record, RecordId};

/// A service with its completion progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    pub name: String,
    pub color: String,
    /// Expected in 0..=100, not enforced
    pub progress: i32,
    #[serde(rename = "formsSubmitted")]
    pub forms_submitted: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub color: String,
    pub progress: i32,
    #[serde(rename = "formsSubmitted")]
    pub forms_submitted: u32,
}

impl NewService {
    pub fn new(name: impl Into<String>, progress: i32, forms_submitted: u32) -> Self {
        Self {
            name: name.into(),
            color: DEFAULT_SERVICE_COLOR.to_string(),
            progress,
            forms_submitted,
        }
    }
}

impl Record for Service {
    type Draft = NewService;

    const TABLE: &'static str = SERVICES_TABLE;
    const SINGULAR: &'static str = "service";
    const PLURAL: &'static str = "services";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_submitted_uses_camel_case_column() {
        let draft = NewService::new("Web Development", 40, 12);
        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(json["formsSubmitted"], 12);
        assert_eq!(json["color"], "bg-orange-500");
        assert!(json.get("forms_submitted").is_none());
    }

    #[test]
    fn out_of_range_progress_is_kept_as_stored() {
        let service: Service = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "SEO",
            "color": "bg-orange-500",
            "progress": 140,
            "formsSubmitted": 3
        }))
        .expect("deserialize");
        assert_eq!(service.progress, 140);
        assert_eq!(service.id.as_str(), "7");
    }
}
