//! tracker::traits
//!
//! Trait and types for the remote work tracking service.
//!
//! # Design
//!
//! The trait is async because every call is network I/O. Commands hold a
//! `&dyn WorkItemTracker` and never see transport details.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from tracker operations.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested work item was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),
}

/// A work item as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: i64,
    #[serde(default)]
    pub rev: i64,
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub url: String,
}

impl WorkItem {
    /// A string field, or the `displayName` of an identity field.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        match self.fields.get(name)? {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Object(map) => map.get("displayName").and_then(|v| v.as_str()),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.field_str("System.Title")
    }

    pub fn state(&self) -> Option<&str> {
        self.field_str("System.State")
    }

    pub fn work_item_type(&self) -> Option<&str> {
        self.field_str("System.WorkItemType")
    }

    pub fn assigned_to(&self) -> Option<&str> {
        self.field_str("System.AssignedTo")
    }
}

/// Remote work tracking operations.
#[async_trait]
pub trait WorkItemTracker: Send + Sync {
    /// Short name for messages.
    fn name(&self) -> &'static str;

    /// Fetch one work item by id.
    async fn get_work_item(&self, id: i64) -> Result<WorkItem, TrackerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_helpers() {
        let item: WorkItem = serde_json::from_value(json!({
            "id": 7,
            "rev": 3,
            "fields": {
                "System.Title": "Crash on save",
                "System.State": "Active",
                "System.WorkItemType": "Bug",
                "System.AssignedTo": { "displayName": "Sam Doe", "uniqueName": "sam@example.test" }
            },
            "url": "https://dev.example.test/_apis/wit/workItems/7"
        }))
        .unwrap();

        assert_eq!(item.title(), Some("Crash on save"));
        assert_eq!(item.state(), Some("Active"));
        assert_eq!(item.work_item_type(), Some("Bug"));
        assert_eq!(item.assigned_to(), Some("Sam Doe"));
    }

    #[test]
    fn missing_fields_default() {
        let item: WorkItem = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(item.rev, 0);
        assert!(item.title().is_none());
    }
}
