//! tracker::mock
//!
//! In-memory tracker for deterministic testing.
//!
//! # Example
//!
//! ```
//! use witx::tracker::mock::MockTracker;
//! use witx::tracker::WorkItemTracker;
//!
//! # tokio_test::block_on(async {
//! let tracker = MockTracker::new();
//! tracker.add_item(7, "Crash on save", "Active");
//!
//! let item = tracker.get_work_item(7).await.unwrap();
//! assert_eq!(item.title(), Some("Crash on save"));
//! assert_eq!(tracker.requested_ids(), vec![7]);
//! # });
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::traits::{TrackerError, WorkItem, WorkItemTracker};

/// Mock tracker for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockTracker {
    inner: Arc<Mutex<MockTrackerInner>>,
}

#[derive(Debug, Default)]
struct MockTrackerInner {
    items: HashMap<i64, WorkItem>,
    fail_with: Option<TrackerError>,
    requested: Vec<i64>,
}

impl MockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockTrackerInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store a work item with a title and state.
    pub fn add_item(&self, id: i64, title: &str, state: &str) {
        let mut fields = BTreeMap::new();
        fields.insert("System.Title".to_string(), title.into());
        fields.insert("System.State".to_string(), state.into());
        self.insert(WorkItem {
            id,
            rev: 1,
            fields,
            url: format!("mock://workitems/{}", id),
        });
    }

    pub fn insert(&self, item: WorkItem) {
        self.lock().items.insert(item.id, item);
    }

    /// Fail every subsequent call with `error`.
    pub fn fail_with(&self, error: TrackerError) {
        self.lock().fail_with = Some(error);
    }

    /// Ids requested so far, in order.
    pub fn requested_ids(&self) -> Vec<i64> {
        self.lock().requested.clone()
    }
}

#[async_trait]
impl WorkItemTracker for MockTracker {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn get_work_item(&self, id: i64) -> Result<WorkItem, TrackerError> {
        let mut inner = self.lock();
        inner.requested.push(id);
        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }
        inner
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("work item {}", id)))
    }
}
