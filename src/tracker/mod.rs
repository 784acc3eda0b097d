//! tracker
//!
//! Client side of the remote work tracking service.
//!
//! - [`HttpTracker`]: REST client used by the CLI
//! - [`MockTracker`](mock::MockTracker): in-memory implementation for tests

pub mod http;
pub mod mock;
mod traits;

pub use http::HttpTracker;
pub use traits::{TrackerError, WorkItem, WorkItemTracker};
