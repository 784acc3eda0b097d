//! inputs::catalog
//!
//! Descriptors shared across commands.

use super::descriptor::{ArgDescriptor, ArgKind};

pub const SERVICE_URL: &str = "service-url";
pub const TOKEN: &str = "token";
pub const WORK_ITEM_ID: &str = "work-item-id";
pub const PROJECT: &str = "project";

/// Base URL of the work tracking collection.
pub fn service_url() -> ArgDescriptor {
    ArgDescriptor::new(SERVICE_URL, "collection URL", ArgKind::Url)
}

/// Personal access token; never echoed.
pub fn token() -> ArgDescriptor {
    ArgDescriptor::new(TOKEN, "personal access token", ArgKind::String).masked()
}

pub fn work_item_id() -> ArgDescriptor {
    ArgDescriptor::new(WORK_ITEM_ID, "work item id", ArgKind::Integer)
}

pub fn project() -> ArgDescriptor {
    ArgDescriptor::new(PROJECT, "project name", ArgKind::String)
}

/// Names of masked catalog arguments, for redacting display output.
pub fn is_masked(name: &str) -> bool {
    [service_url(), token(), work_item_id(), project()]
        .iter()
        .any(|d| d.name() == name && d.is_masked())
}
