//! core
//!
//! Storage locations and the persisted settings store.
//!
//! # Modules
//!
//! - [`paths`] - Default settings path routing
//! - [`settings`] - Settings snapshot and file-backed store

pub mod paths;
pub mod settings;
