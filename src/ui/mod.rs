//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Leveled output and logging
//!
//! Interactive prompting lives in [`crate::inputs::prompt`], next to the
//! descriptors it fills in.

pub mod output;
