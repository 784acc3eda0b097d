//! witx - Work item tracking from the command line
//!
//! witx issues requests against a remote work tracking service. The
//! interesting part is how a command gets its arguments: each command
//! declares named descriptors, and values are resolved from positional
//! tokens, flags, a persisted settings file and defaults, with interactive
//! prompting to fill any required gaps.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, dispatches commands)
//! - [`inputs`] - Argument descriptors, resolution and prompting
//! - [`core`] - Settings store and storage locations
//! - [`tracker`] - Remote work tracking client
//! - [`ui`] - Output and logging
//!
//! # Invariants
//!
//! 1. A command runs only with every required argument resolved
//! 2. Prompts are issued strictly one at a time
//! 3. Components never read process-wide state; the CLI layer passes it in

pub mod cli;
pub mod core;
pub mod inputs;
pub mod tracker;
pub mod ui;
