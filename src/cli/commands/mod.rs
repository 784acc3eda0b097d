//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Declares an argument schema
//! 2. Resolves it through [`crate::inputs`]
//! 3. Calls the remote service, if it needs one
//! 4. Formats and displays output
//!
//! # Async Commands
//!
//! Commands that prompt or talk to the service are async. Handlers build a
//! `tokio::runtime::Runtime` and `block_on` the async body so dispatch
//! itself stays synchronous.

mod completion;
mod settings_cmd;
pub mod workitem;

pub use completion::completion;
pub use settings_cmd::show as settings_show;
pub use workitem::show as workitem_show;

use crate::cli::args::{Command, SettingsAction, WorkitemAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Workitem { action } => match action {
            WorkitemAction::Show(args) => workitem::show(ctx, &args),
        },
        Command::Settings { action } => match action {
            SettingsAction::Show => settings_cmd::show(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
