//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--settings <path>`: Settings file to read saved values from
//! - `--save`: Write resolved values back to the settings file
//! - `--debug`: Enable debug logging
//! - `--trace <area>`: Enable debug logging for one area
//! - `--json`: Machine-readable output
//! - `--no-prompt`: Never prompt; fail on missing values
//! - `--quiet` / `-q`: Minimal output; implies `--no-prompt`
//!
//! Argument values given as flags are kept as raw strings here. Parsing
//! and validation belong to the descriptors in [`crate::inputs`].

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// witx - Work item tracking from the command line
#[derive(Parser, Debug)]
#[command(name = "witx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file holding saved argument values
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Save resolved argument values to the settings file
    #[arg(long, global = true)]
    pub save: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Enable debug logging for an area (repeatable)
    #[arg(long = "trace", global = true, value_name = "AREA")]
    pub trace: Vec<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Never prompt for missing values
    #[arg(long, global = true)]
    pub no_prompt: bool,

    /// Minimal output; implies --no-prompt
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if prompting is allowed.
    ///
    /// Returns true unless `--no-prompt` or `--quiet` was set, and only
    /// when stdin is a terminal.
    pub fn interactive(&self) -> bool {
        !self.no_prompt && !self.quiet && std::io::stdin().is_terminal()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Work item commands
    #[command(
        name = "workitem",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show a work item, prompting for anything not saved yet
    witx workitem show 1234

    # Save the collection URL and token for later runs
    witx workitem show 1234 --service-url https://dev.example.test/org --save"
    )]
    Workitem {
        #[command(subcommand)]
        action: WorkitemAction,
    },

    /// Inspect saved settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Work item subcommands.
#[derive(Subcommand, Debug)]
pub enum WorkitemAction {
    /// Show work item details
    Show(ShowArgs),
}

/// Arguments for `workitem show`.
#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Work item id, followed by any extra tokens
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Work item id
    #[arg(long = "work-item-id", value_name = "ID")]
    pub work_item_id: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Service connection flags shared by remote commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Collection URL of the work tracking service
    #[arg(long = "service-url", value_name = "URL")]
    pub service_url: Option<String>,

    /// Personal access token
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Project to scope requests to
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,
}

/// Settings subcommands.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum SettingsAction {
    /// Print saved values (tokens redacted)
    Show,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
