//! cli
//!
//! Command-line interface layer for witx.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Capture the environment once and turn it into a [`Context`]
//! - Delegate to command handlers
//!
//! Nothing below this layer reads environment variables; the values are
//! captured in [`StartupEnv`] and passed down explicitly.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use crate::core::paths::{self, SettingsLocation};
use crate::core::settings::FileSettingsStore;
use crate::ui::output::{Logger, OutputMode, Verbosity};

/// Environment variable enabling debug output everywhere.
pub const TRACE_ENV: &str = "WITX_TRACE";

/// Prefix of per-area trace variables, e.g. `WITX_TRACE_INPUTS`.
pub const TRACE_AREA_ENV_PREFIX: &str = "WITX_TRACE_";

/// Process environment captured at startup.
#[derive(Debug, Clone, Default)]
pub struct StartupEnv {
    /// `$WITX_SETTINGS`
    pub settings_override: Option<String>,
    /// `$WITX_TRACE` is set and non-empty
    pub trace_all: bool,
    /// Areas named by non-empty `$WITX_TRACE_<AREA>` variables
    pub trace_areas: Vec<String>,
    /// The user's home directory
    pub home: Option<PathBuf>,
}

impl StartupEnv {
    /// Read the relevant variables from the process environment.
    pub fn capture() -> Self {
        Self::from_vars(std::env::vars(), dirs::home_dir())
    }

    /// Build from an explicit variable list.
    pub fn from_vars<I>(vars: I, home: Option<PathBuf>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut env = StartupEnv {
            home,
            ..Default::default()
        };
        for (key, value) in vars {
            if value.is_empty() {
                continue;
            }
            if key == paths::SETTINGS_ENV {
                env.settings_override = Some(value);
            } else if key == TRACE_ENV {
                env.trace_all = true;
            } else if let Some(area) = key.strip_prefix(TRACE_AREA_ENV_PREFIX) {
                env.trace_areas.push(area.to_ascii_lowercase());
            }
        }
        env
    }
}

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags and the startup
/// environment.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output sink for all user-facing messages.
    pub logger: Logger,
    /// Prompting allowed.
    pub interactive: bool,
    /// Persist resolved values.
    pub save: bool,
    /// Where settings are read from and saved to.
    pub settings: SettingsLocation,
}

impl Context {
    /// Build the context from parsed flags and the captured environment.
    pub fn new(cli: &Cli, env: &StartupEnv) -> Result<Self> {
        let logger = logger_for(cli, env);
        let settings = paths::settings_location(
            cli.settings.as_deref(),
            env.settings_override.as_deref(),
            env.home.as_deref(),
        )?;

        Ok(Self {
            logger,
            interactive: cli.interactive(),
            save: cli.save,
            settings,
        })
    }

    /// The settings store for this run.
    pub fn settings_store(&self) -> FileSettingsStore {
        FileSettingsStore::with_path(self.settings.path().to_path_buf())
    }
}

/// Build the logger for a run from global flags and the environment.
pub fn logger_for(cli: &Cli, env: &StartupEnv) -> Logger {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug || env.trace_all);
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Friendly
    };
    Logger::new(verbosity, mode).with_trace_areas(cli.trace.iter().chain(env.trace_areas.iter()))
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Failures are
/// reported through the same logger the command used.
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();
    let env = StartupEnv::capture();
    let logger = logger_for(&cli, &env);

    match execute(cli, &env) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger.debug(format!("{:?}", err));
            logger.error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli, env: &StartupEnv) -> Result<()> {
    let ctx = Context::new(&cli, env)?;

    ctx.logger
        .debug(format!("settings: {}", ctx.settings.path().display()));

    commands::dispatch(cli.command, &ctx)
}
