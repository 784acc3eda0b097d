//! core::paths
//!
//! Default storage locations.
//!
//! # Settings Location
//!
//! Searched in order:
//! 1. An explicit `--settings <path>` flag
//! 2. `$WITX_SETTINGS` if set
//! 3. `~/.witx/settings.toml`
//!
//! Environment lookups happen once, at startup, and the result is passed
//! down; nothing below the CLI layer consults the environment.

use std::path::{Path, PathBuf};

use crate::core::settings::SettingsError;

/// Environment variable overriding the default settings path.
pub const SETTINGS_ENV: &str = "WITX_SETTINGS";

/// Directory under the home directory holding witx state.
pub const STATE_DIR: &str = ".witx";

/// File name of the default settings file.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Where the settings path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLocation {
    /// Given on the command line.
    Explicit(PathBuf),
    /// From the environment or the home directory.
    Default(PathBuf),
}

impl SettingsLocation {
    pub fn path(&self) -> &Path {
        match self {
            SettingsLocation::Explicit(p) | SettingsLocation::Default(p) => p,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, SettingsLocation::Explicit(_))
    }
}

/// Resolve the settings location from the flag, env override and home dir.
///
/// # Errors
///
/// Returns [`SettingsError::NoHomeDir`] only when neither the flag nor the
/// env override is set and the home directory cannot be determined.
pub fn settings_location(
    flag: Option<&Path>,
    env_override: Option<&str>,
    home: Option<&Path>,
) -> Result<SettingsLocation, SettingsError> {
    if let Some(path) = flag {
        return Ok(SettingsLocation::Explicit(path.to_path_buf()));
    }

    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(SettingsLocation::Default(PathBuf::from(path)));
    }

    let home = home.ok_or(SettingsError::NoHomeDir)?;
    Ok(SettingsLocation::Default(
        home.join(STATE_DIR).join(SETTINGS_FILE),
    ))
}
