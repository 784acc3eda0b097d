//! core::settings::file_store
//!
//! TOML-file settings storage.
//!
//! # Invariants
//!
//! - Saves are read-modify-write under an exclusive `fs2` lock on a
//!   sibling `<file>.lock`, so two saves never interleave their merges
//! - Writes are atomic (write to temp file, then rename)
//! - File permissions are 0600 on Unix; saved values may include tokens

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use fs2::FileExt;

use super::{SettingsError, SettingsSnapshot, SettingsStore};

/// File-based settings store.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    /// Path to the settings file
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path to the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn write_error(&self, message: impl Into<String>) -> SettingsError {
        SettingsError::Write {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn read_snapshot(&self) -> Result<SettingsSnapshot, SettingsError> {
        if !self.path.exists() {
            return Ok(SettingsSnapshot::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn write_snapshot(&self, snapshot: &SettingsSnapshot) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(snapshot)
            .map_err(|e| self.write_error(format!("cannot serialize settings: {}", e)))?;

        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| self.write_error(format!("cannot create temp file: {}", e)))?;

            #[cfg(unix)]
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| self.write_error(format!("cannot set permissions: {}", e)))?;

            file.write_all(content.as_bytes())
                .map_err(|e| self.write_error(format!("cannot write settings: {}", e)))?;
            file.sync_all()
                .map_err(|e| self.write_error(format!("cannot sync to disk: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path)
            .map_err(|e| self.write_error(format!("cannot rename temp file: {}", e)))
    }

    fn acquire_lock(&self) -> Result<File, SettingsError> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| self.write_error(format!("cannot create lock file: {}", e)))?;

        file.try_lock_exclusive().map_err(|_| SettingsError::Locked {
            path: self.path.clone(),
        })?;
        Ok(file)
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<SettingsSnapshot, SettingsError> {
        self.read_snapshot()
    }

    fn save(&self, values: &SettingsSnapshot) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| self.write_error(format!("cannot create directory: {}", e)))?;
            }
        }

        let lock = self.acquire_lock()?;

        let mut merged = self.read_snapshot()?;
        merged.merge(values);
        let result = self.write_snapshot(&merged);

        // Release failures are harmless; the OS drops the lock with the handle.
        let _ = FileExt::unlock(&lock);
        result
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
