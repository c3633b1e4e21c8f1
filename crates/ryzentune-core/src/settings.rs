//! Settings persistence
//!
//! The persisted settings record is a single-line flat file beside the
//! application binary. It doubles as the autostart replay script and as the
//! source for restoring the parameter table on the next launch.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::{decode, encode_record, DecodeWarning};
use crate::params::ParamTable;

/// File name of the settings record, created beside the binary
pub const SETTINGS_FILE_NAME: &str = "ryzentune.settings";

/// Executable reference token written at the head of the record
#[cfg(windows)]
pub const TOOL_EXE_REF: &str = "ryzenadj.exe";
/// Executable reference token written at the head of the record
#[cfg(not(windows))]
pub const TOOL_EXE_REF: &str = "ryzenadj";

/// Errors from reading or writing the settings record
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The directory of the current executable could not be resolved
    #[error("cannot resolve application directory: {0}")]
    AppDir(#[source] io::Error),

    /// Reading or writing the record file failed
    #[error("settings file I/O error at {path}: {source}")]
    Io {
        /// The record path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Owns the fixed path of the persisted settings record.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the fixed application-relative path, beside the binary where
    /// the autostart replay expects to find it.
    pub fn beside_current_exe() -> Result<Self, SettingsError> {
        let exe = env::current_exe().map_err(SettingsError::AppDir)?;
        let dir = exe.parent().ok_or_else(|| {
            SettingsError::AppDir(io::Error::new(
                io::ErrorKind::NotFound,
                "executable has no parent directory",
            ))
        })?;
        Ok(Self::at_dir(dir))
    }

    /// Store inside an explicit directory. Used by tests and by callers that
    /// relocate the application directory.
    pub fn at_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// The record path. This is what gets handed to the autostart registrar.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted table, or `Ok(None)` when no record exists yet.
    ///
    /// A missing file means "no prior settings" and is not an error; decode
    /// warnings from a present file are returned alongside the table.
    pub fn load(&self) -> Result<Option<(ParamTable, Vec<DecodeWarning>)>, SettingsError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings record, using defaults");
                return Ok(None);
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(Some(decode(&text)))
    }

    /// Write the record for `table`, overwriting any previous one.
    pub fn save(&self, table: &ParamTable) -> Result<(), SettingsError> {
        let record = encode_record(table, TOOL_EXE_REF);
        fs::write(&self.path, format!("{record}\n")).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "settings record written");
        Ok(())
    }

    /// Whether a record currently exists on disk.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}
