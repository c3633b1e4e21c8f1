//! Apply runner
//!
//! Invokes the external ryzenadj executable with the encoded argument tokens.
//! This is the one boundary where failure surfaces hard: if the tool cannot be
//! launched, the whole apply action fails and nothing is persisted.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::codec::{encode_args, encode_tokens};
use crate::params::ParamTable;
use crate::settings::{SettingsError, SettingsStore, TOOL_EXE_REF};

/// Errors from launching the external tool
#[derive(Error, Debug)]
pub enum ApplyError {
    /// The directory of the current executable could not be resolved
    #[error("cannot resolve application directory: {0}")]
    AppDir(#[source] io::Error),

    /// The tool executable is not present at its expected location
    #[error("ryzenadj executable not found at {path}")]
    ExecutableNotFound {
        /// Expected tool path
        path: PathBuf,
    },

    /// The tool process could not be launched
    #[error("failed to launch {path}: {source}")]
    Spawn {
        /// Tool path that failed to launch
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Persisting the settings record after a successful apply failed
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Locates and runs the external ryzenadj executable.
#[derive(Debug, Clone)]
pub struct Adjuster {
    exe: PathBuf,
}

impl Adjuster {
    /// Expect the tool beside the current binary (`{app dir}/ryzenadj.exe`
    /// on Windows, `{app dir}/ryzenadj` elsewhere).
    pub fn beside_current_exe() -> Result<Self, ApplyError> {
        let own = env::current_exe().map_err(ApplyError::AppDir)?;
        let dir = own.parent().ok_or_else(|| {
            ApplyError::AppDir(io::Error::new(
                io::ErrorKind::NotFound,
                "executable has no parent directory",
            ))
        })?;
        Ok(Self::at_path(dir.join(TOOL_EXE_REF)))
    }

    /// Use an explicit tool path.
    pub fn at_path(exe: PathBuf) -> Self {
        Self { exe }
    }

    /// The tool path this adjuster will launch.
    pub fn exe(&self) -> &Path {
        &self.exe
    }

    /// Launch the tool with one argv entry per encoded token.
    ///
    /// Waits for the process to finish but does not interpret its exit code
    /// or output; inspecting the tool's result is outside this core.
    pub fn apply(&self, table: &ParamTable) -> Result<(), ApplyError> {
        if !self.exe.is_file() {
            return Err(ApplyError::ExecutableNotFound {
                path: self.exe.clone(),
            });
        }

        tracing::info!(args = %encode_args(table), "applying power limits");
        let status = Command::new(&self.exe)
            .args(encode_tokens(table))
            .status()
            .map_err(|source| ApplyError::Spawn {
                path: self.exe.clone(),
                source,
            })?;
        tracing::debug!(?status, "ryzenadj finished");
        Ok(())
    }
}

/// Apply `table` and, only on success, persist it to `store`.
///
/// The ordering guarantees the record on disk never diverges from the last
/// successfully applied state: a failed launch leaves the previous record
/// untouched.
pub fn apply_and_persist(
    adjuster: &Adjuster,
    store: &SettingsStore,
    table: &ParamTable,
) -> Result<(), ApplyError> {
    adjuster.apply(table)?;
    store.save(table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_a_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let adjuster = Adjuster::at_path(dir.path().join("ryzenadj"));
        let err = adjuster.apply(&ParamTable::with_defaults()).unwrap_err();
        assert!(matches!(err, ApplyError::ExecutableNotFound { .. }));
    }

    #[test]
    fn test_failed_apply_does_not_persist() {
        let dir = tempfile::tempdir().unwrap();
        let adjuster = Adjuster::at_path(dir.path().join("ryzenadj"));
        let store = SettingsStore::at_dir(dir.path());

        let result = apply_and_persist(&adjuster, &store, &ParamTable::with_defaults());
        assert!(result.is_err());
        assert!(!store.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_apply_persists_record() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("ryzenadj");
        std::fs::write(&exe, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let adjuster = Adjuster::at_path(exe);
        let store = SettingsStore::at_dir(dir.path());

        let mut table = ParamTable::new();
        table.set("tctl-temp", true, 75);
        apply_and_persist(&adjuster, &store, &table).unwrap();

        let (loaded, warnings) = store.load().unwrap().unwrap();
        assert!(warnings.is_empty());
        assert_eq!(loaded, table);
    }
}
