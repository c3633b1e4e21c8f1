//! Autostart registration seam
//!
//! The run-on-login mechanism itself (a registry Run key on Windows, a
//! desktop entry elsewhere) is a collaborator behind [`AutostartRegistrar`].
//! The core's obligation is narrower: the settings record handed over as the
//! registration target must exist on disk before the registrar sees its path.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::params::ParamTable;
use crate::settings::{SettingsError, SettingsStore};

/// Name under which the autostart entry is registered
pub const AUTOSTART_ENTRY_NAME: &str = "RyzenTune";

/// Errors from toggling autostart
#[derive(Error, Debug)]
pub enum AutostartError {
    /// Writing the settings record that backs the entry failed
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The registrar collaborator rejected the change
    #[error("autostart registration failed: {0}")]
    Registrar(#[source] io::Error),
}

/// Collaborator that owns the OS run-on-login entry.
pub trait AutostartRegistrar {
    /// Register `target` to run on login under `name`.
    fn register(&mut self, name: &str, target: &Path) -> io::Result<()>;

    /// Remove the entry registered under `name`, if any.
    fn unregister(&mut self, name: &str) -> io::Result<()>;
}

/// Guarantee the settings record exists and return its path.
///
/// Writes the record for `table` when none is present yet; an existing record
/// is left as the last successfully applied state.
pub fn ensure_autostart_target(
    store: &SettingsStore,
    table: &ParamTable,
) -> Result<PathBuf, SettingsError> {
    if !store.exists() {
        store.save(table)?;
    }
    Ok(store.path().to_path_buf())
}

/// Enable or disable the run-on-login entry.
pub fn set_autostart(
    registrar: &mut dyn AutostartRegistrar,
    store: &SettingsStore,
    table: &ParamTable,
    enabled: bool,
) -> Result<(), AutostartError> {
    if enabled {
        let target = ensure_autostart_target(store, table)?;
        registrar
            .register(AUTOSTART_ENTRY_NAME, &target)
            .map_err(AutostartError::Registrar)?;
        tracing::info!(target = %target.display(), "autostart enabled");
    } else {
        registrar
            .unregister(AUTOSTART_ENTRY_NAME)
            .map_err(AutostartError::Registrar)?;
        tracing::info!("autostart disabled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeRegistrar {
        entries: HashMap<String, PathBuf>,
    }

    impl AutostartRegistrar for FakeRegistrar {
        fn register(&mut self, name: &str, target: &Path) -> io::Result<()> {
            // The contract: the target must already exist when handed over.
            assert!(target.is_file(), "registered target does not exist yet");
            self.entries.insert(name.to_string(), target.to_path_buf());
            Ok(())
        }

        fn unregister(&mut self, name: &str) -> io::Result<()> {
            self.entries.remove(name);
            Ok(())
        }
    }

    #[test]
    fn test_enable_creates_record_before_registration() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at_dir(dir.path());
        let mut registrar = FakeRegistrar::default();

        assert!(!store.exists());
        set_autostart(&mut registrar, &store, &ParamTable::with_defaults(), true).unwrap();

        assert!(store.exists());
        assert_eq!(
            registrar.entries.get(AUTOSTART_ENTRY_NAME),
            Some(&store.path().to_path_buf())
        );
    }

    #[test]
    fn test_enable_keeps_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at_dir(dir.path());
        let mut registrar = FakeRegistrar::default();

        let mut applied = ParamTable::new();
        applied.set("tctl-temp", true, 70);
        store.save(&applied).unwrap();

        // Enabling with a different in-memory table must not clobber the
        // last applied record.
        set_autostart(&mut registrar, &store, &ParamTable::with_defaults(), true).unwrap();
        let (loaded, _) = store.load().unwrap().unwrap();
        assert_eq!(loaded, applied);
    }

    #[test]
    fn test_disable_removes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at_dir(dir.path());
        let mut registrar = FakeRegistrar::default();

        set_autostart(&mut registrar, &store, &ParamTable::with_defaults(), true).unwrap();
        set_autostart(&mut registrar, &store, &ParamTable::with_defaults(), false).unwrap();
        assert!(registrar.entries.is_empty());
    }
}
