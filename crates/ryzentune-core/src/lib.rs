//! # RyzenTune Core Library
//!
//! Core functionality for the RyzenTune power-limit frontend.
//!
//! This library provides:
//! - The fixed table of ryzenadj power-management parameters
//! - The argument codec (parameter table ↔ `--name=value` tokens ↔ settings file)
//! - Settings persistence beside the application binary
//! - Invocation of the external `ryzenadj` executable
//! - The autostart registration seam
//!
//! ## Example
//!
//! ```rust,ignore
//! use ryzentune_core::prelude::*;
//!
//! let mut table = ParamTable::with_defaults();
//! table.set("tctl-temp", true, 75);
//!
//! let adjuster = Adjuster::beside_current_exe()?;
//! let store = SettingsStore::beside_current_exe()?;
//! apply_and_persist(&adjuster, &store, &table)?;
//! ```

#![warn(missing_docs)]

pub mod apply;
pub mod autostart;
pub mod codec;
pub mod params;
pub mod settings;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::apply::{apply_and_persist, Adjuster, ApplyError};
    pub use crate::autostart::{
        ensure_autostart_target, set_autostart, AutostartError, AutostartRegistrar,
    };
    pub use crate::codec::{decode, encode_args, encode_record, encode_tokens, DecodeWarning};
    pub use crate::params::{Encoding, ParamSpec, ParamTable, PARAM_SPECS};
    pub use crate::settings::{SettingsError, SettingsStore};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
