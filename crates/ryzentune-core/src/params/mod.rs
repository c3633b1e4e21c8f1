//! Parameter model
//!
//! The fixed set of ryzenadj power-management parameters (the spec table) and
//! the mutable per-parameter state the UI edits (the parameter table).

mod spec;
mod table;

pub use spec::{spec_for, Encoding, ParamSpec, PARAM_SPECS};
pub use table::{ParamSnapshot, ParamState, ParamTable};
