//! The mutable parameter table

use serde::Serialize;

use super::spec::{ParamSpec, PARAM_SPECS};

/// Sentinel for "no value stored". Never leaks into encoded output because
/// the codec only reads values of enabled parameters.
const UNSET: i64 = -1;

/// Mutable state for one parameter
#[derive(Debug, Clone, Copy)]
pub struct ParamState {
    /// Whether this parameter is emitted at all
    pub enabled: bool,

    /// Current value; meaningless while `enabled` is false
    pub value: i64,
}

/// Serializable view of one table entry, for inspection output
#[derive(Debug, Clone, Serialize)]
pub struct ParamSnapshot {
    /// Parameter name
    pub name: &'static str,

    /// Whether this parameter is currently enabled
    pub enabled: bool,

    /// Current value, present only when enabled
    pub value: Option<i64>,

    /// Human-readable description with the hardware unit
    pub description: &'static str,
}

/// Ordered mapping from parameter name to state, one entry per [`ParamSpec`].
///
/// Lives for the process lifetime; mutated only by explicit enable/disable and
/// value-set operations. Equality ignores the stored values of disabled
/// parameters, so a decoded table compares equal to its source regardless of
/// sentinel contents.
#[derive(Debug, Clone)]
pub struct ParamTable {
    states: [ParamState; PARAM_SPECS.len()],
}

impl ParamTable {
    /// A table with every parameter unset. This is what decode populates.
    pub fn new() -> Self {
        Self {
            states: [ParamState {
                enabled: false,
                value: UNSET,
            }; PARAM_SPECS.len()],
        }
    }

    /// The UI-startup table: `stapm-limit=15, fast-limit=30, slow-limit=25,
    /// tctl-temp=80, vrmmax-current=30000` enabled, all others unset.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.set("stapm-limit", true, 15);
        table.set("fast-limit", true, 30);
        table.set("slow-limit", true, 25);
        table.set("tctl-temp", true, 80);
        table.set("vrmmax-current", true, 30000);
        table
    }

    /// Set a parameter's enabled flag and value.
    ///
    /// Panics on an unknown name: the spec table is fixed at compile time, so
    /// an unknown name is a programming error, not a recoverable condition.
    /// An enabled parameter must carry a non-negative value; that invariant is
    /// the caller's to uphold before encoding.
    pub fn set(&mut self, name: &str, enabled: bool, value: i64) {
        debug_assert!(!enabled || value >= 0, "enabled {name} with negative value");
        let idx = Self::index_of(name);
        self.states[idx] = ParamState { enabled, value };
    }

    /// Get a parameter's `(enabled, value)` pair. Panics on an unknown name.
    pub fn get(&self, name: &str) -> (bool, i64) {
        let state = self.states[Self::index_of(name)];
        (state.enabled, state.value)
    }

    /// Iterate enabled parameters as `(spec, value)` in canonical order.
    pub fn enabled_params(&self) -> impl Iterator<Item = (&'static ParamSpec, i64)> + '_ {
        PARAM_SPECS
            .iter()
            .zip(self.states.iter())
            .filter(|(_, state)| state.enabled)
            .map(|(spec, state)| (spec, state.value))
    }

    /// Serializable view of every entry, in canonical order.
    pub fn snapshot(&self) -> Vec<ParamSnapshot> {
        PARAM_SPECS
            .iter()
            .zip(self.states.iter())
            .map(|(spec, state)| ParamSnapshot {
                name: spec.name,
                enabled: state.enabled,
                value: state.enabled.then_some(state.value),
                description: spec.description,
            })
            .collect()
    }

    fn index_of(name: &str) -> usize {
        PARAM_SPECS
            .iter()
            .position(|s| s.name == name)
            .unwrap_or_else(|| panic!("unknown parameter name: {name}"))
    }
}

impl Default for ParamTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ParamTable {
    fn eq(&self, other: &Self) -> bool {
        self.states.iter().zip(other.states.iter()).all(|(a, b)| {
            a.enabled == b.enabled && (!a.enabled || a.value == b.value)
        })
    }
}

impl Eq for ParamTable {}
