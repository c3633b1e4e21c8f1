//! Decode warnings

use thiserror::Error;

/// Non-fatal issues found while decoding a settings record.
///
/// Decode recovers from every one of these by skipping the offending token;
/// they are collected and surfaced to the caller rather than swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// A `--` fragment with no `=` separator
    #[error("ignored token without '=': '--{token}'")]
    MalformedToken {
        /// The raw fragment, without the leading `--`
        token: String,
    },

    /// A token whose name is not in the fixed parameter table
    #[error("ignored unknown parameter: {name}")]
    UnknownParameter {
        /// The unrecognized name
        name: String,
    },

    /// A recognized parameter whose value failed to parse
    #[error("ignored unparseable value for {name}: '{value}'")]
    BadValue {
        /// Parameter name
        name: String,
        /// The raw value text that failed to parse
        value: String,
    },
}
