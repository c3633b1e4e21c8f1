//! Decode path: settings record text → parameter table
//!
//! Tolerates both on-disk generations of the scaled-decimal fields: the
//! current suffixed form (`--stapm-limit=15000`) and the legacy bare form
//! (`--stapm-limit=15`). Every malformed or unknown token degrades to a
//! warning, never an abort.

use crate::params::{spec_for, Encoding, ParamSpec, ParamTable};

use super::error::DecodeWarning;

/// The fixed textual suffix carried by `ScaledDecimal` tokens.
const SCALED_SUFFIX: &str = "000";

/// Decode the full text of a settings record into a parameter table.
///
/// Parameters mentioned in the text come back enabled with their decoded
/// values; everything else stays unset. The warning list carries every token
/// that was skipped, in input order.
pub fn decode(text: &str) -> (ParamTable, Vec<DecodeWarning>) {
    let mut table = ParamTable::new();
    let mut warnings = Vec::new();

    let mut fragments = text.split("--");
    // The first fragment is the executable reference prefix.
    let _exe_ref = fragments.next();

    for fragment in fragments {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }

        let Some((name, raw_value)) = fragment.split_once('=') else {
            let warning = DecodeWarning::MalformedToken {
                token: fragment.to_string(),
            };
            tracing::warn!("{warning}");
            warnings.push(warning);
            continue;
        };
        let raw_value = raw_value.trim();

        let Some(spec) = spec_for(name) else {
            let warning = DecodeWarning::UnknownParameter {
                name: name.to_string(),
            };
            tracing::warn!("{warning}");
            warnings.push(warning);
            continue;
        };

        match parse_value(spec, raw_value) {
            Some(value) => table.set(spec.name, true, value),
            None => {
                let warning = DecodeWarning::BadValue {
                    name: spec.name.to_string(),
                    value: raw_value.to_string(),
                };
                tracing::warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    (table, warnings)
}

/// Parse one raw token value per the spec's encoding.
///
/// Returns `None` when the text is not a valid non-negative integer in the
/// expected form; the caller downgrades that to a warning.
fn parse_value(spec: &ParamSpec, raw: &str) -> Option<i64> {
    let value = match spec.encoding {
        Encoding::ScaledDecimal => {
            // Current generation stores the suffixed milliwatt text; the
            // legacy generation stored the bare watt value.
            match raw.strip_suffix(SCALED_SUFFIX) {
                Some(stripped) if !stripped.is_empty() => stripped.parse().ok()?,
                _ => raw.parse().ok()?,
            }
        }
        Encoding::PlainDecimal => raw.parse().ok()?,
        Encoding::HexCurrent => {
            let digits = raw
                .strip_prefix("0x")
                .or_else(|| raw.strip_prefix("0X"))
                .unwrap_or(raw);
            i64::from_str_radix(digits, 16).ok()?
        }
    };
    (value >= 0).then_some(value)
}
