//! Static parameter specification table

use serde::Serialize;

/// How a parameter value is rendered inside a `--name=value` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Encoding {
    /// Decimal with a fixed textual `000` suffix: the user enters watts, the
    /// tool expects milliwatts, and the scaling is a literal text suffix
    /// (15 becomes the text `15000`), never arithmetic
    ScaledDecimal,

    /// Plain decimal, no scaling
    PlainDecimal,

    /// Hexadecimal with a `0x` prefix, uppercase digits, no padding
    HexCurrent,
}

/// A single entry in the fixed, process-wide parameter specification table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamSpec {
    /// Unique key; also the ryzenadj long-option name
    pub name: &'static str,

    /// Token rendering for this parameter
    pub encoding: Encoding,

    /// Human-readable description with the hardware unit
    pub description: &'static str,
}

/// Canonical parameter order.
///
/// This order is preserved verbatim in the argument string and the settings
/// record so that output is deterministic and diff-stable.
pub const PARAM_SPECS: [ParamSpec; 11] = [
    ParamSpec {
        name: "stapm-limit",
        encoding: Encoding::ScaledDecimal,
        description: "Sustained Power Limit - STAPM LIMIT (mW)",
    },
    ParamSpec {
        name: "fast-limit",
        encoding: Encoding::ScaledDecimal,
        description: "Actual Power Limit - PPT LIMIT FAST (mW)",
    },
    ParamSpec {
        name: "slow-limit",
        encoding: Encoding::ScaledDecimal,
        description: "Average Power Limit - PPT LIMIT SLOW (mW)",
    },
    ParamSpec {
        name: "tctl-temp",
        encoding: Encoding::PlainDecimal,
        description: "Tctl Temperature Limit (degree C)",
    },
    ParamSpec {
        name: "vrmmax-current",
        encoding: Encoding::HexCurrent,
        description: "VRM Maximum Current Limit - EDC LIMIT VDD (mA)",
    },
    ParamSpec {
        name: "slow-time",
        encoding: Encoding::PlainDecimal,
        description: "Slow PPT Constant Time (s)",
    },
    ParamSpec {
        name: "vrmsoc-current",
        encoding: Encoding::HexCurrent,
        description: "VRM SoC Current Limit - TDC LIMIT SoC (mA)",
    },
    ParamSpec {
        name: "vrm-current",
        encoding: Encoding::HexCurrent,
        description: "VRM Current Limit - TDC LIMIT VDD (mA)",
    },
    ParamSpec {
        name: "vrmsocmax-current",
        encoding: Encoding::HexCurrent,
        description: "VRM SoC Maximum Current Limit - EDC LIMIT SoC (mA)",
    },
    ParamSpec {
        name: "psi0-current",
        encoding: Encoding::HexCurrent,
        description: "PSI0 VDD Current Limit (mA)",
    },
    ParamSpec {
        name: "psi0soc-current",
        encoding: Encoding::HexCurrent,
        description: "PSI0 SoC Current Limit (mA)",
    },
];

/// Look up a spec by name. Returns `None` for names outside the fixed table.
pub fn spec_for(name: &str) -> Option<&'static ParamSpec> {
    PARAM_SPECS.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_names_are_unique() {
        for (i, a) in PARAM_SPECS.iter().enumerate() {
            for b in &PARAM_SPECS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = PARAM_SPECS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "stapm-limit",
                "fast-limit",
                "slow-limit",
                "tctl-temp",
                "vrmmax-current",
                "slow-time",
                "vrmsoc-current",
                "vrm-current",
                "vrmsocmax-current",
                "psi0-current",
                "psi0soc-current",
            ]
        );
    }

    #[test]
    fn test_spec_lookup() {
        assert_eq!(
            spec_for("stapm-limit").unwrap().encoding,
            Encoding::ScaledDecimal
        );
        assert_eq!(
            spec_for("tctl-temp").unwrap().encoding,
            Encoding::PlainDecimal
        );
        assert_eq!(
            spec_for("psi0-current").unwrap().encoding,
            Encoding::HexCurrent
        );
        assert!(spec_for("bogus-key").is_none());
    }
}
