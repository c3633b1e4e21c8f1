//! Encode path: parameter table → tokens, argument string, settings record

use crate::params::{Encoding, ParamTable};

/// Render one `--name=value` token per enabled parameter, canonical order.
///
/// Never fails: an enabled parameter carries a non-negative value by table
/// invariant, and disabled parameters are not inspected at all.
pub fn encode_tokens(table: &ParamTable) -> Vec<String> {
    table
        .enabled_params()
        .map(|(spec, value)| match spec.encoding {
            // Fixed textual suffix, not multiplication: 15 becomes "15000".
            Encoding::ScaledDecimal => format!("--{}={}000", spec.name, value),
            Encoding::PlainDecimal => format!("--{}={}", spec.name, value),
            Encoding::HexCurrent => format!("--{}=0x{:X}", spec.name, value),
        })
        .collect()
}

/// The live CLI argument string: tokens joined with a single space.
pub fn encode_args(table: &ParamTable) -> String {
    encode_tokens(table).join(" ")
}

/// The persisted settings record: an executable reference followed by the
/// same tokens. With no enabled parameters the record is the reference alone.
pub fn encode_record(table: &ParamTable, exe_ref: &str) -> String {
    let args = encode_args(table);
    if args.is_empty() {
        exe_ref.to_string()
    } else {
        format!("{exe_ref} {args}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamTable;

    #[test]
    fn test_scaled_decimal_is_a_literal_suffix() {
        let mut table = ParamTable::new();
        table.set("stapm-limit", true, 15);
        assert_eq!(encode_args(&table), "--stapm-limit=15000");
    }

    #[test]
    fn test_hex_is_uppercase_unpadded() {
        let mut table = ParamTable::new();
        table.set("vrmmax-current", true, 30000);
        assert_eq!(encode_args(&table), "--vrmmax-current=0x7530");

        table.set("vrmmax-current", true, 0xABC);
        assert_eq!(encode_args(&table), "--vrmmax-current=0xABC");
    }

    #[test]
    fn test_disabled_params_are_absent() {
        let mut table = ParamTable::new();
        table.set("fast-limit", false, 30);
        table.set("tctl-temp", true, 80);
        assert_eq!(encode_args(&table), "--tctl-temp=80");
    }

    #[test]
    fn test_output_is_canonical_order_not_mutation_order() {
        let mut a = ParamTable::new();
        a.set("stapm-limit", true, 15);
        a.set("vrmmax-current", true, 30000);
        a.set("tctl-temp", true, 80);

        let mut b = ParamTable::new();
        b.set("vrmmax-current", true, 30000);
        b.set("tctl-temp", true, 80);
        b.set("stapm-limit", true, 15);

        let expected = "--stapm-limit=15000 --tctl-temp=80 --vrmmax-current=0x7530";
        assert_eq!(encode_args(&a), expected);
        assert_eq!(encode_args(&b), expected);
    }

    #[test]
    fn test_default_table_encodes_all_five_limits() {
        let table = ParamTable::with_defaults();
        assert_eq!(
            encode_args(&table),
            "--stapm-limit=15000 --fast-limit=30000 --slow-limit=25000 \
             --tctl-temp=80 --vrmmax-current=0x7530"
        );
    }

    #[test]
    fn test_record_prepends_executable_reference() {
        let mut table = ParamTable::new();
        table.set("slow-time", true, 5);
        assert_eq!(
            encode_record(&table, "ryzenadj.exe"),
            "ryzenadj.exe --slow-time=5"
        );

        let empty = ParamTable::new();
        assert_eq!(encode_record(&empty, "ryzenadj.exe"), "ryzenadj.exe");
    }
}
