use alloy_primitives::U256;
use serde_json::Value;

/// Wei per ETH.
const WEI_PER_ETH: f64 = 1e18;

/// Floats below this are assumed to already be denominated in ETH; anything
/// larger is assumed to be wei. Integer-typed inputs are always treated as
/// wei regardless of magnitude, matching the observed relay data formats.
const ETH_MAGNITUDE_CEILING: f64 = 1e6;

/// Classification of one raw revenue field value. Relays disagree on how
/// they encode value fields, so the shape is pinned down once here and
/// normalization dispatches on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// `0x`-prefixed hex string, an integer wei amount.
    HexInteger(U256),
    /// Base-10 decimal string.
    DecimalText(f64),
    /// Native JSON number, integer- or float-typed.
    NativeNumber(serde_json::Number),
    /// Anything else, or a string that failed to parse.
    Unsupported,
}

pub fn classify(raw: &Value) -> FieldValue {
    match raw {
        Value::String(s) => match s.strip_prefix("0x") {
            Some(digits) => match U256::from_str_radix(digits, 16) {
                Ok(wei) => FieldValue::HexInteger(wei),
                Err(_) => FieldValue::Unsupported,
            },
            None => match s.parse::<f64>() {
                Ok(v) => FieldValue::DecimalText(v),
                Err(_) => FieldValue::Unsupported,
            },
        },
        Value::Number(n) => FieldValue::NativeNumber(n.clone()),
        _ => FieldValue::Unsupported,
    }
}

/// Converts one raw field value into ETH. Total function: unrecognized or
/// malformed input yields 0.0, never an error.
///
/// The scaling heuristic is deliberately asymmetric by input type: a decimal
/// string or native float below the magnitude ceiling passes through
/// unscaled, while hex and integer-typed inputs are always divided down from
/// wei, whatever their magnitude.
pub fn normalize(raw: &Value) -> f64 {
    match classify(raw) {
        FieldValue::HexInteger(wei) => wei_to_eth(wei),
        FieldValue::DecimalText(v) => scale_float(v),
        FieldValue::NativeNumber(n) => {
            if n.is_f64() {
                scale_float(n.as_f64().unwrap_or(0.0))
            } else {
                n.as_f64().unwrap_or(0.0) / WEI_PER_ETH
            }
        }
        FieldValue::Unsupported => 0.0,
    }
}

fn scale_float(v: f64) -> f64 {
    if v < ETH_MAGNITUDE_CEILING {
        v
    } else {
        v / WEI_PER_ETH
    }
}

fn wei_to_eth(wei: U256) -> f64 {
    wei.to_string().parse::<f64>().unwrap_or(0.0) / WEI_PER_ETH
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hex_string_is_converted_from_wei() {
        // 0x3635c9adc5dea00000 = 10^21 wei = 1000 ETH
        assert_eq!(normalize(&json!("0x3635c9adc5dea00000")), 1000.0);
    }

    #[test]
    fn native_integer_is_converted_from_wei() {
        assert_eq!(normalize(&json!(2_500_000_000_000_000_000u64)), 2.5);
    }

    #[test]
    fn small_native_integer_is_still_treated_as_wei() {
        // Integer-typed inputs are scaled even below the magnitude ceiling.
        assert_eq!(normalize(&json!(1_000)), 1e-15);
    }

    #[test]
    fn decimal_string_below_ceiling_passes_through() {
        assert_eq!(normalize(&json!("0.5")), 0.5);
        assert_eq!(normalize(&json!("12.75")), 12.75);
    }

    #[test]
    fn decimal_string_above_ceiling_is_treated_as_wei() {
        assert_eq!(normalize(&json!("2500000000000000000")), 2.5);
    }

    #[test]
    fn native_float_below_ceiling_passes_through() {
        assert_eq!(normalize(&json!(3.25)), 3.25);
    }

    #[test]
    fn native_float_above_ceiling_is_treated_as_wei() {
        assert_eq!(normalize(&json!(2.5e18)), 2.5);
    }

    #[test]
    fn unsupported_shapes_yield_zero() {
        assert_eq!(normalize(&json!(true)), 0.0);
        assert_eq!(normalize(&json!({"nested": 1})), 0.0);
        assert_eq!(normalize(&json!([1, 2])), 0.0);
        assert_eq!(normalize(&json!(null)), 0.0);
    }

    #[test]
    fn malformed_strings_yield_zero() {
        assert_eq!(normalize(&json!("0xzz")), 0.0);
        assert_eq!(normalize(&json!("0x")), 0.0);
        assert_eq!(normalize(&json!("not a number")), 0.0);
    }

    #[test]
    fn classification_is_explicit() {
        assert_eq!(
            classify(&json!("0xde0b6b3a7640000")),
            FieldValue::HexInteger(U256::from(1_000_000_000_000_000_000u64))
        );
        assert_eq!(classify(&json!("1.5")), FieldValue::DecimalText(1.5));
        assert!(matches!(classify(&json!(7)), FieldValue::NativeNumber(_)));
        assert_eq!(classify(&json!(false)), FieldValue::Unsupported);
    }
}
