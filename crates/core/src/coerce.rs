//! Conversion of loosely typed caller values.
//!
//! Operations accept anything that converts into a [`serde_json::Value`] so a
//! caller can pass `10`, `"10"`, `10.0` or `"notint"` and let the store decide.

use serde_json::Value;

/// Coerce a loose value to an integer.
///
/// Floats truncate toward zero, booleans are `1`/`0`, and strings must hold a
/// base-10 integer (surrounding whitespace, one sign, `_` between digits).
pub fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            float_to_int(f)
        }
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => parse_int(s),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Borrow the text of a string value; `None` for anything that is not text.
pub fn as_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }
}

fn float_to_int(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if t < i64::MIN as f64 || t >= i64::MAX as f64 {
        return None;
    }
    Some(t as i64)
}

fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let signed = if negative { format!("-{cleaned}") } else { cleaned };
    signed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_pass_through() {
        assert_eq!(to_int(&json!(10)), Some(10));
        assert_eq!(to_int(&json!(-2)), Some(-2));
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(to_int(&json!(2.9)), Some(2));
        assert_eq!(to_int(&json!(-2.9)), Some(-2));
        assert_eq!(to_int(&json!(1e300)), None);
    }

    #[test]
    fn booleans_are_zero_or_one() {
        assert_eq!(to_int(&json!(true)), Some(1));
        assert_eq!(to_int(&json!(false)), Some(0));
    }

    #[test]
    fn strings_parse_as_base_ten() {
        assert_eq!(to_int(&json!("42")), Some(42));
        assert_eq!(to_int(&json!("  -7\n")), Some(-7));
        assert_eq!(to_int(&json!("+3")), Some(3));
        assert_eq!(to_int(&json!("1_000")), Some(1000));
    }

    #[test]
    fn bad_strings_are_rejected() {
        for s in ["notint", "", "   ", "2.5", "-", "1__0", "_1", "1_", "0x10", "--1"] {
            assert_eq!(to_int(&json!(s)), None, "{s:?} should not coerce");
        }
    }

    #[test]
    fn containers_and_null_are_rejected() {
        assert_eq!(to_int(&Value::Null), None);
        assert_eq!(to_int(&json!([1])), None);
        assert_eq!(to_int(&json!({"a": 1})), None);
    }

    #[test]
    fn as_text_only_accepts_strings() {
        assert_eq!(as_text(&json!("apple")), Some("apple"));
        assert_eq!(as_text(&json!("")), Some(""));
        assert_eq!(as_text(&json!(5)), None);
        assert_eq!(as_text(&Value::Null), None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any i64 rendered as text coerces back to itself.
            #[test]
            fn integer_text_coerces_back(n in any::<i64>()) {
                prop_assert_eq!(to_int(&Value::String(n.to_string())), Some(n));
            }
        }
    }
}
