//! ECMAScript-compatible coercions between prop values and DOM strings.
//!
//! DOM properties are strings; props are loosely typed. These helpers pin
//! down exactly how a prop turns into the string written to the element and
//! how an element string compares against a prop.

use crate::props::PropValue;

/// Keep values that have a meaningful string form; functions and symbols
/// become the empty string.
pub fn to_string_value(value: &PropValue) -> PropValue {
    match value {
        PropValue::Function | PropValue::Symbol => PropValue::Str(String::new()),
        other => other.clone(),
    }
}

/// `'' + value`.
pub fn stringify(value: &PropValue) -> String {
    match value {
        PropValue::Null => "null".to_string(),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Number(n) => js_number_to_string(*n),
        PropValue::Str(s) => s.clone(),
        PropValue::Function | PropValue::Symbol => String::new(),
    }
}

/// `!!value`, except that functions and symbols count as false.
pub fn truthy(value: &PropValue) -> bool {
    match value {
        PropValue::Null | PropValue::Function | PropValue::Symbol => false,
        PropValue::Bool(b) => *b,
        PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
        PropValue::Str(s) => !s.is_empty(),
    }
}

/// `node_value == value` with ECMAScript abstract equality.
///
/// Strings compare exactly; numbers and booleans compare against the
/// element string converted with `ToNumber`, so `"5.0" == 5` and `"" == 0`.
pub fn loosely_equal(node_value: &str, value: &PropValue) -> bool {
    match value {
        PropValue::Str(s) => node_value == s,
        PropValue::Number(n) => js_string_to_number(node_value) == *n,
        PropValue::Bool(b) => js_string_to_number(node_value) == f64::from(u8::from(*b)),
        PropValue::Null | PropValue::Function | PropValue::Symbol => false,
    }
}

/// `Number.prototype.toString()` for radix 10.
pub fn js_number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0.
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }

    let s = format!("{n:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// `ToNumber` applied to a string.
pub fn js_string_to_number(s: &str) -> f64 {
    let t = s.trim_matches(is_js_whitespace);
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ] {
        if let Some(digits) = t.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            return digits.chars().fold(0.0, |acc, c| {
                acc * radix as f64 + c.to_digit(radix).unwrap_or(0) as f64
            });
        }
    }

    if is_decimal_literal(t) {
        t.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// `[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?`
fn is_decimal_literal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let mut digits = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == b.len()
}
