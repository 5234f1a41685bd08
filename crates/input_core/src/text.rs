//! Value sanitization for input types in the "value" mode.
//!
//! Script writes to `value` (and attribute-driven updates of a clean value)
//! go through the type's value sanitization algorithm before they land.

use std::borrow::Cow;

/// Remove any newline characters from a string (single-line mode).
///
/// Returns a `Cow::Borrowed` if no filtering is needed.
///
/// # Examples
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("hello"), "hello");
/// assert_eq!(filter_single_line("hello\nworld"), "helloworld");
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains('\n') && !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

/// HTML "valid floating-point number" grammar.
///
/// `-?(\d+(\.\d+)?|\.\d+)([eE][+-]?\d+)?`. Leading `+`, whitespace and a
/// trailing `.` are all rejected.
pub fn is_valid_floating_point_number(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if b.first() == Some(&b'-') {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
        if frac_digits == 0 {
            return false;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
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

/// Apply the value sanitization algorithm of `input_type` to `value`.
///
/// Only the types whose sanitization is observable through this crate are
/// handled; everything else passes through unchanged.
pub fn sanitize_value<'a>(input_type: &str, value: &'a str) -> Cow<'a, str> {
    match input_type {
        "text" | "search" | "tel" | "password" => filter_single_line(value),
        "url" | "email" => match filter_single_line(value) {
            Cow::Borrowed(v) => Cow::Borrowed(v.trim_matches(is_ascii_whitespace)),
            Cow::Owned(v) => Cow::Owned(v.trim_matches(is_ascii_whitespace).to_string()),
        },
        "number" => {
            if is_valid_floating_point_number(value) {
                Cow::Borrowed(value)
            } else {
                Cow::Borrowed("")
            }
        }
        _ => Cow::Borrowed(value),
    }
}

fn is_ascii_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}
