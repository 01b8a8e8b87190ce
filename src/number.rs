//!
//! Value coercion for the spinbox.
//!
//! Free-form edit text is reduced to something that can occur in a
//! numeric literal, committed text is parsed with a fallback to the
//! previous value, and values are written back as plain
//! fixed-precision text.
//!

use std::borrow::Cow;

/// Strip every character from the text that cannot occur in a
/// numeric literal.
///
/// Keeps at most one sign up front, one decimal point in the
/// mantissa and one exponent marker after at least one mantissa
/// digit. A sign directly after the exponent marker is kept too.
/// Everything else is dropped.
///
/// Idempotent: filtering filtered text changes nothing.
pub fn filter_edit_text(text: &str) -> Cow<'_, str> {
    let mut out = String::with_capacity(text.len());
    let mut seen_point = false;
    let mut seen_exp = false;
    let mut mantissa_digit = false;
    let mut exp_digit = false;
    let mut exp_sign = false;

    for c in text.chars() {
        match c {
            '0'..='9' => {
                if seen_exp {
                    exp_digit = true;
                } else {
                    mantissa_digit = true;
                }
                out.push(c);
            }
            '+' | '-' => {
                if out.is_empty() {
                    out.push(c);
                } else if seen_exp && !exp_sign && !exp_digit {
                    exp_sign = true;
                    out.push(c);
                }
            }
            '.' => {
                if !seen_point && !seen_exp {
                    seen_point = true;
                    out.push(c);
                }
            }
            'e' | 'E' => {
                if !seen_exp && mantissa_digit {
                    seen_exp = true;
                    out.push(c);
                }
            }
            _ => {}
        }
    }

    if out == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(out)
    }
}

/// Does the text parse as a finite number?
///
/// Out-of-range exponents overflow to infinity and fail this test.
pub fn is_valid_text(text: &str) -> bool {
    matches!(text.trim().parse::<f64>(), Ok(v) if v.is_finite())
}

/// Parse committed text.
///
/// Empty text clears the value. Text that doesn't parse as a finite
/// number leaves the previous value untouched. Never produces NaN.
pub fn parse_commit(text: &str, prev: Option<f64>) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => prev,
        }
    }
}

/// Fixed-precision display text for a value.
pub fn format_fixed(value: f64, digits: u8) -> String {
    format!("{:.*}", digits as usize, value)
}

/// Decimal places needed to write the step width exactly.
///
/// Used to derive the default precision from the step:
/// 0.25 -> 2, 5.0 -> 0. Capped at 15, beyond that f64 has nothing
/// left to say.
pub fn decimal_digits(step: f64) -> u8 {
    for d in 0..15u8 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-9 * scaled.abs().max(1.0) {
            return d;
        }
    }
    15
}
