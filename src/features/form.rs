//! Form helpers shared by the add/edit dialogs
//!
//! The dialogs only check that required fields are present and turn the
//! numeric inputs into numbers; everything else is passed through as typed.

use crate::error::{Error, Result};

/// Value of a required field exactly as typed, or an error naming the field
///
/// Only an empty input is refused; whitespace counts as content.
pub fn required(field: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::Invalid {
            message: format!("{field} is required"),
        });
    }
    Ok(value.to_string())
}

/// Leading integer of `text`, or 0 when there is none
///
/// `"42"` → 42, `" 7 forms"` → 7, `"-3"` → -3, `"abc"` → 0.
pub fn coerce_int(text: &str) -> i64 {
    let s = text.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|n| sign * n)
        .unwrap_or(0)
}

/// Error for a field name the form does not have
pub fn unknown_field(form: &str, field: &str) -> Error {
    Error::Invalid {
        message: format!("{form} form has no field '{field}'"),
    }
}
