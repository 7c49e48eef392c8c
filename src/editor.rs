//! Numeric string editing
//!
//! Maintains the textual representation of whichever operand is currently
//! being typed:
//! - Digit keys append verbatim
//! - At most one decimal point per operand
//! - Sign toggle strips or prepends a single leading minus
//! - Edits that would exceed the width limit are rejected, not truncated

use crate::error::CalcError;

/// Maximum width of an operand or result, in characters.
pub const MAX_WIDTH: usize = 16;

/// Sentinel for an unrepresentable or erroneous arithmetic outcome.
///
/// Absorbing: once an operand holds it, further edits and operations leave
/// it unchanged. A clear key is the only way out.
pub const INVALID_RESULT: &str = "NaN";

/// Key identifier for the sign toggle.
pub const SIGN_KEY: &str = "\u{b1}";

/// Key identifier for the decimal point.
pub const DECIMAL_KEY: &str = ".";

/// Apply one edit key to the operand string being typed.
///
/// `current` may be empty (entry just started). The caller guarantees the
/// key was classified as an edit key; exactly one of the three edit rules
/// applies per call.
pub fn update_string(current: &str, key: &str) -> Result<String, CalcError> {
    if current == INVALID_RESULT {
        return Ok(current.to_string());
    }

    let candidate = if key == SIGN_KEY {
        toggle_sign(current)?
    } else if key == DECIMAL_KEY {
        if current.contains('.') {
            current.to_string()
        } else {
            format!("{current}.")
        }
    } else if is_digit_key(key) {
        format!("{current}{key}")
    } else {
        return Err(CalcError::UnrecognizedKey {
            key: key.to_string(),
        });
    };

    if candidate.len() > MAX_WIDTH {
        Ok(current.to_string())
    } else {
        Ok(candidate)
    }
}

/// True if `key` is a single ASCII digit.
pub fn is_digit_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_digit()
    )
}

/// Strip exactly one leading minus, or prepend one.
///
/// A minus sign anywhere other than position 0 means the operand was never
/// produced by this editor and the invariant is broken.
fn toggle_sign(current: &str) -> Result<String, CalcError> {
    if let Some(stripped) = current.strip_prefix('-') {
        Ok(stripped.to_string())
    } else if current.contains('-') {
        Err(CalcError::InvalidSignState {
            operand: current.to_string(),
        })
    } else {
        Ok(format!("-{current}"))
    }
}
