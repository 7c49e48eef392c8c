//! Arithmetic evaluation
//!
//! Applies a pending binary operator to two operand strings and formats the
//! result back into a display string. Invalid arithmetic (division by zero,
//! non-finite results, oversized integers) is not an error: it produces the
//! `"NaN"` sentinel, which is absorbing under further operations because the
//! sentinel never parses back to a finite number.

use std::fmt;
use std::str::FromStr;

use crate::editor::{INVALID_RESULT, MAX_WIDTH};
use crate::error::CalcError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(CalcError::UnknownOperator { op: s.to_string() }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        };
        f.write_str(symbol)
    }
}

/// Apply `op` to two operand strings and format the result for display.
///
/// Pure: never touches session state. The controller writes the result back
/// into the left operand.
pub fn operate(op: &str, lhs: &str, rhs: &str) -> Result<String, CalcError> {
    let op = Operator::from_str(op)?;
    Ok(format_result(op.apply(parse_operand(lhs), parse_operand(rhs))))
}

/// Single well-defined operand conversion: fails closed to NaN on anything
/// non-numeric, including the `"NaN"` sentinel and half-typed operands
/// like `"-"` or `"."`.
fn parse_operand(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format a numeric result, applying the overflow rules.
fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return INVALID_RESULT.to_string();
    }
    if value == 0.0 {
        // collapses negative zero
        return "0".to_string();
    }
    let out = value.to_string();
    if out.len() >= MAX_WIDTH {
        handle_overflow(&out)
    } else {
        out
    }
}

/// An oversized fraction is truncated to the display width; an oversized
/// integer cannot be meaningfully truncated and becomes the sentinel.
fn handle_overflow(s: &str) -> String {
    if s.contains('.') {
        s[..MAX_WIDTH].to_string()
    } else {
        INVALID_RESULT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn four_operators() {
        assert_eq!(operate("+", "5", "3").unwrap(), "8");
        assert_eq!(operate("-", "5", "3").unwrap(), "2");
        assert_eq!(operate("*", "2.5", "4").unwrap(), "10");
        assert_eq!(operate("/", "7", "2").unwrap(), "3.5");
    }

    #[test]
    fn integer_results_have_no_fraction() {
        assert_eq!(operate("+", "2", "2").unwrap(), "4");
        assert_eq!(operate("/", "10", "2").unwrap(), "5");
    }

    #[test]
    fn division_by_zero_yields_sentinel() {
        assert_eq!(operate("/", "6", "0").unwrap(), INVALID_RESULT);
        assert_eq!(operate("/", "-6", "0").unwrap(), INVALID_RESULT);
        assert_eq!(operate("/", "0", "0").unwrap(), INVALID_RESULT);
    }

    #[test]
    fn sentinel_operands_are_absorbing() {
        assert_eq!(operate("+", INVALID_RESULT, "5").unwrap(), INVALID_RESULT);
        assert_eq!(operate("*", "5", INVALID_RESULT).unwrap(), INVALID_RESULT);
        assert_eq!(
            operate("-", INVALID_RESULT, INVALID_RESULT).unwrap(),
            INVALID_RESULT
        );
    }

    #[test]
    fn non_numeric_operands_fail_closed() {
        assert_eq!(operate("+", "-", "5").unwrap(), INVALID_RESULT);
        assert_eq!(operate("+", "", "5").unwrap(), INVALID_RESULT);
    }

    #[test]
    fn half_typed_decimals_still_parse() {
        assert_eq!(operate("+", "5.", "1").unwrap(), "6");
        assert_eq!(operate("+", "-.5", "1").unwrap(), "0.5");
    }

    #[test]
    fn negative_zero_displays_as_zero() {
        assert_eq!(operate("*", "0", "-5").unwrap(), "0");
    }

    #[test]
    fn oversized_integer_becomes_sentinel() {
        // 1e16, which prints as 17 digits
        assert_eq!(
            operate("*", "100000000", "100000000").unwrap(),
            INVALID_RESULT
        );
        // exactly MAX_WIDTH digits also overflows
        assert_eq!(
            operate("+", "1234567890123455", "1").unwrap(),
            INVALID_RESULT
        );
    }

    #[test]
    fn oversized_fraction_is_truncated() {
        let out = operate("+", "0.1", "0.2").unwrap();
        assert_eq!(out.len(), MAX_WIDTH);
        assert!(out.starts_with("0.3000"));
    }

    #[test]
    fn results_under_the_width_limit_pass_through() {
        assert_eq!(
            operate("+", "123456789012344", "1").unwrap(),
            "123456789012345"
        );
    }

    #[test]
    fn unknown_operator_is_an_error() {
        assert!(matches!(
            operate("%", "5", "3"),
            Err(CalcError::UnknownOperator { .. })
        ));
        assert!(matches!(
            operate("", "5", "3"),
            Err(CalcError::UnknownOperator { .. })
        ));
    }
}
