//! Numeric coercion.
//!
//! Promotion rule: two integers stay integers; any pair involving a double
//! is computed in doubles, converting the integer side. Every numeric
//! operator goes through [`NumericPair::of`] instead of matching operand
//! types itself.

use std::cmp::Ordering;

use super::Value;
use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, not_a_number, EvalResult,
};

/// Two numeric operands brought to a common representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericPair {
    Ints(i64, i64),
    Doubles(f64, f64),
}

impl NumericPair {
    /// Coerce two values to a common numeric representation.
    ///
    /// Returns `None` when either side is not a number.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer to double promotion is the language's numeric rule"
    )]
    pub fn of(left: &Value, right: &Value) -> Option<Self> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => Some(NumericPair::Ints(*a, *b)),
            (Value::Double(a), Value::Double(b)) => Some(NumericPair::Doubles(*a, *b)),
            (Value::Int(a), Value::Double(b)) => Some(NumericPair::Doubles(*a as f64, *b)),
            (Value::Double(a), Value::Int(b)) => Some(NumericPair::Doubles(*a, *b as f64)),
            _ => None,
        }
    }

    /// Both sides as doubles.
    #[expect(
        clippy::cast_precision_loss,
        reason = "true division always works in doubles"
    )]
    fn as_doubles(self) -> (f64, f64) {
        match self {
            NumericPair::Ints(a, b) => (a as f64, b as f64),
            NumericPair::Doubles(a, b) => (a, b),
        }
    }

    pub(crate) fn add(self) -> EvalResult {
        match self {
            NumericPair::Ints(a, b) => a
                .checked_add(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("addition")),
            NumericPair::Doubles(a, b) => Ok(Value::Double(a + b)),
        }
    }

    pub(crate) fn subtract(self) -> EvalResult {
        match self {
            NumericPair::Ints(a, b) => a
                .checked_sub(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("subtraction")),
            NumericPair::Doubles(a, b) => Ok(Value::Double(a - b)),
        }
    }

    pub(crate) fn multiply(self) -> EvalResult {
        match self {
            NumericPair::Ints(a, b) => a
                .checked_mul(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("multiplication")),
            NumericPair::Doubles(a, b) => Ok(Value::Double(a * b)),
        }
    }

    /// True division. Always a double; IEEE semantics for a zero divisor.
    pub(crate) fn divide(self) -> Value {
        let (a, b) = self.as_doubles();
        Value::Double(a / b)
    }

    /// Floor division. Always an integer.
    pub(crate) fn int_divide(self) -> EvalResult {
        match self {
            NumericPair::Ints(a, b) => {
                if b == 0 {
                    return Err(division_by_zero());
                }
                floor_div(a, b)
                    .map(Value::Int)
                    .ok_or_else(|| integer_overflow("floor division"))
            }
            NumericPair::Doubles(a, b) => {
                if b == 0.0 {
                    return Err(division_by_zero());
                }
                double_to_int((a / b).floor(), "floor division").map(Value::Int)
            }
        }
    }

    /// Truncated remainder, taking the sign of the dividend.
    pub(crate) fn modulo(self) -> EvalResult {
        match self {
            NumericPair::Ints(_, 0) => Err(modulo_by_zero()),
            // `i64::MIN % -1` is exactly 0; only the quotient overflows.
            NumericPair::Ints(a, b) => Ok(Value::Int(a.wrapping_rem(b))),
            NumericPair::Doubles(a, b) => Ok(Value::Double(a % b)),
        }
    }

    /// Numeric ordering; `None` when a double side is NaN.
    pub(crate) fn compare(self) -> Option<Ordering> {
        match self {
            NumericPair::Ints(a, b) => Some(a.cmp(&b)),
            NumericPair::Doubles(a, b) => a.partial_cmp(&b),
        }
    }
}

/// Floor division on integers; `None` on overflow (`i64::MIN / -1`).
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Convert an already-integral double to `i64`, rejecting NaN and values
/// outside the `i64` range.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "range is checked before the cast"
)]
pub fn double_to_int(d: f64, operation: &str) -> EvalResult<i64> {
    if !d.is_finite() {
        return Err(not_a_number(operation));
    }
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if d < i64::MIN as f64 || d >= i64::MAX as f64 {
        return Err(integer_overflow(operation));
    }
    Ok(d as i64)
}
