//! The operator surface of [`Value`].
//!
//! Defaults for a receiver with no specific rule:
//! - `add` concatenates display strings,
//! - `equals` / `not_equals` compare display strings,
//! - everything else fails with `unsupported_operation`.
//!
//! A numeric receiver paired with a non-numeric operand fails with
//! `binary_type_mismatch` naming both types.

use std::cmp::Ordering;

use kon_ir::{BinaryOp, Gate};

use super::numeric::double_to_int;
use super::{NumericPair, Value};
use crate::errors::{
    binary_type_mismatch, index_out_of_bounds, unsupported_operation, EvalResult,
};
use crate::EvalError;

impl Value {
    /// Error for an operator this receiver has no rule for.
    #[cold]
    fn reject(&self, operation: &str, other: &Value) -> EvalError {
        if self.is_numeric() {
            binary_type_mismatch(operation, self.type_name(), other.type_name())
        } else {
            unsupported_operation(operation, self.type_name())
        }
    }

    /// Numeric operator: coerce or reject.
    #[inline]
    fn numeric(&self, operation: &str, other: &Value) -> EvalResult<NumericPair> {
        NumericPair::of(self, other).ok_or_else(|| self.reject(operation, other))
    }

    pub fn add(&self, other: &Value) -> EvalResult {
        match NumericPair::of(self, other) {
            Some(pair) => pair.add(),
            None => Ok(Value::string(format!(
                "{}{}",
                self.display_value(),
                other.display_value()
            ))),
        }
    }

    pub fn subtract(&self, other: &Value) -> EvalResult {
        self.numeric("subtract", other)?.subtract()
    }

    pub fn multiply(&self, other: &Value) -> EvalResult {
        self.numeric("multiply", other)?.multiply()
    }

    pub fn divide(&self, other: &Value) -> EvalResult {
        Ok(self.numeric("divide", other)?.divide())
    }

    pub fn int_divide(&self, other: &Value) -> EvalResult {
        self.numeric("int_divide", other)?.int_divide()
    }

    pub fn modulo(&self, other: &Value) -> EvalResult {
        self.numeric("modulo", other)?.modulo()
    }

    /// Combine two booleans with a gate.
    ///
    /// Both operands must be boolean-coercible, including for `Not`.
    pub fn gate(&self, gate: Gate, other: &Value) -> EvalResult {
        let a = self.as_boolean()?;
        let b = other.as_boolean()?;
        Ok(Value::Bool(gate.apply(a, b)))
    }

    pub fn equals(&self, other: &Value) -> EvalResult {
        let equal = match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => match NumericPair::of(self, other) {
                Some(pair) => pair.compare() == Some(Ordering::Equal),
                None => self.display_value() == other.display_value(),
            },
        };
        Ok(Value::Bool(equal))
    }

    pub fn not_equals(&self, other: &Value) -> EvalResult {
        let equal = self.equals(other)?.as_boolean()?;
        Ok(Value::Bool(!equal))
    }

    pub fn greater_than(&self, other: &Value) -> EvalResult {
        self.compare("greater_than", other, |o| o == Ordering::Greater)
    }

    pub fn less_than(&self, other: &Value) -> EvalResult {
        self.compare("less_than", other, |o| o == Ordering::Less)
    }

    pub fn greater_than_or_equal(&self, other: &Value) -> EvalResult {
        self.compare("greater_than_or_equal", other, |o| o != Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Value) -> EvalResult {
        self.compare("less_than_or_equal", other, |o| o != Ordering::Greater)
    }

    /// IEEE comparison: any comparison involving NaN is false.
    fn compare(
        &self,
        operation: &str,
        other: &Value,
        accept: impl FnOnce(Ordering) -> bool,
    ) -> EvalResult {
        let ordering = self.numeric(operation, other)?.compare();
        Ok(Value::Bool(ordering.is_some_and(accept)))
    }

    /// Boolean coercion. Only booleans are boolean-coercible.
    pub fn as_boolean(&self) -> EvalResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(unsupported_operation("as_boolean", self.type_name())),
        }
    }

    /// Length in characters; strings only.
    pub fn length(&self) -> EvalResult {
        match self {
            Value::Str(s) => {
                let count = i64::try_from(s.chars().count()).unwrap_or(i64::MAX);
                Ok(Value::Int(count))
            }
            _ => Err(unsupported_operation("length", self.type_name())),
        }
    }

    /// Character at an integer position, as a one-character string.
    pub fn index_by(&self, index: &Value) -> EvalResult {
        let Value::Str(s) = self else {
            return Err(unsupported_operation("index_by", self.type_name()));
        };
        let position = match index {
            Value::Int(n) => *n,
            Value::Double(d) if d.fract() == 0.0 => double_to_int(*d, "index_by")?,
            _ => {
                return Err(binary_type_mismatch(
                    "index_by",
                    self.type_name(),
                    index.type_name(),
                ))
            }
        };
        let length = s.chars().count();
        usize::try_from(position)
            .ok()
            .and_then(|i| s.chars().nth(i))
            .map(|c| Value::string(c.to_string()))
            .ok_or_else(|| index_out_of_bounds(position, length))
    }
}

/// Evaluate a binary operator tag against two values.
///
/// This is the single entry point expression nodes use; each tag maps to
/// exactly one operator method.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => left.add(right),
        BinaryOp::Sub => left.subtract(right),
        BinaryOp::Mul => left.multiply(right),
        BinaryOp::Div => left.divide(right),
        BinaryOp::FloorDiv => left.int_divide(right),
        BinaryOp::Mod => left.modulo(right),
        BinaryOp::Eq => left.equals(right),
        BinaryOp::NotEq => left.not_equals(right),
        BinaryOp::Gt => left.greater_than(right),
        BinaryOp::Lt => left.less_than(right),
        BinaryOp::GtEq => left.greater_than_or_equal(right),
        BinaryOp::LtEq => left.less_than_or_equal(right),
        BinaryOp::Gate(gate) => left.gate(gate, right),
    }
}
