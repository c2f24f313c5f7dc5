//! Runtime values for the Konstruct runtime.
//!
//! The value set is closed: String, Boolean, Double, Integer. Every operator
//! is an inherent method on [`Value`] that matches exhaustively over the
//! variants (see `ops.rs`), and numeric promotion goes through a single
//! coercion helper (see `numeric.rs`).
//!
//! Values are immutable. Operators take `&self` and return fresh values, so
//! a value handed to one node can be shared freely with any other.

mod numeric;
mod ops;


use std::fmt;
use std::sync::Arc;

pub use numeric::{double_to_int, NumericPair};
pub use ops::evaluate_binary;

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Immutable string payload, shared on clone.
    Str(Arc<str>),
    Bool(bool),
    Double(f64),
    Int(i64),
}

/// Payload-free tag for a [`Value`] variant.
///
/// Used to key per-type tables (member functions) without matching on the
/// payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    Bool,
    Double,
    Int,
}

impl ValueKind {
    /// Type name as shown in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Str => "string",
            ValueKind::Bool => "boolean",
            ValueKind::Double => "double",
            ValueKind::Int => "integer",
        }
    }
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// The empty string, produced by statements that render nothing.
    #[inline]
    pub fn empty() -> Self {
        Value::Str(Arc::from(""))
    }

    #[inline]
    pub const fn boolean(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub const fn double(d: f64) -> Self {
        Value::Double(d)
    }

    #[inline]
    pub const fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Bool(_) => ValueKind::Bool,
            Value::Double(_) => ValueKind::Double,
            Value::Int(_) => ValueKind::Int,
        }
    }

    /// Get the type name of this value.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Double(_) | Value::Int(_))
    }

    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Display value for rendered output.
    ///
    /// Doubles always carry a fractional part when finite and integral
    /// (`5.0`, never `5`), so a double never renders like an integer.
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Double(d) => format_double(*d),
        }
    }
}

fn format_double(d: f64) -> String {
    if d.is_nan() {
        "NaN".to_string()
    } else if d.is_infinite() {
        let sign = if d.is_sign_positive() { "" } else { "-" };
        format!("{sign}inf")
    } else {
        // Debug formatting is shortest round-trip and keeps the `.0`.
        format!("{d:?}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Double(d) => f.write_str(&format_double(*d)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}
