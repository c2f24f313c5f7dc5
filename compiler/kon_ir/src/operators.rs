//! Binary operator tags.

use crate::Gate;

/// Binary operators understood by the value system.
///
/// Boolean combinators are carried as `Gate(..)` so every gate is reachable
/// from an expression without a separate operator per gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,

    // Logical
    Gate(Gate),
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::Gate(gate) => gate.name(),
        }
    }

    /// Name of the value-level operation this operator maps to.
    pub const fn operation_name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::FloorDiv => "int_divide",
            Self::Mod => "modulo",
            Self::Eq => "equals",
            Self::NotEq => "not_equals",
            Self::Gt => "greater_than",
            Self::Lt => "less_than",
            Self::GtEq => "greater_than_or_equal",
            Self::LtEq => "less_than_or_equal",
            Self::Gate(_) => "gate",
        }
    }

    /// Whether the right operand can be skipped once the left one is known.
    pub const fn short_circuits(self) -> bool {
        matches!(self, Self::Gate(Gate::And | Gate::Or))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_symbol_is_gate_name() {
        assert_eq!(BinaryOp::Gate(Gate::Xnor).as_symbol(), "XNOR");
    }

    #[test]
    fn test_short_circuit_ops() {
        assert!(BinaryOp::Gate(Gate::And).short_circuits());
        assert!(BinaryOp::Gate(Gate::Or).short_circuits());
        assert!(!BinaryOp::Gate(Gate::Xor).short_circuits());
        assert!(!BinaryOp::Add.short_circuits());
    }
}
