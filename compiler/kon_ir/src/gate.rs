//! Boolean gates used by the boolean `gate` operator.

use std::fmt;
use std::str::FromStr;

/// A named boolean combinator.
///
/// Gates are pure functions of their tag: `apply` never fails and never
/// looks at anything but its two inputs. `Not` is unary and ignores `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
    Not,
}

impl Gate {
    /// Every gate, in declaration order.
    pub const ALL: [Gate; 7] = [
        Gate::And,
        Gate::Or,
        Gate::Xor,
        Gate::Nand,
        Gate::Nor,
        Gate::Xnor,
        Gate::Not,
    ];

    /// Apply the gate to two inputs.
    #[inline]
    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Gate::And => a && b,
            Gate::Or => a || b,
            Gate::Xor => a != b,
            Gate::Nand => !(a && b),
            Gate::Nor => !(a || b),
            Gate::Xnor => a == b,
            Gate::Not => !a,
        }
    }

    /// Whether the gate only reads its first input.
    #[inline]
    pub const fn is_unary(self) -> bool {
        matches!(self, Gate::Not)
    }

    /// Upper-case gate name as written in source (`"AND"`, `"XNOR"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Xor => "XOR",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
            Gate::Xnor => "XNOR",
            Gate::Not => "NOT",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Gate::from_str`] for a name that is not a gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownGate(pub String);

impl fmt::Display for UnknownGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gate: {}", self.0)
    }
}

impl std::error::Error for UnknownGate {}

impl FromStr for Gate {
    type Err = UnknownGate;

    /// Parse a gate name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gate::ALL
            .into_iter()
            .find(|gate| gate.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INPUTS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

    fn table(gate: Gate) -> [bool; 4] {
        INPUTS.map(|(a, b)| gate.apply(a, b))
    }

    #[test]
    fn test_truth_tables() {
        assert_eq!(table(Gate::And), [false, false, false, true]);
        assert_eq!(table(Gate::Or), [false, true, true, true]);
        assert_eq!(table(Gate::Xor), [false, true, true, false]);
        assert_eq!(table(Gate::Nand), [true, true, true, false]);
        assert_eq!(table(Gate::Nor), [true, false, false, false]);
        assert_eq!(table(Gate::Xnor), [true, false, false, true]);
        assert_eq!(table(Gate::Not), [true, true, false, false]);
    }

    #[test]
    fn test_not_ignores_second_input() {
        assert_eq!(Gate::Not.apply(true, true), Gate::Not.apply(true, false));
        assert_eq!(Gate::Not.apply(false, true), Gate::Not.apply(false, false));
    }

    #[test]
    fn test_only_not_is_unary() {
        let unary: Vec<_> = Gate::ALL.into_iter().filter(|g| g.is_unary()).collect();
        assert_eq!(unary, vec![Gate::Not]);
    }

    #[test]
    fn test_parse_names() {
        for gate in Gate::ALL {
            assert_eq!(gate.name().parse::<Gate>(), Ok(gate));
            assert_eq!(gate.name().to_lowercase().parse::<Gate>(), Ok(gate));
        }
        assert_eq!(
            "MAYBE".parse::<Gate>(),
            Err(UnknownGate("MAYBE".to_string()))
        );
    }
}
