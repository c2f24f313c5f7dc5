//! Variables: zero-argument producers of values.

use kon_value::Value;

/// Something a name can be bound to.
///
/// A variable is asked for its value every time it is resolved, so computed
/// variables (clocks, counters, lookups into application state) see fresh
/// data on each read. Any `Fn() -> Value` closure is a variable.
pub trait Variable {
    fn value(&self) -> Value;
}

/// A variable that always produces the same value.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantVariable(Value);

impl ConstantVariable {
    pub fn new(value: impl Into<Value>) -> Self {
        ConstantVariable(value.into())
    }
}

impl Variable for ConstantVariable {
    fn value(&self) -> Value {
        self.0.clone()
    }
}

impl<F> Variable for F
where
    F: Fn() -> Value,
{
    fn value(&self) -> Value {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constant() {
        let var = ConstantVariable::new("hello");
        assert_eq!(var.value(), Value::string("hello"));
        assert_eq!(var.value(), Value::string("hello"));
    }

    #[test]
    fn test_computed_is_read_each_time() {
        let counter = Cell::new(0_i64);
        let var = || {
            counter.set(counter.get() + 1);
            Value::int(counter.get())
        };
        assert_eq!(var.value(), Value::int(1));
        assert_eq!(var.value(), Value::int(2));
    }
}
