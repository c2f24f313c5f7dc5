use kon_value::Value;

use super::Node;
use crate::{EvalContext, NodeResult, Outcome};

/// A constant value written directly in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralNode {
    value: Value,
}

impl LiteralNode {
    pub fn new(value: impl Into<Value>) -> Self {
        LiteralNode {
            value: value.into(),
        }
    }

    pub fn boolean(b: bool) -> Self {
        Self::new(Value::boolean(b))
    }

    pub fn double(d: f64) -> Self {
        Self::new(Value::double(d))
    }

    pub fn integer(n: i64) -> Self {
        Self::new(Value::int(n))
    }

    pub fn string(s: &str) -> Self {
        Self::new(Value::string(s))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Node for LiteralNode {
    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    fn evaluate(&self, _ctx: &mut EvalContext) -> NodeResult {
        Ok(Outcome::Continue(self.value.clone()))
    }

    fn label(&self) -> String {
        match &self.value {
            Value::Str(s) => format!("Literal(string {s:?})"),
            other => format!("Literal({} {other})", other.type_name()),
        }
    }
}
