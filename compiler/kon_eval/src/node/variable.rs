use kon_value::undefined_variable;

use super::Node;
use crate::{EvalContext, NodeResult, Outcome};

/// A reference to a named variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableNode {
    name: String,
}

impl VariableNode {
    pub fn new(name: impl Into<String>) -> Self {
        VariableNode { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for VariableNode {
    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        ctx.resolve_variable(&self.name)
            .map(Outcome::Continue)
            .ok_or_else(|| undefined_variable(&self.name))
    }

    fn label(&self) -> String {
        format!("Variable({})", self.name)
    }
}
