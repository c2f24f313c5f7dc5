use kon_value::{global_redefinition, Value};

use super::{detach, drop_subtree, eval_child, BoxedNode, Node};
use crate::variable::ConstantVariable;
use crate::{propagate, EvalContext, NodeResult, Outcome};

/// Binds the value of an expression to a local name.
///
/// Globals belong to the embedding application and cannot be shadowed by
/// an assignment. Rebinding an existing local replaces it. The node itself
/// renders as the empty string.
#[derive(Debug)]
pub struct AssignmentNode {
    name: String,
    value: BoxedNode,
}

impl AssignmentNode {
    pub fn new(name: impl Into<String>, value: BoxedNode) -> Self {
        AssignmentNode {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for AssignmentNode {
    fn children(&self) -> Vec<&dyn Node> {
        vec![&*self.value]
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        if ctx.has_global(&self.name) {
            return Err(global_redefinition(&self.name));
        }
        let value = propagate!(eval_child(&*self.value, ctx)?);
        ctx.bind_local(self.name.as_str(), ConstantVariable::new(value));
        Ok(Outcome::Continue(Value::empty()))
    }

    fn label(&self) -> String {
        format!("Assign({})", self.name)
    }
}

impl Drop for AssignmentNode {
    fn drop(&mut self) {
        drop_subtree(detach(&mut self.value));
    }
}
