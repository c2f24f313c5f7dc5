use kon_ir::ScopeId;

use super::{detach, drop_subtree, eval_child, BoxedNode, Node};
use crate::{propagate, EvalContext, NodeResult, Outcome};

/// Ends the targeted block early with a value.
#[derive(Debug)]
pub struct ReturnNode {
    value: BoxedNode,
    scope: Option<ScopeId>,
}

impl ReturnNode {
    pub fn new(value: BoxedNode, scope: Option<ScopeId>) -> Self {
        ReturnNode { value, scope }
    }
}

impl Node for ReturnNode {
    fn children(&self) -> Vec<&dyn Node> {
        vec![&*self.value]
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        let value = propagate!(eval_child(&*self.value, ctx)?);
        Ok(Outcome::returning(value, self.scope))
    }

    fn label(&self) -> String {
        "Return".to_owned()
    }
}

impl Drop for ReturnNode {
    fn drop(&mut self) {
        drop_subtree(detach(&mut self.value));
    }
}

/// Aborts the whole run; the value is the reason reported to the caller.
#[derive(Debug)]
pub struct TerminateNode {
    value: BoxedNode,
    scope: Option<ScopeId>,
}

impl TerminateNode {
    pub fn new(value: BoxedNode, scope: Option<ScopeId>) -> Self {
        TerminateNode { value, scope }
    }
}

impl Node for TerminateNode {
    fn children(&self) -> Vec<&dyn Node> {
        vec![&*self.value]
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        let value = propagate!(eval_child(&*self.value, ctx)?);
        Ok(Outcome::terminating(value, self.scope))
    }

    fn label(&self) -> String {
        "Terminate".to_owned()
    }
}

impl Drop for TerminateNode {
    fn drop(&mut self) {
        drop_subtree(detach(&mut self.value));
    }
}
