use kon_ir::ScopeId;

use super::{as_children, detach, drop_subtree, eval_child, BoxedNode, Node};
use crate::members::execute_member;
use crate::{propagate, EvalContext, NodeResult};

/// A member function call on the value of an expression:
/// `receiver.member(args...)`.
#[derive(Debug)]
pub struct DotNode {
    receiver: BoxedNode,
    member: String,
    args: Vec<BoxedNode>,
    scope: Option<ScopeId>,
}

impl DotNode {
    pub fn new(
        receiver: BoxedNode,
        member: impl Into<String>,
        args: Vec<BoxedNode>,
        scope: Option<ScopeId>,
    ) -> Self {
        DotNode {
            receiver,
            member: member.into(),
            args,
            scope,
        }
    }

    pub fn member(&self) -> &str {
        &self.member
    }
}

impl Node for DotNode {
    fn children(&self) -> Vec<&dyn Node> {
        let mut children: Vec<&dyn Node> = vec![&*self.receiver];
        children.extend(as_children(&self.args));
        children
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        let receiver = propagate!(eval_child(&*self.receiver, ctx)?);
        execute_member(ctx, &receiver, &self.member, &self.args, self.scope)
    }

    fn label(&self) -> String {
        format!("Dot(.{})", self.member)
    }
}

impl Drop for DotNode {
    fn drop(&mut self) {
        drop_subtree((detach(&mut self.receiver), std::mem::take(&mut self.args)));
    }
}
