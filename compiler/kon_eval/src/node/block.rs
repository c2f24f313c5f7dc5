use kon_ir::ScopeId;
use kon_value::Value;

use super::{as_children, drop_subtree, eval_child, BoxedNode, Node};
use crate::stack::ensure_sufficient_stack;
use crate::{propagate, EvalContext, NodeResult, Outcome};

/// Evaluate `children` in order and join their display strings.
fn concatenate(ctx: &mut EvalContext, children: &[BoxedNode]) -> NodeResult {
    let mut rendered = String::new();
    for child in children {
        let value = propagate!(eval_child(&**child, ctx)?);
        rendered.push_str(&value.display_value());
    }
    Ok(Outcome::Continue(Value::string(rendered)))
}

/// The top of a template: text and expressions rendered in sequence.
///
/// Children share the caller's context, so assignments made by one child
/// are visible to the ones after it and to the caller.
#[derive(Debug, Default)]
pub struct RootNode {
    children: Vec<BoxedNode>,
}

impl RootNode {
    pub fn new(children: Vec<BoxedNode>) -> Self {
        RootNode { children }
    }
}

impl Node for RootNode {
    fn children(&self) -> Vec<&dyn Node> {
        as_children(&self.children).collect()
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        concatenate(ctx, &self.children)
    }

    fn label(&self) -> String {
        "Root".to_owned()
    }
}

impl Drop for RootNode {
    fn drop(&mut self) {
        drop_subtree(std::mem::take(&mut self.children));
    }
}

/// A nested scope.
///
/// Children run in a fork of the context: locals bound inside stay inside.
/// A `Return` aimed at this block, or at no block in particular, ends the
/// block with the returned value. Any other blocking outcome passes through.
#[derive(Debug)]
pub struct BlockNode {
    children: Vec<BoxedNode>,
    scope: Option<ScopeId>,
}

impl BlockNode {
    pub fn new(children: Vec<BoxedNode>, scope: Option<ScopeId>) -> Self {
        BlockNode { children, scope }
    }

    pub fn scope(&self) -> Option<ScopeId> {
        self.scope
    }
}

impl Node for BlockNode {
    fn children(&self) -> Vec<&dyn Node> {
        as_children(&self.children).collect()
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        let mut inner = ctx.fork();
        let outcome = ensure_sufficient_stack(|| concatenate(&mut inner, &self.children))?;
        match outcome {
            Outcome::Return { value, scope } if scope.is_none() || scope == self.scope => {
                tracing::trace!(?scope, block = ?self.scope, "return absorbed by block");
                Ok(Outcome::Continue(value))
            }
            blocked @ (Outcome::Return { .. } | Outcome::Terminate { .. }) => {
                tracing::trace!(signal = ?blocked.signal(), block = ?self.scope, "unwinding past block");
                Ok(blocked)
            }
            done @ Outcome::Continue(_) => Ok(done),
        }
    }

    fn label(&self) -> String {
        match self.scope {
            Some(scope) => format!("Block({scope})"),
            None => "Block".to_owned(),
        }
    }
}

impl Drop for BlockNode {
    fn drop(&mut self) {
        drop_subtree(std::mem::take(&mut self.children));
    }
}
