//! Evaluation tests that exercise several modules together.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

mod function_tests;
mod node_tests;

use crate::node::{BoxedNode, LiteralNode, Node, VariableNode};
use crate::{EvalContext, Outcome, Value};

pub(crate) fn boxed(node: impl Node + 'static) -> BoxedNode {
    Box::new(node)
}

pub(crate) fn lit(value: impl Into<Value>) -> BoxedNode {
    Box::new(LiteralNode::new(value))
}

pub(crate) fn var(name: &str) -> BoxedNode {
    Box::new(VariableNode::new(name))
}

pub(crate) fn eval(node: &dyn Node, ctx: &mut EvalContext) -> Outcome {
    node.evaluate(ctx).unwrap()
}
