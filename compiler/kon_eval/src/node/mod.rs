//! The node evaluation protocol and the built-in node kinds.
//!
//! A parser produces a tree of [`BoxedNode`]s; evaluation walks it depth
//! first. Every node follows the same rule: evaluate children in order, and
//! hand any blocking [`Outcome`] from a child upward unchanged (usually via
//! [`propagate!`](crate::propagate)). Only [`BlockNode`] turns a `Return`
//! back into a `Continue`.
//!
//! Nodes are trait objects so that a parser can introduce node kinds this
//! crate does not know about.

mod assignment;
mod binary;
mod block;
mod call;
mod control;
mod dot;
mod literal;
mod variable;

use std::fmt;
use std::ops::ControlFlow;

use kon_value::{EvalError, Value};

use crate::stack::ensure_sufficient_stack;
use crate::{EvalContext, NodeResult, Outcome};

pub use assignment::AssignmentNode;
pub use binary::{BinaryNode, NotNode};
pub use block::{BlockNode, RootNode};
pub use call::FunctionNode;
pub use control::{ReturnNode, TerminateNode};
pub use dot::DotNode;
pub use literal::LiteralNode;
pub use variable::VariableNode;

/// An owned, type-erased syntax tree node.
pub type BoxedNode = Box<dyn Node>;

/// A syntax tree node that can be evaluated against a context.
pub trait Node: fmt::Debug {
    /// Direct children, in evaluation order.
    fn children(&self) -> Vec<&dyn Node>;

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult;

    /// One-line description used by [`tree_string`](Node::tree_string).
    fn label(&self) -> String;

    /// Multi-line debug rendering of the subtree.
    ///
    /// ```text
    /// - Root
    /// | - Assign(x)
    /// | | - Literal(integer 1)
    /// ```
    fn tree_string(&self) -> String {
        tree_lines(self).join("\n")
    }
}

fn tree_lines<N: Node + ?Sized>(node: &N) -> Vec<String> {
    let mut lines = vec![format!("- {}", node.label())];
    for child in node.children() {
        let nested = ensure_sufficient_stack(|| tree_lines(child));
        lines.extend(nested.into_iter().map(|line| format!("| {line}")));
    }
    lines
}

/// Evaluate a child node.
///
/// Every node evaluates its children through here, so a tree of any depth
/// grows the stack instead of overflowing it.
#[inline]
pub fn eval_child(node: &dyn Node, ctx: &mut EvalContext) -> NodeResult {
    ensure_sufficient_stack(|| node.evaluate(ctx))
}

/// Drop detached children with room to recurse.
///
/// Dropping a node drops its subtree, one nested call per level. Composite
/// nodes hand their children to this from `Drop` so deep trees are freed
/// without overflowing, the same way they are evaluated.
pub(crate) fn drop_subtree<T>(children: T) {
    ensure_sufficient_stack(move || drop(children));
}

/// Take a boxed child out of its slot, leaving a zero-sized placeholder.
///
/// Boxing a zero-sized type does not allocate.
pub(crate) fn detach(slot: &mut BoxedNode) -> BoxedNode {
    std::mem::replace(slot, Box::new(Detached))
}

/// Stands in for a child that was detached while its parent is dropped.
#[derive(Debug)]
struct Detached;

impl Node for Detached {
    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    fn evaluate(&self, _ctx: &mut EvalContext) -> NodeResult {
        Ok(Outcome::Continue(Value::empty()))
    }

    fn label(&self) -> String {
        "Detached".to_owned()
    }
}

/// Evaluate `nodes` left to right in `ctx`.
///
/// Stops at the first blocking outcome and returns it as `Break`; otherwise
/// returns every produced value.
pub fn evaluate_all(
    ctx: &mut EvalContext,
    nodes: &[BoxedNode],
) -> Result<ControlFlow<Outcome, Vec<Value>>, EvalError> {
    let mut values = Vec::with_capacity(nodes.len());
    for node in nodes {
        match eval_child(&**node, ctx)? {
            Outcome::Continue(value) => values.push(value),
            blocked => return Ok(ControlFlow::Break(blocked)),
        }
    }
    Ok(ControlFlow::Continue(values))
}

/// Borrow a slice of boxed nodes as children.
pub(crate) fn as_children(nodes: &[BoxedNode]) -> impl Iterator<Item = &dyn Node> {
    nodes.iter().map(|node| &**node)
}
