use kon_ir::{BinaryOp, Gate};
use kon_value::{evaluate_binary, Value};

use super::{detach, drop_subtree, eval_child, BoxedNode, Node};
use crate::{propagate, EvalContext, NodeResult, Outcome};

/// A binary operator applied to two expressions.
///
/// The left operand is evaluated first. `AND` and `OR` skip the right
/// operand when the left one already decides the result; the left operand
/// must then be a boolean.
#[derive(Debug)]
pub struct BinaryNode {
    op: BinaryOp,
    left: BoxedNode,
    right: BoxedNode,
}

impl BinaryNode {
    pub fn new(op: BinaryOp, left: BoxedNode, right: BoxedNode) -> Self {
        BinaryNode { op, left, right }
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }
}

impl Node for BinaryNode {
    fn children(&self) -> Vec<&dyn Node> {
        vec![&*self.left, &*self.right]
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        let left = propagate!(eval_child(&*self.left, ctx)?);

        if self.op.short_circuits() {
            let decided = left.as_boolean()?;
            // AND stops on false, OR stops on true.
            if decided == matches!(self.op, BinaryOp::Gate(Gate::Or)) {
                return Ok(Outcome::Continue(Value::boolean(decided)));
            }
        }

        let right = propagate!(eval_child(&*self.right, ctx)?);
        evaluate_binary(&left, &right, self.op).map(Outcome::Continue)
    }

    fn label(&self) -> String {
        format!("Binary({})", self.op.as_symbol())
    }
}

impl Drop for BinaryNode {
    fn drop(&mut self) {
        drop_subtree((detach(&mut self.left), detach(&mut self.right)));
    }
}

/// Boolean negation.
#[derive(Debug)]
pub struct NotNode {
    operand: BoxedNode,
}

impl NotNode {
    pub fn new(operand: BoxedNode) -> Self {
        NotNode { operand }
    }
}

impl Node for NotNode {
    fn children(&self) -> Vec<&dyn Node> {
        vec![&*self.operand]
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        let operand = propagate!(eval_child(&*self.operand, ctx)?);
        operand.gate(Gate::Not, &operand).map(Outcome::Continue)
    }

    fn label(&self) -> String {
        "Not".to_owned()
    }
}

impl Drop for NotNode {
    fn drop(&mut self) {
        drop_subtree(detach(&mut self.operand));
    }
}
