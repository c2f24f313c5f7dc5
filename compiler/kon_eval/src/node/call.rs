use kon_ir::ScopeId;

use super::{as_children, drop_subtree, BoxedNode, Node};
use crate::function::call_function;
use crate::{EvalContext, NodeResult};

/// A call to a registered free function: `name(args...)`.
#[derive(Debug)]
pub struct FunctionNode {
    name: String,
    args: Vec<BoxedNode>,
    scope: Option<ScopeId>,
}

impl FunctionNode {
    pub fn new(name: impl Into<String>, args: Vec<BoxedNode>, scope: Option<ScopeId>) -> Self {
        FunctionNode {
            name: name.into(),
            args,
            scope,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for FunctionNode {
    fn children(&self) -> Vec<&dyn Node> {
        as_children(&self.args).collect()
    }

    fn evaluate(&self, ctx: &mut EvalContext) -> NodeResult {
        call_function(ctx, &self.name, &self.args, self.scope)
    }

    fn label(&self) -> String {
        format!("Function({})", self.name)
    }
}

impl Drop for FunctionNode {
    fn drop(&mut self) {
        drop_subtree(std::mem::take(&mut self.args));
    }
}
