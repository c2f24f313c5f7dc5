//! Top-level entry point: evaluate a template tree to text.

use kon_value::{EvalError, Value};

use crate::node::{eval_child, Node};
use crate::{EvalContext, Outcome};

/// Final result of rendering a tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered {
    /// The tree ran to completion (or returned early); the display string
    /// of its value.
    Complete(String),
    /// A `Terminate` reached the top; the value is the reason.
    Terminated(Value),
}

impl Rendered {
    pub fn is_complete(&self) -> bool {
        matches!(self, Rendered::Complete(_))
    }

    /// The rendered text, if the run completed.
    pub fn text(&self) -> Option<&str> {
        match self {
            Rendered::Complete(text) => Some(text),
            Rendered::Terminated(_) => None,
        }
    }
}

/// Evaluate `node` in `ctx` and turn the outcome into output.
///
/// A `Return` that escapes every block still produces output: the returned
/// value becomes the whole result.
#[tracing::instrument(level = "debug", skip_all, fields(root = %node.label()))]
pub fn render(node: &dyn Node, ctx: &mut EvalContext) -> Result<Rendered, EvalError> {
    let outcome = eval_child(node, ctx)?;
    Ok(match outcome {
        Outcome::Continue(value) | Outcome::Return { value, .. } => {
            Rendered::Complete(value.display_value())
        }
        Outcome::Terminate { value, .. } => {
            tracing::debug!(reason = %value, "render terminated");
            Rendered::Terminated(value)
        }
    })
}
