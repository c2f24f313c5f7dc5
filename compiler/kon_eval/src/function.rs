//! Free functions registered on a context.
//!
//! A function receives its arguments as unevaluated nodes, so it decides
//! the evaluation order and may skip arguments entirely. `EagerFunction`
//! covers the common case of "evaluate everything, then compute".

use std::ops::ControlFlow;

use kon_ir::{ArgumentRange, ScopeId};
use kon_value::{undefined_function, wrong_arg_count, EvalResult, Value};

use crate::node::{evaluate_all, BoxedNode};
use crate::{EvalContext, NodeResult, Outcome};

/// A named, arity-checked callable bound to a context.
pub trait Function {
    /// How many argument nodes the function accepts.
    fn argument_range(&self) -> ArgumentRange;

    /// Run the function. `args` has already passed the arity check.
    fn call(&self, ctx: &mut EvalContext, args: &[BoxedNode], scope: Option<ScopeId>)
        -> NodeResult;
}

/// A function whose body works directly on argument nodes.
pub struct NativeFunction<F> {
    range: ArgumentRange,
    body: F,
}

impl<F> NativeFunction<F>
where
    F: Fn(&mut EvalContext, &[BoxedNode], Option<ScopeId>) -> NodeResult,
{
    pub fn new(range: ArgumentRange, body: F) -> Self {
        Self { range, body }
    }
}

impl<F> Function for NativeFunction<F>
where
    F: Fn(&mut EvalContext, &[BoxedNode], Option<ScopeId>) -> NodeResult,
{
    fn argument_range(&self) -> ArgumentRange {
        self.range
    }

    fn call(
        &self,
        ctx: &mut EvalContext,
        args: &[BoxedNode],
        scope: Option<ScopeId>,
    ) -> NodeResult {
        (self.body)(ctx, args, scope)
    }
}

/// A function over already-evaluated argument values.
///
/// Arguments are evaluated left to right; the first blocking outcome is
/// returned as-is and the body never runs.
pub struct EagerFunction<F> {
    range: ArgumentRange,
    body: F,
}

impl<F> EagerFunction<F>
where
    F: Fn(&[Value]) -> EvalResult,
{
    pub fn new(range: ArgumentRange, body: F) -> Self {
        Self { range, body }
    }
}

impl<F> Function for EagerFunction<F>
where
    F: Fn(&[Value]) -> EvalResult,
{
    fn argument_range(&self) -> ArgumentRange {
        self.range
    }

    fn call(&self, ctx: &mut EvalContext, args: &[BoxedNode], _scope: Option<ScopeId>) -> NodeResult {
        match evaluate_all(ctx, args)? {
            ControlFlow::Continue(values) => (self.body)(&values).map(Outcome::Continue),
            ControlFlow::Break(blocked) => Ok(blocked),
        }
    }
}

/// Call a registered function by name.
///
/// Resolves `name`, checks the argument count against the function's range,
/// then runs it one call level deeper. A blocking outcome is returned
/// unchanged; anything else comes back as `Continue`.
#[tracing::instrument(level = "debug", skip(ctx, args), fields(args = args.len()))]
pub fn call_function(
    ctx: &mut EvalContext,
    name: &str,
    args: &[BoxedNode],
    scope: Option<ScopeId>,
) -> NodeResult {
    let function = ctx
        .resolve_function(name)
        .ok_or_else(|| undefined_function(name))?;

    let range = function.argument_range();
    if !range.contains(args.len()) {
        return Err(wrong_arg_count(name, range, args.len()));
    }

    let outcome = ctx.guarded_call(|ctx| function.call(ctx, args, scope))?;
    Ok(outcome.rewrap())
}
