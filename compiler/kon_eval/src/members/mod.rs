//! Member functions: `receiver.name(args...)`.
//!
//! Each value kind has a static table of [`MemberFunction`]s. The set of
//! kinds is closed, so the tables are plain slices selected by matching on
//! [`ValueKind`]; nothing is registered at runtime.
//!
//! # Module Structure
//!
//! - [`string`]: `lower`, `upper`, `trim`, `contains`, `repeat`, `replace`
//! - [`numeric`]: `round`, `floor`, `ceil` on doubles; `abs` on integers

mod numeric;
mod string;

#[cfg(test)]
mod tests;

use kon_ir::{ArgumentRange, ScopeId};
use kon_value::{no_such_member, wrong_arg_count, Value, ValueKind};

use crate::node::{eval_child, BoxedNode};
use crate::{EvalContext, NodeResult};

/// Signature of a member body.
pub type MemberBody = fn(&mut EvalContext, MemberCall<'_>) -> NodeResult;

/// One entry in a per-kind member table.
#[derive(Clone, Copy)]
pub struct MemberFunction {
    pub name: &'static str,
    pub arity: ArgumentRange,
    pub body: MemberBody,
}

impl MemberFunction {
    pub const fn new(name: &'static str, arity: ArgumentRange, body: MemberBody) -> Self {
        MemberFunction { name, arity, body }
    }
}

impl std::fmt::Debug for MemberFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Everything a member body gets besides the context.
///
/// Arguments are still nodes: the body decides which ones to evaluate and
/// in what order, always in the context it was handed.
#[derive(Clone, Copy, Debug)]
pub struct MemberCall<'a> {
    pub name: &'a str,
    pub receiver: &'a Value,
    pub args: &'a [BoxedNode],
    pub scope: Option<ScopeId>,
}

impl MemberCall<'_> {
    /// Evaluate argument `index` in `ctx`.
    pub fn arg(&self, ctx: &mut EvalContext, index: usize) -> NodeResult {
        match self.args.get(index) {
            Some(node) => eval_child(&**node, ctx),
            None => Err(wrong_arg_count(
                self.name,
                ArgumentRange::at_least(index + 1),
                self.args.len(),
            )),
        }
    }
}

/// Member table for a value kind.
pub fn members_of(kind: ValueKind) -> &'static [MemberFunction] {
    match kind {
        ValueKind::Str => string::MEMBERS,
        ValueKind::Double => numeric::DOUBLE_MEMBERS,
        ValueKind::Int => numeric::INT_MEMBERS,
        ValueKind::Bool => &[],
    }
}

/// Find a member function by name on a value kind.
pub fn lookup_member(kind: ValueKind, name: &str) -> Option<&'static MemberFunction> {
    members_of(kind).iter().find(|member| member.name == name)
}

/// Call a member function on `receiver`.
///
/// Checks that the member exists for the receiver's kind and that the
/// argument count is in range, then runs the body one call level deeper.
/// A blocking outcome from the body is returned unchanged; anything else
/// comes back as `Continue`.
#[tracing::instrument(
    level = "debug",
    skip(ctx, receiver, args),
    fields(receiver = receiver.type_name(), args = args.len())
)]
pub fn execute_member(
    ctx: &mut EvalContext,
    receiver: &Value,
    name: &str,
    args: &[BoxedNode],
    scope: Option<ScopeId>,
) -> NodeResult {
    let member = lookup_member(receiver.kind(), name)
        .ok_or_else(|| no_such_member(name, receiver.type_name()))?;

    if !member.arity.contains(args.len()) {
        return Err(wrong_arg_count(name, member.arity, args.len()));
    }

    let call = MemberCall {
        name,
        receiver,
        args,
        scope,
    };
    let outcome = ctx.guarded_call(|ctx| (member.body)(ctx, call))?;
    Ok(outcome.rewrap())
}
