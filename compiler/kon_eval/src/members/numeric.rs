//! Members of `double` and `integer`.

use kon_ir::ArgumentRange;
use kon_value::{double_to_int, integer_overflow, no_such_member, Value};

use super::{MemberCall, MemberFunction};
use crate::{EvalContext, NodeResult, Outcome};

pub(super) static DOUBLE_MEMBERS: &[MemberFunction] = &[
    MemberFunction::new("round", ArgumentRange::none(), round),
    MemberFunction::new("floor", ArgumentRange::none(), floor),
    MemberFunction::new("ceil", ArgumentRange::none(), ceil),
];

pub(super) static INT_MEMBERS: &[MemberFunction] =
    &[MemberFunction::new("abs", ArgumentRange::none(), abs)];

/// Apply `f` to a double receiver and convert the result to an integer.
fn to_integer(call: &MemberCall<'_>, f: fn(f64) -> f64) -> NodeResult {
    let Value::Double(d) = *call.receiver else {
        return Err(no_such_member(call.name, call.receiver.type_name()));
    };
    let n = double_to_int(f(d), call.name)?;
    Ok(Outcome::Continue(Value::int(n)))
}

/// Rounds half away from zero.
fn round(_ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    to_integer(&call, f64::round)
}

fn floor(_ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    to_integer(&call, f64::floor)
}

fn ceil(_ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    to_integer(&call, f64::ceil)
}

fn abs(_ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    let Value::Int(n) = *call.receiver else {
        return Err(no_such_member(call.name, call.receiver.type_name()));
    };
    n.checked_abs()
        .map(|n| Outcome::Continue(Value::int(n)))
        .ok_or_else(|| integer_overflow("abs"))
}
