//! Members of `string`.

use kon_ir::ArgumentRange;
use kon_value::{binary_type_mismatch, integer_overflow, string_too_long, EvalError, Value};

use super::{MemberCall, MemberFunction};
use crate::{propagate, EvalContext, NodeResult, Outcome};

pub(super) static MEMBERS: &[MemberFunction] = &[
    MemberFunction::new("lower", ArgumentRange::none(), lower),
    MemberFunction::new("upper", ArgumentRange::none(), upper),
    MemberFunction::new("trim", ArgumentRange::none(), trim),
    MemberFunction::new("contains", ArgumentRange::exact(1), contains),
    MemberFunction::new("repeat", ArgumentRange::exact(1), repeat),
    MemberFunction::new("replace", ArgumentRange::exact(2), replace),
];

fn text<'a>(call: &MemberCall<'a>) -> &'a str {
    call.receiver.as_str().unwrap_or_default()
}

fn done(s: impl Into<String>) -> NodeResult {
    Ok(Outcome::Continue(Value::string(s.into())))
}

/// Reject a result longer than the context allows, before building it.
fn check_length(ctx: &EvalContext, operation: &str, length: usize) -> Result<(), EvalError> {
    let limit = ctx.config().max_string_len;
    if length > limit {
        return Err(string_too_long(operation, length, limit));
    }
    Ok(())
}

fn lower(_ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    done(text(&call).to_lowercase())
}

fn upper(_ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    done(text(&call).to_uppercase())
}

fn trim(_ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    done(text(&call).trim())
}

/// Substring test against the argument's display string.
fn contains(ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    let needle = propagate!(call.arg(ctx, 0)?);
    let found = text(&call).contains(needle.display_value().as_str());
    Ok(Outcome::Continue(Value::boolean(found)))
}

fn repeat(ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    let count = propagate!(call.arg(ctx, 0)?);
    let Value::Int(n) = count else {
        return Err(binary_type_mismatch(
            "repeat",
            call.receiver.type_name(),
            count.type_name(),
        ));
    };
    let n = usize::try_from(n)
        .map_err(|_| EvalError::new(format!("repeat count must not be negative, got {n}")))?;
    let source = text(&call);
    let length = source
        .len()
        .checked_mul(n)
        .ok_or_else(|| integer_overflow("repeat"))?;
    check_length(ctx, "repeat", length)?;
    done(source.repeat(n))
}

/// Replace every occurrence of the first argument with the second.
fn replace(ctx: &mut EvalContext, call: MemberCall<'_>) -> NodeResult {
    let from = propagate!(call.arg(ctx, 0)?).display_value();
    let to = propagate!(call.arg(ctx, 1)?).display_value();
    let source = text(&call);
    let count = source.matches(from.as_str()).count();
    // Matches never overlap, so `count * from.len()` fits inside `source`.
    let kept = source.len() - count * from.len();
    let length = count
        .checked_mul(to.len())
        .and_then(|added| kept.checked_add(added))
        .ok_or_else(|| integer_overflow("replace"))?;
    check_length(ctx, "replace", length)?;
    done(source.replace(from.as_str(), &to))
}
