use pretty_assertions::assert_eq;

use super::{boxed, eval, lit, var};
use crate::function::call_function;
use crate::node::{BoxedNode, FunctionNode, Node, ReturnNode, TerminateNode};
use crate::{
    ArgumentRange, EagerFunction, EvalConfig, EvalContext, EvalErrorKind, EvalResult,
    NativeFunction, NodeResult, Outcome, ScopeId, Value,
};

fn sum(args: &[Value]) -> EvalResult {
    args.iter().try_fold(Value::int(0), |total, arg| total.add(arg))
}

fn context() -> EvalContext {
    EvalContext::builder()
        .function("sum", EagerFunction::new(ArgumentRange::at_least(1), sum))
        .function(
            "first",
            NativeFunction::new(
                ArgumentRange::between(1, 2),
                |ctx: &mut EvalContext, args: &[BoxedNode], _scope: Option<ScopeId>| {
                    args[0].evaluate(ctx)
                },
            ),
        )
        .build()
        .unwrap()
}

#[test]
fn eager_function_sees_values() {
    let mut ctx = context();
    let node = FunctionNode::new("sum", vec![lit(1_i64), lit(2_i64), lit(0.5)], None);
    assert_eq!(eval(&node, &mut ctx), Outcome::Continue(Value::double(3.5)));
}

#[test]
fn native_function_controls_evaluation() {
    let mut ctx = context();
    // The second argument is never evaluated.
    let node = FunctionNode::new("first", vec![lit("kept"), var("missing")], None);
    assert_eq!(eval(&node, &mut ctx), Outcome::Continue(Value::string("kept")));
}

#[test]
fn unknown_function() {
    let mut ctx = context();
    let err = call_function(&mut ctx, "nope", &[], None).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedFunction {
            name: "nope".to_owned()
        }
    );
}

#[test]
fn arity_is_checked() {
    let mut ctx = context();
    let err = FunctionNode::new("sum", Vec::new(), None)
        .evaluate(&mut ctx)
        .unwrap_err();
    assert_eq!(err.to_string(), "sum expected at least 1 arguments, got 0");

    let err = FunctionNode::new("first", vec![lit(1_i64), lit(2_i64), lit(3_i64)], None)
        .evaluate(&mut ctx)
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ArityMismatch { got: 3, .. }));
}

#[test]
fn blocking_argument_stops_eager_function() {
    let mut ctx = context();
    let node = FunctionNode::new(
        "sum",
        vec![lit(1_i64), boxed(TerminateNode::new(lit("stop"), None))],
        None,
    );
    assert_eq!(
        eval(&node, &mut ctx),
        Outcome::terminating(Value::string("stop"), None)
    );
}

#[test]
fn return_from_native_body_passes_through() {
    let mut ctx = context();
    let scope = Some(ScopeId(9));
    let node = FunctionNode::new(
        "first",
        vec![boxed(ReturnNode::new(lit("early"), scope))],
        scope,
    );
    assert_eq!(
        eval(&node, &mut ctx),
        Outcome::returning(Value::string("early"), scope)
    );
}

fn recurse(ctx: &mut EvalContext, args: &[BoxedNode], scope: Option<ScopeId>) -> NodeResult {
    call_function(ctx, "recurse", args, scope)
}

#[test]
fn call_depth_is_capped() {
    let mut ctx = EvalContext::builder()
        .function("recurse", NativeFunction::new(ArgumentRange::any(), recurse))
        .config(EvalConfig::new().with_max_call_depth(16))
        .build()
        .unwrap();

    let err = call_function(&mut ctx, "recurse", &[], None).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::CallDepthExceeded { limit: 16 });
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn default_depth_allows_deep_recursion() {
    let mut ctx = EvalContext::builder()
        .function("recurse", NativeFunction::new(ArgumentRange::any(), recurse))
        .build()
        .unwrap();

    let err = call_function(&mut ctx, "recurse", &[], None).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::CallDepthExceeded {
            limit: crate::DEFAULT_MAX_CALL_DEPTH
        }
    );
}
