#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::node::{LiteralNode, TerminateNode};
use crate::{EvalConfig, Outcome};
use kon_value::EvalErrorKind;

fn string_arg(s: &str) -> BoxedNode {
    Box::new(LiteralNode::string(s))
}

fn int_arg(n: i64) -> BoxedNode {
    Box::new(LiteralNode::integer(n))
}

fn call(receiver: impl Into<Value>, name: &str, args: &[BoxedNode]) -> NodeResult {
    let mut ctx = EvalContext::new();
    execute_member(&mut ctx, &receiver.into(), name, args, None)
}

fn value_of(result: NodeResult) -> Value {
    match result.unwrap() {
        Outcome::Continue(value) => value,
        other => panic!("expected Continue, got {other:?}"),
    }
}

mod string_members {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lower_and_upper() {
        assert_eq!(
            call("Hi", "lower", &[]).unwrap(),
            Outcome::Continue(Value::string("hi"))
        );
        assert_eq!(value_of(call("Hi", "upper", &[])), Value::string("HI"));
    }

    #[test]
    fn trim() {
        assert_eq!(value_of(call("  pad \n", "trim", &[])), Value::string("pad"));
    }

    #[test]
    fn contains() {
        assert_eq!(
            value_of(call("konstruct", "contains", &[string_arg("struct")])),
            Value::boolean(true)
        );
        assert_eq!(
            value_of(call("v12", "contains", &[int_arg(3)])),
            Value::boolean(false)
        );
    }

    #[test]
    fn repeat() {
        assert_eq!(
            value_of(call("ab", "repeat", &[int_arg(3)])),
            Value::string("ababab")
        );
        assert_eq!(value_of(call("ab", "repeat", &[int_arg(0)])), Value::empty());
        assert!(call("ab", "repeat", &[int_arg(-1)]).is_err());

        let err = call("ab", "repeat", &[string_arg("2")]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::BinaryTypeMismatch { .. }));
    }

    #[test]
    fn repeat_rejects_oversized_results() {
        let err = call("abcd", "repeat", &[int_arg(i64::MAX)]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));

        let err = call("ab", "repeat", &[int_arg(i64::MAX)]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::StringTooLong { .. }));
    }

    #[test]
    fn string_limit_comes_from_config() {
        let mut ctx = EvalContext::with_config(EvalConfig::new().with_max_string_len(8));
        let ab = Value::string("ab");
        assert_eq!(
            value_of(execute_member(&mut ctx, &ab, "repeat", &[int_arg(4)], None)),
            Value::string("abababab")
        );

        let err = execute_member(&mut ctx, &ab, "repeat", &[int_arg(5)], None).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::StringTooLong {
                operation: "repeat".to_owned(),
                length: 10,
                limit: 8,
            }
        );

        let args = [string_arg("b"), string_arg("xxxxxxxx")];
        let err = execute_member(&mut ctx, &ab, "replace", &args, None).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::StringTooLong { length: 9, .. }));
    }

    #[test]
    fn replace() {
        assert_eq!(
            value_of(call("a-b-c", "replace", &[string_arg("-"), string_arg("+")])),
            Value::string("a+b+c")
        );
    }
}

mod numeric_members {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rounding_yields_integers() {
        assert_eq!(value_of(call(2.5, "round", &[])), Value::int(3));
        assert_eq!(value_of(call(-2.5, "round", &[])), Value::int(-3));
        assert_eq!(value_of(call(2.7, "floor", &[])), Value::int(2));
        assert_eq!(value_of(call(-2.2, "floor", &[])), Value::int(-3));
        assert_eq!(value_of(call(2.2, "ceil", &[])), Value::int(3));
    }

    #[test]
    fn rounding_nan_fails() {
        let err = call(f64::NAN, "round", &[]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::NotANumber { .. }));
    }

    #[test]
    fn abs() {
        assert_eq!(value_of(call(-7_i64, "abs", &[])), Value::int(7));
        let err = call(i64::MIN, "abs", &[]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));
    }
}

mod dispatch {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_member() {
        let err = call("Hi", "reverse", &[]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedMember {
                member: "reverse".to_owned(),
                type_name: "string".to_owned(),
            }
        );
    }

    #[test]
    fn booleans_have_no_members() {
        assert!(members_of(ValueKind::Bool).is_empty());
        assert!(call(true, "lower", &[]).is_err());
    }

    #[test]
    fn arity_is_checked_before_the_body() {
        let err = call("Hi", "lower", &[int_arg(1)]).unwrap_err();
        assert_eq!(err.to_string(), "lower expected 0 arguments, got 1");
        assert!(matches!(err.kind, EvalErrorKind::ArityMismatch { got: 1, .. }));
    }

    #[test]
    fn terminate_in_argument_is_returned_unchanged() {
        let stop = Outcome::terminating(Value::string("halt"), Some(ScopeId(4)));
        let halt: BoxedNode = Box::new(TerminateNode::new(string_arg("halt"), Some(ScopeId(4))));
        let args = vec![halt];
        assert_eq!(call("abc", "contains", &args).unwrap(), stop);
    }

    #[test]
    fn lookup_finds_every_table_entry() {
        for kind in [ValueKind::Str, ValueKind::Double, ValueKind::Int] {
            for member in members_of(kind) {
                let found = lookup_member(kind, member.name).unwrap();
                assert_eq!(found.name, member.name);
            }
        }
        assert!(lookup_member(ValueKind::Int, "round").is_none());
    }
}
