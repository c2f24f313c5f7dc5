
use super::{boxed, eval, lit, var};
use crate::node::{
    AssignmentNode, BinaryNode, BoxedNode, DotNode, LiteralNode, Node, NotNode, RootNode,
    TerminateNode,
};
use crate::{
    BinaryOp, ConstantVariable, EvalContext, EvalErrorKind, Gate, Outcome, ScopeId, Value,
};

mod literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn evaluate_to_their_value() {
        let mut ctx = EvalContext::new();
        assert_eq!(
            eval(&LiteralNode::boolean(true), &mut ctx),
            Outcome::Continue(Value::boolean(true))
        );
        assert_eq!(
            eval(&LiteralNode::double(1.5), &mut ctx),
            Outcome::Continue(Value::double(1.5))
        );
        assert_eq!(
            eval(&LiteralNode::integer(-3), &mut ctx),
            Outcome::Continue(Value::int(-3))
        );
        assert!(LiteralNode::string("x").children().is_empty());
    }
}

mod variables {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::node::VariableNode;

    #[test]
    fn unknown_variable_fails() {
        let mut ctx = EvalContext::new();
        let err = VariableNode::new("missing").evaluate(&mut ctx).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedVariable {
                name: "missing".to_owned()
            }
        );
    }

}

mod assignment {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn binds_local_and_renders_empty() {
        let mut ctx = EvalContext::new();
        let node = AssignmentNode::new("x", lit(5_i64));
        assert_eq!(eval(&node, &mut ctx), Outcome::Continue(Value::empty()));
        assert_eq!(ctx.resolve_variable("x"), Some(Value::int(5)));
    }

    #[test]
    fn second_assignment_wins() {
        let mut ctx = EvalContext::new();
        eval(&AssignmentNode::new("x", lit(1_i64)), &mut ctx);
        eval(&AssignmentNode::new("x", lit("two")), &mut ctx);
        assert_eq!(ctx.resolve_variable("x"), Some(Value::string("two")));
    }

    #[test]
    fn global_cannot_be_reassigned() {
        let mut ctx = EvalContext::new();
        ctx.define_global("site", ConstantVariable::new("kon"));
        let err = AssignmentNode::new("site", lit(1_i64))
            .evaluate(&mut ctx)
            .unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::GlobalRedefinition { .. }));
        assert!(!ctx.has_local("site"));
    }

    #[test]
    fn blocking_value_skips_the_binding() {
        let mut ctx = EvalContext::new();
        let stop = boxed(TerminateNode::new(lit("stop"), None));
        let outcome = eval(&AssignmentNode::new("x", stop), &mut ctx);
        assert!(outcome.is_terminating());
        assert!(!ctx.has_local("x"));
    }
}

mod dot {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn calls_member_on_receiver_value() {
        let mut ctx = EvalContext::new();
        let node = DotNode::new(lit("Hi"), "lower", Vec::new(), None);
        assert_eq!(eval(&node, &mut ctx), Outcome::Continue(Value::string("hi")));
    }

    #[test]
    fn receiver_can_be_a_variable() {
        let mut ctx = EvalContext::new();
        ctx.bind_local("name", ConstantVariable::new("Ada"));
        let node = DotNode::new(var("name"), "upper", Vec::new(), None);
        assert_eq!(eval(&node, &mut ctx), Outcome::Continue(Value::string("ADA")));
    }

    #[test]
    fn terminate_in_argument_propagates_unchanged() {
        let mut ctx = EvalContext::new();
        let scope = Some(ScopeId(7));
        let args = vec![boxed(TerminateNode::new(lit("bail"), scope))];
        let node = DotNode::new(lit("abc"), "contains", args, None);
        assert_eq!(
            eval(&node, &mut ctx),
            Outcome::terminating(Value::string("bail"), scope)
        );
    }

    #[test]
    fn terminate_in_receiver_skips_dispatch() {
        let mut ctx = EvalContext::new();
        let receiver = boxed(TerminateNode::new(lit(1_i64), None));
        // `no_such_member` would fire if dispatch ran.
        let node = DotNode::new(receiver, "nope", Vec::new(), None);
        assert!(eval(&node, &mut ctx).is_terminating());
    }
}

mod operators {
    use super::*;
    use pretty_assertions::assert_eq;

    fn binary(op: BinaryOp, left: BoxedNode, right: BoxedNode) -> Outcome {
        eval(&BinaryNode::new(op, left, right), &mut EvalContext::new())
    }

    #[test]
    fn arithmetic_uses_value_rules() {
        assert_eq!(
            binary(BinaryOp::Add, lit(1_i64), lit(0.5)),
            Outcome::Continue(Value::double(1.5))
        );
        assert_eq!(
            binary(BinaryOp::FloorDiv, lit(7.0), lit(2_i64)),
            Outcome::Continue(Value::int(3))
        );
        assert_eq!(
            binary(BinaryOp::Add, lit("n="), lit(4_i64)),
            Outcome::Continue(Value::string("n=4"))
        );
    }

    #[test]
    fn and_or_short_circuit() {
        // The right operand would fail with an unknown variable.
        assert_eq!(
            binary(BinaryOp::Gate(Gate::And), lit(false), var("missing")),
            Outcome::Continue(Value::boolean(false))
        );
        assert_eq!(
            binary(BinaryOp::Gate(Gate::Or), lit(true), var("missing")),
            Outcome::Continue(Value::boolean(true))
        );
        assert_eq!(
            binary(BinaryOp::Gate(Gate::And), lit(true), lit(false)),
            Outcome::Continue(Value::boolean(false))
        );
    }

    #[test]
    fn other_gates_evaluate_both_sides() {
        let mut ctx = EvalContext::new();
        let node = BinaryNode::new(BinaryOp::Gate(Gate::Xor), lit(true), var("missing"));
        assert!(node.evaluate(&mut ctx).is_err());
    }

    #[test]
    fn left_blocking_skips_right() {
        let stop = boxed(TerminateNode::new(lit("left"), None));
        let outcome = binary(BinaryOp::Add, stop, var("missing"));
        assert_eq!(outcome, Outcome::terminating(Value::string("left"), None));
    }

    #[test]
    fn not_requires_a_boolean() {
        let mut ctx = EvalContext::new();
        assert_eq!(
            eval(&NotNode::new(lit(false)), &mut ctx),
            Outcome::Continue(Value::boolean(true))
        );
        assert!(NotNode::new(lit(1_i64)).evaluate(&mut ctx).is_err());
    }
}

mod root {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn concatenates_children_in_one_scope() {
        let mut ctx = EvalContext::new();
        let root = RootNode::new(vec![
            boxed(AssignmentNode::new("x", lit(2_i64))),
            lit("x="),
            var("x"),
            lit(", half="),
            boxed(BinaryNode::new(BinaryOp::Div, var("x"), lit(4_i64))),
        ]);
        assert_eq!(
            eval(&root, &mut ctx),
            Outcome::Continue(Value::string("x=2, half=0.5"))
        );
        assert!(ctx.has_local("x"));
    }

    #[test]
    fn tree_string_indents_children() {
        let root = RootNode::new(vec![
            boxed(AssignmentNode::new("x", lit(1_i64))),
            boxed(DotNode::new(lit("Hi"), "lower", Vec::new(), None)),
        ]);
        let expected = [
            "- Root",
            "| - Assign(x)",
            "| | - Literal(integer 1)",
            "| - Dot(.lower)",
            "| | - Literal(string \"Hi\")",
        ]
        .join("\n");
        assert_eq!(root.tree_string(), expected);
    }
}
