//! Kon Eval - tree-walking evaluator for the Konstruct template language.
//!
//! A parser hands this crate a tree of [`Node`]s and a root [`EvalContext`];
//! [`render`] walks the tree and produces text.
//!
//! # Architecture
//!
//! - [`Outcome`] / [`Signal`]: what every node evaluation returns, including
//!   the `Return` and `Terminate` control-flow signals
//! - [`EvalContext`]: globals, locals and the function registry, with
//!   [`fork`](EvalContext::fork) for nested scopes
//! - [`Variable`] / [`Function`]: what names are bound to
//! - [`members`]: static per-kind member tables and [`execute_member`]
//! - [`node`]: the [`Node`] protocol and the built-in node kinds
//!
//! Values and errors come from `kon_value`; operator and gate tags from
//! `kon_ir`. Both are re-exported so embedders only need this crate.

mod config;
mod context;
mod function;
pub mod members;
pub mod node;
mod outcome;
mod render;
mod shared;
mod stack;
mod tracing_setup;
mod variable;

#[cfg(test)]
mod tests;

pub use config::{EvalConfig, DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_STRING_LEN};
pub use context::{ContextBuilder, EvalContext};
pub use function::{call_function, EagerFunction, Function, NativeFunction};
pub use members::{execute_member, MemberCall, MemberFunction};
pub use node::{
    AssignmentNode, BinaryNode, BlockNode, BoxedNode, DotNode, FunctionNode, LiteralNode, Node,
    NotNode, ReturnNode, RootNode, TerminateNode, VariableNode,
};
pub use outcome::{NodeResult, Outcome, Signal};
pub use render::{render, Rendered};
pub use stack::ensure_sufficient_stack;
pub use tracing_setup::init_tracing;
pub use variable::{ConstantVariable, Variable};

pub use kon_ir::{ArgumentRange, BinaryOp, Gate, ScopeId};
pub use kon_value::{EvalError, EvalErrorKind, EvalResult, Value, ValueKind};

/// Version of the evaluator crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
