//! Kon Value - runtime values and evaluation errors.
//!
//! This crate defines what a Konstruct program computes with:
//! - [`Value`]: the closed set of runtime types and their operator surface
//! - [`NumericPair`]: the one place numeric promotion is decided
//! - [`EvalError`] / [`EvalErrorKind`]: the single error type of the runtime
//!
//! It knows nothing about syntax trees or contexts; `kon_eval` builds the
//! evaluator on top of it.

pub mod errors;
mod value;

pub use errors::{
    binary_type_mismatch, call_depth_exceeded, division_by_zero, function_already_exists,
    global_redefinition, index_out_of_bounds, integer_overflow, modulo_by_zero, no_such_member,
    not_a_number, string_too_long, undefined_function, undefined_variable, unsupported_operation,
    wrong_arg_count, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{double_to_int, evaluate_binary, NumericPair, Value, ValueKind};
