//! Error types for evaluation.
//!
//! Every failure in the runtime is an [`EvalError`]. The error carries a
//! structured [`EvalErrorKind`] for programmatic matching, the rendered
//! message, and optionally the error that caused it.
//!
//! Construct errors through the `#[cold]` factory functions at the bottom of
//! this module rather than building kinds by hand; they keep `kind` and
//! `message` in sync.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use kon_ir::ArgumentRange;

use crate::value::Value;

/// Result of a value-level operation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category.
///
/// The categories group into type errors, unknown-name errors, arity
/// errors and redefinition errors, plus arithmetic and resource failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Type
    #[error("unsupported operation `{operation}` for type {type_name}")]
    UnsupportedOperation {
        operation: String,
        type_name: String,
    },
    #[error("cannot apply `{operation}` to {left} and {right}")]
    BinaryTypeMismatch {
        operation: String,
        left: String,
        right: String,
    },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },
    #[error("{operation} produced a value that is not a finite number")]
    NotANumber { operation: String },

    // Access
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: i64, length: usize },

    // Unknown name
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },
    #[error("no such member function '{member}' on type {type_name}")]
    UndefinedMember { member: String, type_name: String },

    // Arity
    #[error("{name} expected {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: ArgumentRange,
        got: usize,
    },

    // Redefinition
    #[error("cannot assign to `{name}`: already defined as a global variable")]
    GlobalRedefinition { name: String },
    #[error("function already exists: {name}")]
    FunctionAlreadyExists { name: String },

    // Resources
    #[error("maximum call depth exceeded (limit: {limit})")]
    CallDepthExceeded { limit: usize },
    #[error("{operation} would produce {length} bytes (limit: {limit})")]
    StringTooLong {
        operation: String,
        length: usize,
        limit: usize,
    },

    /// Errors raised by embedding applications and native functions.
    #[error("{message}")]
    Custom { message: String },
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory-built errors.
    pub message: String,
    cause: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses the `Custom` kind. Prefer a factory function when one fits.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            cause: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            cause: None,
        }
    }

    /// Attach the error that caused this one.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// The directly wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Message followed by one `caused by:` line per error in the chain.
    pub fn full_message(&self) -> String {
        let mut out = self.message.clone();
        let mut next = self.source();
        while let Some(err) = next {
            out.push_str("\ncaused by: ");
            out.push_str(&err.to_string());
            next = err.source();
        }
        out
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|err| err as &(dyn Error + 'static))
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Type Errors

/// Operator not supported for the receiver's type.
#[cold]
pub fn unsupported_operation(operation: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperation {
        operation: operation.to_string(),
        type_name: type_name.to_string(),
    })
}

/// Operand types incompatible for the operator.
#[cold]
pub fn binary_type_mismatch(operation: &str, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        operation: operation.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

/// A floating-point result could not be turned into an integer.
#[cold]
pub fn not_a_number(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotANumber {
        operation: operation.to_string(),
    })
}

// Access Errors

#[cold]
pub fn index_out_of_bounds(index: i64, length: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, length })
}

// Unknown-Name Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn no_such_member(member: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMember {
        member: member.to_string(),
        type_name: type_name.to_string(),
    })
}

// Arity Errors

#[cold]
pub fn wrong_arg_count(name: &str, expected: ArgumentRange, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

// Redefinition Errors

#[cold]
pub fn global_redefinition(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::GlobalRedefinition {
        name: name.to_string(),
    })
}

#[cold]
pub fn function_already_exists(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionAlreadyExists {
        name: name.to_string(),
    })
}

// Resource Errors

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallDepthExceeded { limit })
}

/// A member would build a string longer than the configured limit.
#[cold]
pub fn string_too_long(operation: &str, length: usize, limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StringTooLong {
        operation: operation.to_string(),
        length,
        limit,
    })
}
