//! Outcome of evaluating a node.
//!
//! Every `Node::evaluate` returns an [`Outcome`]: the produced value tagged
//! with a control-flow [`Signal`]. `Return` and `Terminate` are *blocking*:
//! a node that sees a blocking outcome from a child must hand it upward
//! unchanged (see [`propagate!`](crate::propagate)). Only block nodes turn a
//! `Return` back into a `Continue`; nothing turns a `Terminate` into
//! anything else.

use kon_ir::ScopeId;
use kon_value::{EvalError, Value};

/// Result of evaluating a node.
pub type NodeResult = Result<Outcome, EvalError>;

/// Control-flow tag of an [`Outcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Normal completion; evaluation proceeds.
    Continue,
    /// Unwind to the targeted block boundary.
    Return,
    /// Unwind all the way out, aborting the run.
    Terminate,
}

impl Signal {
    #[inline]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Signal::Return | Signal::Terminate)
    }
}

/// A produced value plus the signal that tells callers what to do next.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Continue(Value),
    Return {
        value: Value,
        scope: Option<ScopeId>,
    },
    Terminate {
        value: Value,
        scope: Option<ScopeId>,
    },
}

impl Outcome {
    #[inline]
    pub fn returning(value: Value, scope: Option<ScopeId>) -> Self {
        Outcome::Return { value, scope }
    }

    #[inline]
    pub fn terminating(value: Value, scope: Option<ScopeId>) -> Self {
        Outcome::Terminate { value, scope }
    }

    pub fn signal(&self) -> Signal {
        match self {
            Outcome::Continue(_) => Signal::Continue,
            Outcome::Return { .. } => Signal::Return,
            Outcome::Terminate { .. } => Signal::Terminate,
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            Outcome::Continue(value)
            | Outcome::Return { value, .. }
            | Outcome::Terminate { value, .. } => value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Outcome::Continue(value)
            | Outcome::Return { value, .. }
            | Outcome::Terminate { value, .. } => value,
        }
    }

    /// Scope a blocking outcome targets. Always `None` for `Continue`.
    pub fn scope(&self) -> Option<ScopeId> {
        match self {
            Outcome::Continue(_) => None,
            Outcome::Return { scope, .. } | Outcome::Terminate { scope, .. } => *scope,
        }
    }

    #[inline]
    pub fn is_blocking(&self) -> bool {
        self.signal().is_blocking()
    }

    #[inline]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Outcome::Terminate { .. })
    }

    /// Normalise a callee's outcome at a call boundary: blocking outcomes
    /// pass through untouched, anything else becomes a plain `Continue`.
    pub(crate) fn rewrap(self) -> Self {
        if self.is_blocking() {
            self
        } else {
            Outcome::Continue(self.into_value())
        }
    }
}

/// Unwrap a `Continue` value, or return a blocking outcome from the
/// enclosing function.
///
/// The enclosing function must return [`NodeResult`].
///
/// ```text
/// let receiver = propagate!(self.receiver.evaluate(ctx)?);
/// ```
#[macro_export]
macro_rules! propagate {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Continue(value) => value,
            blocked => return ::core::result::Result::Ok(blocked),
        }
    };
}
