//! Evaluation limits supplied by the embedding application.

/// Default cap on nested function and member calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Default cap, in bytes, on a string built by a member function (16MiB).
pub const DEFAULT_MAX_STRING_LEN: usize = 16 * 1024 * 1024;

/// Policy knobs for one evaluation run.
///
/// Passed to the root context through `ContextBuilder::config`; forked
/// contexts inherit it unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested function/member calls before evaluation
    /// fails with a call-depth error.
    pub max_call_depth: usize,
    /// Largest string, in bytes, that a growing member such as `repeat` may
    /// produce.
    pub max_string_len: usize,
}

impl EvalConfig {
    pub const fn new() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }

    /// No call-depth or string-length cap. Deep trees still grow the stack
    /// on demand, and string sizes are still checked for overflow.
    pub const fn unlimited() -> Self {
        Self {
            max_call_depth: usize::MAX,
            max_string_len: usize::MAX,
        }
    }

    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub const fn with_max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::new()
    }
}
