//! Native stack growth for deeply nested trees.
//!
//! Evaluation recurses once per tree level: every child goes through
//! `node::eval_child`, every function or member call through the context's
//! guarded call, and every composite node's `Drop` through
//! `node::drop_subtree`. All three funnel into [`ensure_sufficient_stack`],
//! so a generated template nested tens of thousands of levels deep is
//! evaluated and freed without a stack overflow.

/// Grow when less than this much stack is left at a node boundary.
#[cfg(not(target_arch = "wasm32"))]
const NODE_RED_ZONE: usize = 128 * 1024;

/// Size of each extra stack segment; roughly a few thousand node levels.
#[cfg(not(target_arch = "wasm32"))]
const NODE_SEGMENT: usize = 1024 * 1024;

/// Run `f` at a node or call boundary, switching to a fresh stack segment
/// first if the current one is nearly used up.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(NODE_RED_ZONE, NODE_SEGMENT, f)
}

/// wasm has no segmented stacks; node boundaries call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
