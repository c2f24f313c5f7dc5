//! Kon IR - plain data shared by every layer of the Konstruct runtime.
//!
//! This crate holds the small, copyable tags that the value system and the
//! evaluator both need:
//! - [`Gate`]: named boolean combinators (AND, OR, XOR, NAND, NOR, XNOR, NOT)
//! - [`ArgumentRange`]: inclusive arity bounds for functions and members
//! - [`BinaryOp`]: the binary operator tags carried by expression nodes
//! - [`ScopeId`]: the block/loop boundary a `Return` signal targets
//!
//! Nothing here evaluates anything; the types are `Copy` and have no
//! dependencies so parsers can build trees against them directly.

mod arity;
mod gate;
mod operators;
mod scope;

pub use arity::ArgumentRange;
pub use gate::{Gate, UnknownGate};
pub use operators::BinaryOp;
pub use scope::ScopeId;
