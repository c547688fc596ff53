//! Evaluation failures.
//!
//! An `EvalError` is the "invalid result" of a subtree. It is an ordinary
//! return value, never a panic, and ancestors forward it unchanged with `?`.
//! Numerically undefined operations are not errors: protected nodes replace
//! them with a substitute value instead.

use thiserror::Error;

use crate::types::Type;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A child slot was never populated. The tree is an incomplete skeleton.
    #[error("`{node}` has no child in slot {index}")]
    MissingChild { node: String, index: usize },

    /// The children produced values that are not all numeric.
    #[error("`{node}` requires numeric inputs, found ({})", display_types(.found))]
    NonNumeric { node: String, found: Vec<Type> },

    /// A variable was evaluated before the driver gave it a value.
    #[error("variable `{name}` has no value")]
    UnboundVariable { name: String },

    /// A thread panicked while writing the variable's value.
    #[error("variable `{name}` was poisoned by a panicking writer")]
    PoisonedVariable { name: String },

    /// The tree is deeper than the evaluator allows.
    #[error("tree depth {depth} exceeds maximum of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },
}

/// A child index that does not exist for the node's arity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("child index {index} is out of range for arity {arity}")]
pub struct SlotError {
    pub index: usize,
    pub arity: usize,
}

pub(crate) fn display_types(types: &[Type]) -> String {
    types
        .iter()
        .map(|ty| ty.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
