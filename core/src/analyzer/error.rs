use thiserror::Error;

use crate::nodes::error::display_types;
use crate::types::Type;

/// Why a tree is not well-typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A child slot is empty, so the tree is only a skeleton.
    #[error("`{node}` has no child in slot {index}")]
    MissingChild { node: String, index: usize },

    /// The node rejects the types of its children.
    #[error("`{node}` cannot take inputs ({})", display_types(.inputs))]
    IllTyped { node: String, inputs: Vec<Type> },

    /// The tree is deeper than the analyzer allows.
    #[error("tree depth {depth} exceeds maximum of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },
}
