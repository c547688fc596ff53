//! Configuration options for building and evaluating trees.

use crate::nodes::ProtectedDivision;

/// Options applied when nodes are created from their identifiers.
///
/// # Example
///
/// ```
/// use epox_core::api::BuildOptions;
///
/// let options = BuildOptions {
///     protection_value: 1.0,
/// };
/// assert_eq!(BuildOptions::default().protection_value, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Value substituted by protected division for a zero divisor.
    ///
    /// Default: 0.0
    pub protection_value: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            protection_value: ProtectedDivision::DEFAULT_PROTECTION_VALUE,
        }
    }
}

/// Configuration options for tree evaluation.
///
/// # Example
///
/// ```
/// use epox_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions { max_depth: 17 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Maximum tree depth the evaluator accepts (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}
