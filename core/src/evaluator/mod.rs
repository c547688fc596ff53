//! Evaluation driver for expression trees.
//!
//! Nodes evaluate themselves recursively (see [`ExpressionNode::evaluate`]).
//! The driver adds a resource limit on top: a tree deeper than
//! [`ExecutionOptions::max_depth`] is rejected with
//! [`EvalError::DepthExceeded`] before any node runs, so recursion depth is
//! bounded by the configured limit. The analyzer applies the same limit.
//!
//! ## Example
//!
//! ```
//! use epox_core::evaluator;
//! use epox_core::nodes::{Literal, ProtectedDivision, Variable};
//! use epox_core::types::Type;
//! use epox_core::values::Value;
//!
//! let x = Variable::new("x", Type::INT64);
//! let tree = ProtectedDivision::new(Literal::boxed(9i32), x.boxed());
//!
//! x.set_value(3i64).unwrap();
//! assert_eq!(evaluator::eval(&tree), Ok(Value::from(3i64)));
//!
//! x.set_value(0i64).unwrap();
//! assert_eq!(evaluator::eval(&tree), Ok(Value::from(0i64)));
//! ```

mod eval;

#[cfg(test)]
mod eval_test;

pub use eval::{Evaluator, depth};

use crate::api::ExecutionOptions;
use crate::nodes::{EvalError, ExpressionNode};
use crate::values::Value;

/// Evaluate a tree with default limits.
///
/// Uses default depth limit of 1000.
pub fn eval(root: &dyn ExpressionNode) -> Result<Value, EvalError> {
    eval_with_options(root, ExecutionOptions::default())
}

/// Evaluate a tree with custom limits.
///
/// ```
/// use epox_core::api::ExecutionOptions;
/// use epox_core::evaluator::eval_with_options;
/// use epox_core::nodes::{EvalError, Literal, ProtectedDivision};
///
/// let tree = ProtectedDivision::new(Literal::boxed(1i32), Literal::boxed(2i32));
/// let err = eval_with_options(&tree, ExecutionOptions { max_depth: 1 }).unwrap_err();
/// assert_eq!(err, EvalError::DepthExceeded { depth: 2, max_depth: 1 });
/// ```
pub fn eval_with_options(
    root: &dyn ExpressionNode,
    options: ExecutionOptions,
) -> Result<Value, EvalError> {
    Evaluator::new(options).eval(root)
}
