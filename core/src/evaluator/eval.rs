use tracing::{debug, debug_span};

use crate::api::ExecutionOptions;
use crate::nodes::{EvalError, ExpressionNode};
use crate::values::Value;

/// Evaluates trees under a fixed set of limits.
///
/// An `Evaluator` holds no per-tree state and can be reused.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: ExecutionOptions,
}

impl Evaluator {
    pub fn new(options: ExecutionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    /// Evaluate `root`, first checking that it fits within `max_depth`.
    pub fn eval(&self, root: &dyn ExpressionNode) -> Result<Value, EvalError> {
        let _span = debug_span!("eval", root = root.identifier()).entered();

        let depth = depth(root);
        if depth > self.options.max_depth {
            debug!(depth, max_depth = self.options.max_depth, "tree too deep");
            return Err(EvalError::DepthExceeded {
                depth,
                max_depth: self.options.max_depth,
            });
        }

        let result = root.evaluate();
        match &result {
            Ok(value) => debug!(depth, value = %value, "evaluated tree"),
            Err(err) => debug!(depth, error = %err, "tree produced no value"),
        }
        result
    }
}

/// Number of nodes on the longest root-to-leaf path. A lone terminal has
/// depth 1. Empty slots do not count.
///
/// Walks the tree with an explicit stack, so arbitrarily deep trees can be
/// measured.
pub fn depth(root: &dyn ExpressionNode) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(root, 1)];
    while let Some((node, level)) = pending.pop() {
        deepest = deepest.max(level);
        for index in 0..node.arity() {
            if let Some(child) = node.child(index) {
                pending.push((child, level + 1));
            }
        }
    }
    deepest
}
