use tracing::debug;

use crate::analyzer::TypeError;
use crate::api::ExecutionOptions;
use crate::evaluator::depth;
use crate::nodes::ExpressionNode;
use crate::types::Type;

/// Infer the type of `root`, checking every node below it.
///
/// Children are checked depth-first, left to right; the first failure is
/// returned. Trees deeper than the default `max_depth` are rejected, the
/// same ones [`crate::evaluator::eval`] rejects.
pub fn analyze(root: &dyn ExpressionNode) -> Result<Type, TypeError> {
    analyze_with_options(root, &ExecutionOptions::default())
}

/// Like [`analyze`], with the depth limit taken from `options`.
pub fn analyze_with_options(
    root: &dyn ExpressionNode,
    options: &ExecutionOptions,
) -> Result<Type, TypeError> {
    let depth = depth(root);
    if depth > options.max_depth {
        debug!(depth, max_depth = options.max_depth, "tree too deep to analyze");
        return Err(TypeError::DepthExceeded {
            depth,
            max_depth: options.max_depth,
        });
    }
    Analyzer { depth: 0 }.analyze_node(root)
}

/// `true` if [`analyze`] succeeds.
pub fn is_well_typed(root: &dyn ExpressionNode) -> bool {
    analyze(root).is_ok()
}

struct Analyzer {
    depth: usize,
}

impl Analyzer {
    fn analyze_node(&mut self, node: &dyn ExpressionNode) -> Result<Type, TypeError> {
        let mut input_types = Vec::with_capacity(node.arity());
        for index in 0..node.arity() {
            let child = node.child(index).ok_or_else(|| TypeError::MissingChild {
                node: node.identifier().to_string(),
                index,
            })?;

            self.depth += 1;
            let child_type = self.analyze_node(child);
            self.depth -= 1;
            input_types.push(child_type?);
        }

        match node.infer_return_type(&input_types) {
            Some(ty) => {
                debug!(
                    node = node.identifier(),
                    depth = self.depth,
                    ty = %ty,
                    "inferred node type"
                );
                Ok(ty)
            }
            None => {
                debug!(
                    node = node.identifier(),
                    depth = self.depth,
                    "node rejects its input types"
                );
                Err(TypeError::IllTyped {
                    node: node.identifier().to_string(),
                    inputs: input_types,
                })
            }
        }
    }
}
