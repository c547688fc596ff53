//! Expression nodes of a genetic-programming tree.
//!
//! Every node answers two independent questions:
//!
//! - [`ExpressionNode::infer_return_type`]: given only the *types* of its
//!   children, what type would this node produce? This is a pure function
//!   used to validate trees before they are ever run.
//! - [`ExpressionNode::evaluate`]: evaluate the children depth-first, left to
//!   right, and compute a value.
//!
//! For any all-numeric input, the type of the value returned by `evaluate`
//! equals the type returned by `infer_return_type` for the children's types,
//! and one fails exactly when the other does.
//!
//! ## Example
//!
//! ```
//! use epox_core::nodes::{CoefficientPower, ExpressionNode, Literal, ProtectedDivision};
//! use epox_core::values::Value;
//!
//! let div = ProtectedDivision::new(Literal::boxed(10i32), Literal::boxed(0i32));
//! assert_eq!(div.evaluate(), Ok(Value::from(0i32)));
//!
//! let cvp = CoefficientPower::new(
//!     Literal::boxed(3i32),
//!     Literal::boxed(2i32),
//!     Literal::boxed(2i32),
//! );
//! assert_eq!(cvp.evaluate(), Ok(Value::from(12.0f64)));
//! ```

/// Implements the child-access methods of [`ExpressionNode`] by delegating
/// to a `children: Children<N>` field.
macro_rules! delegate_children {
    () => {
        fn arity(&self) -> usize {
            self.children.arity()
        }

        fn child(&self, index: usize) -> Option<&dyn $crate::nodes::ExpressionNode> {
            self.children.get(index)
        }

        fn child_mut(
            &mut self,
            index: usize,
        ) -> Option<&mut (dyn $crate::nodes::ExpressionNode + 'static)> {
            self.children.get_mut(index)
        }

        fn set_child(
            &mut self,
            index: usize,
            child: Box<dyn $crate::nodes::ExpressionNode>,
        ) -> Result<Option<Box<dyn $crate::nodes::ExpressionNode>>, $crate::nodes::SlotError> {
            self.children.set(index, child)
        }

        fn take_child(
            &mut self,
            index: usize,
        ) -> Result<Option<Box<dyn $crate::nodes::ExpressionNode>>, $crate::nodes::SlotError> {
            self.children.take(index)
        }
    };
}

mod children;
pub mod division;
pub(crate) mod error;
pub mod power;
pub mod terminal;

#[cfg(test)]
mod test_nodes;

pub use children::{Children, expect_numeric};
pub use division::ProtectedDivision;
pub use error::{EvalError, SlotError};
pub use power::CoefficientPower;
pub use terminal::{Literal, Variable, VariableError};

use crate::types::Type;
use crate::values::Value;

/// Capability set shared by every tree node.
///
/// New operations are added by implementing this trait. A node's arity and
/// identifier never change after construction. Nodes are `Send`, so a
/// finished tree can be handed to an evaluator on another thread.
pub trait ExpressionNode: core::fmt::Debug + Send {
    /// Evaluate this node and its subtree.
    fn evaluate(&self) -> Result<Value, EvalError>;

    /// The type this node produces for children of `input_types`, or `None`
    /// if those inputs are invalid for this node (including wrong arity).
    ///
    /// Must not look at children.
    fn infer_return_type(&self, input_types: &[Type]) -> Option<Type>;

    /// Short name used by external readers and writers of trees.
    fn identifier(&self) -> &str;

    /// Number of child slots.
    fn arity(&self) -> usize;

    fn child(&self, _index: usize) -> Option<&dyn ExpressionNode> {
        None
    }

    fn child_mut(&mut self, _index: usize) -> Option<&mut (dyn ExpressionNode + 'static)> {
        None
    }

    /// Replace the child in slot `index`, returning the previous occupant.
    fn set_child(
        &mut self,
        index: usize,
        _child: Box<dyn ExpressionNode>,
    ) -> Result<Option<Box<dyn ExpressionNode>>, SlotError> {
        Err(SlotError {
            index,
            arity: self.arity(),
        })
    }

    /// Empty slot `index`, returning its child.
    fn take_child(&mut self, index: usize) -> Result<Option<Box<dyn ExpressionNode>>, SlotError> {
        Err(SlotError {
            index,
            arity: self.arity(),
        })
    }

    /// Deep copy of this node and its subtree.
    fn box_clone(&self) -> Box<dyn ExpressionNode>;
}

impl Clone for Box<dyn ExpressionNode> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
