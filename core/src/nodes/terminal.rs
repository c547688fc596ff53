//! Leaf nodes.
//!
//! Terminals have no children. A [`Literal`] carries a fixed value; a
//! [`Variable`] carries a value the fitness driver sets before each
//! evaluation.

use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::nodes::{EvalError, ExpressionNode};
use crate::types::Type;
use crate::values::Value;

/// A constant leaf. Its identifier is the printed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Value,
    text: String,
}

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        let value = value.into();
        let text = value.to_string();
        Self { value, text }
    }

    pub fn boxed(value: impl Into<Value>) -> Box<dyn ExpressionNode> {
        Box::new(Self::new(value))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl ExpressionNode for Literal {
    fn evaluate(&self) -> Result<Value, EvalError> {
        Ok(self.value.clone())
    }

    fn infer_return_type(&self, input_types: &[Type]) -> Option<Type> {
        input_types.is_empty().then(|| self.value.ty())
    }

    fn identifier(&self) -> &str {
        &self.text
    }

    fn arity(&self) -> usize {
        0
    }

    fn box_clone(&self) -> Box<dyn ExpressionNode> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    #[error("variable `{name}` is declared {declared}, cannot hold a {found}")]
    TypeMismatch {
        name: String,
        declared: Type,
        found: Type,
    },
}

/// A named, typed leaf whose value is supplied from outside the tree.
///
/// Clones share one binding, so the same variable can appear any number of
/// times across trees and a single [`Variable::set_value`] updates all of
/// them. The binding is `Send + Sync`, so a tree holding a variable can be
/// evaluated on another thread.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    ty: Type,
    binding: Arc<RwLock<Option<Value>>>,
}

impl Variable {
    /// An unbound variable of type `ty`.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            binding: Arc::new(RwLock::new(None)),
        }
    }

    /// A variable bound to `value`; its type is the value's type.
    pub fn with_value(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            ty: value.ty(),
            binding: Arc::new(RwLock::new(Some(value))),
        }
    }

    pub fn boxed(&self) -> Box<dyn ExpressionNode> {
        Box::new(self.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    /// The bound value, or `None` if unbound or if a writer panicked while
    /// holding the binding.
    pub fn value(&self) -> Option<Value> {
        self.binding.read().ok()?.clone()
    }

    /// Bind a new value. The value must have the declared type.
    pub fn set_value(&self, value: impl Into<Value>) -> Result<(), VariableError> {
        let value = value.into();
        if value.ty() != self.ty {
            return Err(VariableError::TypeMismatch {
                name: self.name.clone(),
                declared: self.ty,
                found: value.ty(),
            });
        }
        self.write_binding(Some(value));
        Ok(())
    }

    pub fn clear(&self) {
        self.write_binding(None);
    }

    // Overwriting replaces whatever a panicking writer left behind, so the
    // poison flag is cleared along with it.
    fn write_binding(&self, value: Option<Value>) {
        *self.binding.write().unwrap_or_else(PoisonError::into_inner) = value;
        self.binding.clear_poison();
    }
}

impl ExpressionNode for Variable {
    fn evaluate(&self) -> Result<Value, EvalError> {
        let binding = self
            .binding
            .read()
            .map_err(|_| EvalError::PoisonedVariable {
                name: self.name.clone(),
            })?;
        binding.clone().ok_or_else(|| EvalError::UnboundVariable {
            name: self.name.clone(),
        })
    }

    fn infer_return_type(&self, input_types: &[Type]) -> Option<Type> {
        input_types.is_empty().then_some(self.ty)
    }

    fn identifier(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        0
    }

    fn box_clone(&self) -> Box<dyn ExpressionNode> {
        Box::new(self.clone())
    }
}
