//! Protected division (`PDIV`).
//!
//! Operands of mixed kinds are widened to the wider kind, and the quotient
//! has that kind. A divisor equal to zero *after widening* yields the
//! protection value, converted to the widened kind, instead of a fault or a
//! non-finite result. Dividing an `Int32` by a `Float64` zero is therefore
//! protected just like dividing two integers.

use tracing::trace;

use crate::nodes::{Children, EvalError, ExpressionNode, expect_numeric};
use crate::types::{NumericKind, Type, widen, widest_numeric_type};
use crate::values::{NumericValue, Value, coerce_f64};

/// Binary division node: `(dividend, divisor)`.
#[derive(Debug, Clone)]
pub struct ProtectedDivision {
    children: Children<2>,
    protection_value: f64,
}

impl ProtectedDivision {
    pub const IDENTIFIER: &'static str = "PDIV";
    pub const ARITY: usize = 2;
    pub const DEFAULT_PROTECTION_VALUE: f64 = 0.0;

    pub fn new(dividend: Box<dyn ExpressionNode>, divisor: Box<dyn ExpressionNode>) -> Self {
        Self::with_protection(dividend, divisor, Self::DEFAULT_PROTECTION_VALUE)
    }

    pub fn with_protection(
        dividend: Box<dyn ExpressionNode>,
        divisor: Box<dyn ExpressionNode>,
        protection_value: f64,
    ) -> Self {
        Self {
            children: Children::new([Some(dividend), Some(divisor)]),
            protection_value,
        }
    }

    /// A division with both slots empty.
    pub fn placeholder() -> Self {
        Self::placeholder_with_protection(Self::DEFAULT_PROTECTION_VALUE)
    }

    pub fn placeholder_with_protection(protection_value: f64) -> Self {
        Self {
            children: Children::empty(),
            protection_value,
        }
    }

    /// The value substituted for a division by zero.
    pub fn protection_value(&self) -> f64 {
        self.protection_value
    }

    pub fn set_protection_value(&mut self, protection_value: f64) {
        self.protection_value = protection_value;
    }

    /// Divide two numeric values under this node's protection policy.
    ///
    /// Integer quotients truncate toward zero and wrap on `MIN / -1`.
    pub fn divide(&self, dividend: NumericValue, divisor: NumericValue) -> NumericValue {
        let kind = widen(dividend.kind(), divisor.kind());
        let divisor = divisor.coerce(kind);

        if divisor.is_zero() {
            trace!(
                dividend = %dividend,
                kind = %kind,
                protection_value = self.protection_value,
                "division by zero, substituting protection value"
            );
            return coerce_f64(self.protection_value, kind);
        }

        match kind {
            NumericKind::Int32 => {
                NumericValue::Int32(dividend.as_i32().wrapping_div(divisor.as_i32()))
            }
            NumericKind::Int64 => {
                NumericValue::Int64(dividend.as_i64().wrapping_div(divisor.as_i64()))
            }
            NumericKind::Float32 => NumericValue::Float32(dividend.as_f32() / divisor.as_f32()),
            NumericKind::Float64 => NumericValue::Float64(dividend.as_f64() / divisor.as_f64()),
        }
    }
}

impl Default for ProtectedDivision {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl ExpressionNode for ProtectedDivision {
    fn evaluate(&self) -> Result<Value, EvalError> {
        let inputs = self.children.evaluate_all(Self::IDENTIFIER)?;
        let [dividend, divisor] = expect_numeric(Self::IDENTIFIER, &inputs)?;

        Ok(Value::Numeric(self.divide(dividend, divisor)))
    }

    fn infer_return_type(&self, input_types: &[Type]) -> Option<Type> {
        if input_types.len() != Self::ARITY {
            return None;
        }
        widest_numeric_type(input_types).map(Type::from)
    }

    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    delegate_children!();

    fn box_clone(&self) -> Box<dyn ExpressionNode> {
        Box::new(self.clone())
    }
}
