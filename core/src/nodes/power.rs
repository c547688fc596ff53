//! Coefficient power (`CVP`): `coefficient * term^exponent`.
//!
//! `CVP 3 x 2` is `3x^2`. The result is always `Float64`, whatever the kinds
//! of the inputs. Degenerate powers such as `0^-1` or `(-8)^0.5` are not
//! protected and yield whatever `f64::powf` yields.

use crate::nodes::{Children, EvalError, ExpressionNode, expect_numeric};
use crate::types::{Type, is_all_numeric};
use crate::values::Value;

/// Ternary node: `(coefficient, term, exponent)`.
#[derive(Debug, Clone)]
pub struct CoefficientPower {
    children: Children<3>,
}

impl CoefficientPower {
    pub const IDENTIFIER: &'static str = "CVP";
    pub const ARITY: usize = 3;

    pub fn new(
        coefficient: Box<dyn ExpressionNode>,
        term: Box<dyn ExpressionNode>,
        exponent: Box<dyn ExpressionNode>,
    ) -> Self {
        Self {
            children: Children::new([Some(coefficient), Some(term), Some(exponent)]),
        }
    }

    /// A coefficient power with all three slots empty.
    pub fn placeholder() -> Self {
        Self {
            children: Children::empty(),
        }
    }
}

impl Default for CoefficientPower {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// `coefficient * term^exponent` in double precision.
pub fn coefficient_power(coefficient: f64, term: f64, exponent: f64) -> f64 {
    coefficient * term.powf(exponent)
}

impl ExpressionNode for CoefficientPower {
    fn evaluate(&self) -> Result<Value, EvalError> {
        let inputs = self.children.evaluate_all(Self::IDENTIFIER)?;
        let [coefficient, term, exponent] = expect_numeric(Self::IDENTIFIER, &inputs)?;

        Ok(Value::from(coefficient_power(
            coefficient.as_f64(),
            term.as_f64(),
            exponent.as_f64(),
        )))
    }

    fn infer_return_type(&self, input_types: &[Type]) -> Option<Type> {
        (input_types.len() == Self::ARITY && is_all_numeric(input_types)).then_some(Type::FLOAT64)
    }

    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    delegate_children!();

    fn box_clone(&self) -> Box<dyn ExpressionNode> {
        Box::new(self.clone())
    }
}
