use crate::nodes::{EvalError, ExpressionNode, SlotError};
use crate::values::{NumericValue, Value};

/// Fixed-arity child slots of a function node.
///
/// An empty slot is a structural placeholder left by a tree builder; it is a
/// valid part of a skeleton but cannot be evaluated.
#[derive(Debug, Clone)]
pub struct Children<const N: usize> {
    slots: [Option<Box<dyn ExpressionNode>>; N],
}

impl<const N: usize> Children<N> {
    pub fn new(slots: [Option<Box<dyn ExpressionNode>>; N]) -> Self {
        Self { slots }
    }

    /// All slots empty.
    pub fn empty() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    pub const fn arity(&self) -> usize {
        N
    }

    pub fn get(&self, index: usize) -> Option<&dyn ExpressionNode> {
        self.slots.get(index)?.as_deref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn ExpressionNode + 'static)> {
        self.slots.get_mut(index)?.as_deref_mut()
    }

    /// Put `child` in slot `index`, returning whatever was there.
    pub fn set(
        &mut self,
        index: usize,
        child: Box<dyn ExpressionNode>,
    ) -> Result<Option<Box<dyn ExpressionNode>>, SlotError> {
        let slot = self.slot_mut(index)?;
        Ok(slot.replace(child))
    }

    /// Empty slot `index`, returning its child.
    pub fn take(&mut self, index: usize) -> Result<Option<Box<dyn ExpressionNode>>, SlotError> {
        let slot = self.slot_mut(index)?;
        Ok(slot.take())
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Evaluate the child in slot `index` on behalf of `node`.
    pub fn evaluate(&self, index: usize, node: &str) -> Result<Value, EvalError> {
        match self.get(index) {
            Some(child) => child.evaluate(),
            None => Err(EvalError::MissingChild {
                node: node.to_string(),
                index,
            }),
        }
    }

    /// Evaluate every slot in order, stopping at the first failure.
    pub fn evaluate_all(&self, node: &str) -> Result<[Value; N], EvalError> {
        let mut values = Vec::with_capacity(N);
        for index in 0..N {
            values.push(self.evaluate(index, node)?);
        }
        values
            .try_into()
            .map_err(|values: Vec<Value>| EvalError::MissingChild {
                node: node.to_string(),
                index: values.len(),
            })
    }

    fn slot_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Option<Box<dyn ExpressionNode>>, SlotError> {
        self.slots
            .get_mut(index)
            .ok_or(SlotError { index, arity: N })
    }
}

/// Check that every value is numeric.
///
/// On failure the error lists the types of all inputs, not just the first
/// offending one.
pub fn expect_numeric<const N: usize>(
    node: &str,
    values: &[Value; N],
) -> Result<[NumericValue; N], EvalError> {
    let mut numeric = [NumericValue::Int32(0); N];
    for (out, value) in numeric.iter_mut().zip(values) {
        *out = value.as_numeric().ok_or_else(|| EvalError::NonNumeric {
            node: node.to_string(),
            found: values.iter().map(Value::ty).collect(),
        })?;
    }
    Ok(numeric)
}
