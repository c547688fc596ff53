//! Nodes used only by tests.

use std::sync::{Arc, Mutex};

use crate::nodes::{EvalError, ExpressionNode};
use crate::types::Type;
use crate::values::Value;

/// Tags of recorded evaluations, in the order they happened.
pub type EvaluationLog = Arc<Mutex<Vec<usize>>>;

pub fn new_log() -> EvaluationLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &EvaluationLog) -> Vec<usize> {
    log.lock().unwrap().clone()
}

/// A terminal that appends its tag to a shared log every time it is
/// evaluated.
#[derive(Debug, Clone)]
pub struct RecordingLeaf {
    tag: usize,
    value: Value,
    log: EvaluationLog,
}

impl RecordingLeaf {
    pub fn boxed(
        tag: usize,
        value: impl Into<Value>,
        log: &EvaluationLog,
    ) -> Box<dyn ExpressionNode> {
        Box::new(Self {
            tag,
            value: value.into(),
            log: Arc::clone(log),
        })
    }
}

impl ExpressionNode for RecordingLeaf {
    fn evaluate(&self) -> Result<Value, EvalError> {
        self.log.lock().unwrap().push(self.tag);
        Ok(self.value.clone())
    }

    fn infer_return_type(&self, input_types: &[Type]) -> Option<Type> {
        input_types.is_empty().then(|| self.value.ty())
    }

    fn identifier(&self) -> &str {
        "REC"
    }

    fn arity(&self) -> usize {
        0
    }

    fn box_clone(&self) -> Box<dyn ExpressionNode> {
        Box::new(self.clone())
    }
}
