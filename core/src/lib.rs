//! Typed numeric expression nodes for genetic-programming trees.
//!
//! A tree is built from [`nodes::ExpressionNode`] trait objects. Each node
//! can infer its result type from its children's types alone
//! ([`analyzer`]) and evaluate itself by widening mixed numeric inputs to a
//! common working type ([`types::widening`]). Numerically undefined
//! operations are protected: they yield a substitute value instead of
//! failing.

pub mod analyzer;
pub mod api;
pub mod evaluator;
pub mod nodes;
pub mod registry;
pub mod types;
pub mod values;


pub use analyzer::{TypeError, analyze};
pub use api::{BuildOptions, ExecutionOptions};
pub use evaluator::{Evaluator, eval};
pub use nodes::{
    CoefficientPower, EvalError, ExpressionNode, Literal, ProtectedDivision, Variable,
};
pub use registry::NodeRegistry;
pub use types::{NumericKind, Type};
pub use values::{NumericValue, Value};
