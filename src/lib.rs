//! EpoX - typed numeric expression trees for genetic programming
//!
//! # Overview
//!
//! Programs are trees of function nodes over four numeric kinds
//! (`Int32`, `Int64`, `Float32`, `Float64`). Every node can:
//!
//! - infer its result type from its children's types, without evaluating
//! - evaluate itself, widening mixed inputs to the widest kind present
//!
//! Operations that are undefined for some inputs are *protected*: division by
//! zero yields a configurable substitute instead of failing.
//!
//! # Quick Start
//!
//! ```
//! use epox::{CoefficientPower, Literal, ProtectedDivision, Type, Value, Variable};
//!
//! // 3 * x^2 / y
//! let x = Variable::new("x", Type::FLOAT64);
//! let y = Variable::new("y", Type::INT32);
//! let tree = ProtectedDivision::new(
//!     Box::new(CoefficientPower::new(
//!         Literal::boxed(3i32),
//!         x.boxed(),
//!         Literal::boxed(2i32),
//!     )),
//!     y.boxed(),
//! );
//!
//! // The type is known before any variable is bound.
//! assert_eq!(epox::analyze(&tree), Ok(Type::FLOAT64));
//!
//! x.set_value(2.0).unwrap();
//! y.set_value(4).unwrap();
//! assert_eq!(epox::eval(&tree), Ok(Value::from(3.0)));
//!
//! // Dividing by zero is protected.
//! y.set_value(0).unwrap();
//! assert_eq!(epox::eval(&tree), Ok(Value::from(0.0)));
//! ```
//!
//! # Building from identifiers
//!
//! ```
//! use epox::{BuildOptions, ExpressionNode, Literal, NodeRegistry, Value};
//!
//! let registry = NodeRegistry::standard(BuildOptions {
//!     protection_value: 1.0,
//! });
//! let mut node = registry.create("PDIV").unwrap();
//! node.set_child(0, Literal::boxed(5i64)).unwrap();
//! node.set_child(1, Literal::boxed(0i64)).unwrap();
//! assert_eq!(epox::eval(node.as_ref()), Ok(Value::from(1i64)));
//! ```

pub use epox_core::*;
