#![allow(dead_code)]

use epox::{CoefficientPower, ExpressionNode, Literal, ProtectedDivision, Value};

pub type Node = Box<dyn ExpressionNode>;

pub fn lit(value: impl Into<Value>) -> Node {
    Literal::boxed(value)
}

pub fn pdiv(dividend: Node, divisor: Node) -> Node {
    Box::new(ProtectedDivision::new(dividend, divisor))
}

pub fn pdiv_with(dividend: Node, divisor: Node, protection_value: f64) -> Node {
    Box::new(ProtectedDivision::with_protection(
        dividend,
        divisor,
        protection_value,
    ))
}

pub fn cvp(coefficient: Node, term: Node, exponent: Node) -> Node {
    Box::new(CoefficientPower::new(coefficient, term, exponent))
}

/// Declares a test that checks both the inferred type and the evaluated
/// value of a tree.
macro_rules! tree_case {
    ($name:ident, tree: $tree:expr, ty: $ty:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let tree: cases::Node = $tree;
            pretty_assertions::assert_eq!(
                epox::analyze(tree.as_ref()),
                $ty,
                "inferred type of {}",
                stringify!($name)
            );
            pretty_assertions::assert_eq!(
                epox::eval(tree.as_ref()),
                $value,
                "value of {}",
                stringify!($name)
            );
        }
    };
}
