use pretty_assertions::assert_eq;

use super::{Evaluator, depth, eval, eval_with_options};
use crate::api::ExecutionOptions;
use crate::nodes::{
    CoefficientPower, EvalError, ExpressionNode, Literal, ProtectedDivision, Variable,
};
use crate::test_utils::init_test_logging;
use crate::types::Type;
use crate::values::Value;

/// `levels` nested divisions of the form `PDIV (PDIV (... 1) 1) 1`.
fn division_chain(levels: usize) -> Box<dyn ExpressionNode> {
    let mut tree = Literal::boxed(1i32);
    for _ in 0..levels {
        tree = Box::new(ProtectedDivision::new(tree, Literal::boxed(1i32)));
    }
    tree
}

#[test]
fn test_depth() {
    assert_eq!(depth(&Literal::new(1i32)), 1);
    assert_eq!(depth(division_chain(1).as_ref()), 2);
    assert_eq!(depth(division_chain(10).as_ref()), 11);

    let lopsided = CoefficientPower::new(
        Literal::boxed(1i32),
        division_chain(3),
        Literal::boxed(2i32),
    );
    assert_eq!(depth(&lopsided), 5);
}

#[test]
fn test_depth_ignores_empty_slots() {
    assert_eq!(depth(&ProtectedDivision::placeholder()), 1);

    let mut node = CoefficientPower::placeholder();
    node.set_child(1, division_chain(2)).unwrap();
    assert_eq!(depth(&node), 4);
}

#[test]
fn test_eval_default_options() {
    init_test_logging();

    let x = Variable::new("x", Type::FLOAT64);
    let tree = CoefficientPower::new(Literal::boxed(3i32), x.boxed(), Literal::boxed(2i32));

    x.set_value(2.0f64).unwrap();
    assert_eq!(eval(&tree), Ok(Value::from(12.0f64)));
    x.set_value(-1.0f64).unwrap();
    assert_eq!(eval(&tree), Ok(Value::from(3.0f64)));
}

#[test]
fn test_eval_at_depth_limit() {
    let tree = division_chain(4);
    let options = ExecutionOptions { max_depth: 5 };
    assert_eq!(eval_with_options(tree.as_ref(), options), Ok(Value::from(1i32)));
}

#[test]
fn test_eval_rejects_deep_tree() {
    init_test_logging();

    let tree = division_chain(1000);
    assert_eq!(
        eval(tree.as_ref()),
        Err(EvalError::DepthExceeded {
            depth: 1001,
            max_depth: 1000,
        })
    );

    let evaluator = Evaluator::new(ExecutionOptions { max_depth: 3 });
    assert!(evaluator.eval(division_chain(2).as_ref()).is_ok());
    assert!(evaluator.eval(division_chain(3).as_ref()).is_err());
}

#[test]
fn test_eval_propagates_invalid_result() {
    let unbound = Variable::new("y", Type::INT32);
    let tree = ProtectedDivision::new(
        Literal::boxed(1.5f32),
        Box::new(ProtectedDivision::new(unbound.boxed(), Literal::boxed(2i32))),
    );

    assert_eq!(
        eval(&tree),
        Err(EvalError::UnboundVariable {
            name: "y".to_string()
        })
    );
}

#[test]
fn test_evaluator_is_reusable() {
    let evaluator = Evaluator::default();
    assert_eq!(evaluator.options().max_depth, 1000);

    let x = Variable::new("x", Type::INT32);
    let tree = ProtectedDivision::new(Literal::boxed(100i32), x.boxed());
    for (input, expected) in [(1, 100), (3, 33), (0, 0), (-7, -14)] {
        x.set_value(input).unwrap();
        assert_eq!(evaluator.eval(&tree), Ok(Value::from(expected)));
    }
}
