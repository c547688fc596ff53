#[macro_use]
mod cases;

use cases::{cvp, lit, pdiv};
use epox::{Type, Value};

tree_case!(
    three_x_squared,
    tree: cvp(lit(3i32), lit(2i32), lit(2i32)),
    ty: Ok(Type::FLOAT64),
    value: Ok(Value::from(12.0f64)),
);

tree_case!(
    float_inputs_still_double,
    tree: cvp(lit(0.5f32), lit(4.0f32), lit(0.5f32)),
    ty: Ok(Type::FLOAT64),
    value: Ok(Value::from(1.0f64)),
);

tree_case!(
    long_exponent,
    tree: cvp(lit(1i64), lit(2i64), lit(10i64)),
    ty: Ok(Type::FLOAT64),
    value: Ok(Value::from(1024.0f64)),
);

tree_case!(
    zero_coefficient,
    tree: cvp(lit(0i32), lit(123.0f64), lit(3i32)),
    ty: Ok(Type::FLOAT64),
    value: Ok(Value::from(0.0f64)),
);

tree_case!(
    zero_to_negative_power_is_infinite,
    tree: cvp(lit(1i32), lit(0i32), lit(-2i32)),
    ty: Ok(Type::FLOAT64),
    value: Ok(Value::from(f64::INFINITY)),
);

tree_case!(
    power_of_quotient,
    tree: cvp(lit(2i32), pdiv(lit(9i32), lit(2i32)), lit(2i32)),
    ty: Ok(Type::FLOAT64),
    value: Ok(Value::from(32.0f64)),
);

tree_case!(
    nested_powers,
    tree: cvp(lit(1i32), cvp(lit(1i32), lit(2i32), lit(2i32)), lit(0.5f64)),
    ty: Ok(Type::FLOAT64),
    value: Ok(Value::from(2.0f64)),
);
