use serde::{Deserialize, Serialize};

use crate::types::{NumericKind, Type};

/// A numeric result tagged with its kind.
///
/// Produced by evaluation and never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

impl NumericValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericValue::Int32(_) => NumericKind::Int32,
            NumericValue::Int64(_) => NumericKind::Int64,
            NumericValue::Float32(_) => NumericKind::Float32,
            NumericValue::Float64(_) => NumericKind::Float64,
        }
    }

    /// Returns `true` if this value equals the additive identity of its kind.
    ///
    /// For floats this uses IEEE equality, so `-0.0` is zero and `NaN` is not.
    pub fn is_zero(&self) -> bool {
        match *self {
            NumericValue::Int32(v) => v == 0,
            NumericValue::Int64(v) => v == 0,
            NumericValue::Float32(v) => v == 0.0,
            NumericValue::Float64(v) => v == 0.0,
        }
    }
}

impl core::fmt::Display for NumericValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NumericValue::Int32(v) => write!(f, "{}", v),
            NumericValue::Int64(v) => write!(f, "{}L", v),
            NumericValue::Float32(v) => format_float(f, f64::from(*v), v.to_string(), "f"),
            NumericValue::Float64(v) => format_float(f, *v, v.to_string(), ""),
        }
    }
}

/// Format a float so it always reads back as a float (`2.` rather than `2`).
///
/// `text` is the value's own `Display` output, so `f32` keeps its shortest
/// representation instead of the digits of its `f64` widening.
fn format_float(
    f: &mut core::fmt::Formatter<'_>,
    value: f64,
    text: String,
    suffix: &str,
) -> core::fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else if text.contains('.') || text.contains('e') || text.contains('E') {
        write!(f, "{}{}", text, suffix)
    } else {
        write!(f, "{}.{}", text, suffix)
    }
}

/// Any value a node can produce.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Value {
    Numeric(NumericValue),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn ty(&self) -> Type {
        match self {
            Value::Numeric(n) => Type::Numeric(n.kind()),
            Value::Bool(_) => Type::Bool,
            Value::Str(_) => Type::Str,
        }
    }

    pub fn as_numeric(&self) -> Option<NumericValue> {
        match self {
            Value::Numeric(n) => Some(*n),
            Value::Bool(_) | Value::Str(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_numeric().map(|n| n.as_f64())
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Numeric(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{:?}", s),
        }
    }
}

macro_rules! value_from {
    ($prim:ty, $variant:ident) => {
        impl From<$prim> for NumericValue {
            fn from(value: $prim) -> Self {
                NumericValue::$variant(value)
            }
        }

        impl From<$prim> for Value {
            fn from(value: $prim) -> Self {
                Value::Numeric(NumericValue::$variant(value))
            }
        }
    };
}

value_from! { i32, Int32 }
value_from! { i64, Int64 }
value_from! { f32, Float32 }
value_from! { f64, Float64 }

impl From<NumericValue> for Value {
    fn from(value: NumericValue) -> Self {
        Value::Numeric(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}
