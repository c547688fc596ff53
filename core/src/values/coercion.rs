//! Total conversions between numeric representations.
//!
//! Every conversion uses Rust `as` semantics: float to integer truncates
//! toward zero and saturates at the target bounds (`NaN` becomes `0`), and
//! `i64` to `i32` keeps the low 32 bits. None of these can fail.

use crate::types::NumericKind;
use crate::values::NumericValue;

impl NumericValue {
    pub fn as_i32(&self) -> i32 {
        match *self {
            NumericValue::Int32(v) => v,
            NumericValue::Int64(v) => v as i32,
            NumericValue::Float32(v) => v as i32,
            NumericValue::Float64(v) => v as i32,
        }
    }

    pub fn as_i64(&self) -> i64 {
        match *self {
            NumericValue::Int32(v) => i64::from(v),
            NumericValue::Int64(v) => v,
            NumericValue::Float32(v) => v as i64,
            NumericValue::Float64(v) => v as i64,
        }
    }

    pub fn as_f32(&self) -> f32 {
        match *self {
            NumericValue::Int32(v) => v as f32,
            NumericValue::Int64(v) => v as f32,
            NumericValue::Float32(v) => v,
            NumericValue::Float64(v) => v as f32,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            NumericValue::Int32(v) => f64::from(v),
            NumericValue::Int64(v) => v as f64,
            NumericValue::Float32(v) => f64::from(v),
            NumericValue::Float64(v) => v,
        }
    }

    /// Convert into the representation of `kind`.
    pub fn coerce(&self, kind: NumericKind) -> NumericValue {
        match kind {
            NumericKind::Int32 => NumericValue::Int32(self.as_i32()),
            NumericKind::Int64 => NumericValue::Int64(self.as_i64()),
            NumericKind::Float32 => NumericValue::Float32(self.as_f32()),
            NumericKind::Float64 => NumericValue::Float64(self.as_f64()),
        }
    }
}

/// Convert a plain `f64` (such as a configured protection value) into `kind`.
pub fn coerce_f64(value: f64, kind: NumericKind) -> NumericValue {
    NumericValue::Float64(value).coerce(kind)
}
