use core::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::values::NumericValue;

/// The four primitive numeric representations a node can produce.
///
/// Variants are declared in widening order, so the derived `Ord` is the
/// widening order: `Int32 < Int64 < Float32 < Float64`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NumericKind {
    Int32 = 0,
    Int64 = 1,
    Float32 = 2,
    Float64 = 3,
}

impl NumericKind {
    /// All kinds, narrowest first.
    pub const ALL: [NumericKind; 4] = [
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::Float32,
        NumericKind::Float64,
    ];

    /// The additive identity of this kind.
    pub fn zero(self) -> NumericValue {
        match self {
            NumericKind::Int32 => NumericValue::Int32(0),
            NumericKind::Int64 => NumericValue::Int64(0),
            NumericKind::Float32 => NumericValue::Float32(0.0),
            NumericKind::Float64 => NumericValue::Float64(0.0),
        }
    }

    pub fn is_integral(self) -> bool {
        matches!(self, NumericKind::Int32 | NumericKind::Int64)
    }
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NumericKind::Int32 => write!(f, "Int32"),
            NumericKind::Int64 => write!(f, "Int64"),
            NumericKind::Float32 => write!(f, "Float32"),
            NumericKind::Float64 => write!(f, "Float64"),
        }
    }
}

/// Type tag of a node result.
///
/// Only the numeric variants are accepted by arithmetic nodes. `Bool` and
/// `Str` exist so terminals supplied by the host engine can produce values
/// that arithmetic nodes must reject.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Numeric(NumericKind),
    Bool,
    Str,
}

impl Type {
    pub const INT32: Type = Type::Numeric(NumericKind::Int32);
    pub const INT64: Type = Type::Numeric(NumericKind::Int64);
    pub const FLOAT32: Type = Type::Numeric(NumericKind::Float32);
    pub const FLOAT64: Type = Type::Numeric(NumericKind::Float64);

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Numeric(_))
    }

    pub fn as_numeric(&self) -> Option<NumericKind> {
        match self {
            Type::Numeric(kind) => Some(*kind),
            Type::Bool | Type::Str => None,
        }
    }
}

impl From<NumericKind> for Type {
    fn from(kind: NumericKind) -> Self {
        Type::Numeric(kind)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Type::Numeric(kind) => write!(f, "{}", kind),
            Type::Bool => write!(f, "Bool"),
            Type::Str => write!(f, "Str"),
        }
    }
}
