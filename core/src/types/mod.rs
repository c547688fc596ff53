mod types;
pub mod widening;

#[cfg(test)]
mod widening_test;

pub use types::{NumericKind, Type};
pub use widening::{is_all_numeric, widen, widest_numeric_type};
