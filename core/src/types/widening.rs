//! Numeric widening rules shared by every arithmetic node.
//!
//! Widening picks the widest kind under the fixed order
//! `Int32 < Int64 < Float32 < Float64`. Both the static pass
//! (`infer_return_type`) and the runtime pass (`evaluate`) go through these
//! functions, which is what keeps the two passes in agreement.

use crate::types::{NumericKind, Type};

/// Returns `true` if every type is numeric. Vacuously `true` for an empty slice;
/// callers check arity before asking.
pub fn is_all_numeric(types: &[Type]) -> bool {
    types.iter().all(Type::is_numeric)
}

/// Returns the widest numeric kind among `types`.
///
/// Returns `None` when the slice is empty or contains any non-numeric type.
pub fn widest_numeric_type(types: &[Type]) -> Option<NumericKind> {
    types
        .iter()
        .try_fold(None, |widest: Option<NumericKind>, ty| {
            let kind = ty.as_numeric()?;
            Some(Some(match widest {
                Some(current) => widen(current, kind),
                None => kind,
            }))
        })
        .flatten()
}

/// The wider of two numeric kinds.
pub fn widen(a: NumericKind, b: NumericKind) -> NumericKind {
    a.max(b)
}
