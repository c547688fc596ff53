use pretty_assertions::assert_eq;

use super::widening::{is_all_numeric, widen, widest_numeric_type};
use super::{NumericKind, Type};

use NumericKind::*;

#[test]
fn test_widening_matrix() {
    // Row: left operand, column: right operand.
    let expected = [
        [Int32, Int64, Float32, Float64],
        [Int64, Int64, Float32, Float64],
        [Float32, Float32, Float32, Float64],
        [Float64, Float64, Float64, Float64],
    ];

    for (i, left) in NumericKind::ALL.iter().enumerate() {
        for (j, right) in NumericKind::ALL.iter().enumerate() {
            let widened = widest_numeric_type(&[Type::from(*left), Type::from(*right)]);
            assert_eq!(
                widened,
                Some(expected[i][j]),
                "widening {} with {}",
                left,
                right
            );
        }
    }
}

#[test]
fn test_widening_is_commutative_and_never_narrows() {
    for left in NumericKind::ALL {
        for right in NumericKind::ALL {
            let ab = widest_numeric_type(&[left.into(), right.into()]).unwrap();
            let ba = widest_numeric_type(&[right.into(), left.into()]).unwrap();
            assert_eq!(ab, ba);
            assert!(ab >= left && ab >= right);
            assert_eq!(ab, widen(left, right));
        }
    }
}

#[test]
fn test_widening_same_kind_is_identity() {
    for kind in NumericKind::ALL {
        assert_eq!(widest_numeric_type(&[kind.into(), kind.into()]), Some(kind));
    }
}

#[test]
fn test_widening_single_input() {
    for kind in NumericKind::ALL {
        assert_eq!(widest_numeric_type(&[kind.into()]), Some(kind));
    }
}

#[test]
fn test_widening_n_ary() {
    let types = [Type::INT32, Type::FLOAT32, Type::INT64];
    assert_eq!(widest_numeric_type(&types), Some(Float32));
}

#[test]
fn test_widening_empty_is_none() {
    assert_eq!(widest_numeric_type(&[]), None);
    assert!(is_all_numeric(&[]));
}

#[test]
fn test_widening_rejects_non_numeric() {
    assert_eq!(widest_numeric_type(&[Type::INT32, Type::Bool]), None);
    assert_eq!(widest_numeric_type(&[Type::Str, Type::FLOAT64]), None);
    assert!(!is_all_numeric(&[Type::FLOAT64, Type::Str]));
    assert!(is_all_numeric(&[Type::FLOAT64, Type::INT32, Type::INT64]));
}
