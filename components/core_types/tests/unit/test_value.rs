//! Unit tests for Value

use core_types::Value;
use num_bigint::BigInt;

#[test]
fn test_every_integer_type_accepts_zero() {
    let zero = Value::from(0);
    for ty in [
        "i8", "i16", "i32", "i64", "i128", "u8", "u16", "u32", "u64", "u128", "uptr",
    ] {
        assert!(zero.fits(ty), "0 should fit {}", ty);
    }
}

#[test]
fn test_signed_boundaries() {
    assert!(Value::from(i64::from(i16::MIN)).fits("i16"));
    assert!(!Value::from(i64::from(i16::MIN) - 1).fits("i16"));
    assert!(Value::from(i64::from(i32::MAX)).fits("i32"));
    assert!(!Value::from(i64::from(i32::MAX) + 1).fits("i32"));
}

#[test]
fn test_unsigned_rejects_negative() {
    for ty in ["u8", "u16", "u32", "u64", "u128", "uptr"] {
        assert!(!Value::from(-1).fits(ty), "-1 should not fit {}", ty);
    }
}

#[test]
fn test_i128_min() {
    let min = Value::Integer(BigInt::from(i128::MIN));
    assert!(min.fits("i128"));
    assert!(!min.fits("i64"));
}

#[test]
fn test_kinds_do_not_cross() {
    assert!(!Value::from("1").fits("i32"));
    assert!(!Value::from(1).fits("str"));
    assert!(!Value::from(1).fits("f64"));
    assert!(!Value::Float(1.0).fits("bool"));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Void.type_name(), "void");
    assert_eq!(Value::from(true).type_name(), "bool");
    assert_eq!(Value::Float(2.5).type_name(), "float");
    assert_eq!(Value::from("s").type_name(), "str");
}
