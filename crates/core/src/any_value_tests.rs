// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use super::*;

#[test]
fn empty_is_empty() {
    assert!(AnyValue::Empty.is_empty());
    assert!(!AnyValue::UInt64(0).is_empty());
}

#[test]
fn numeric_conversions() {
    let v: AnyValue = 42u64.into();
    assert_eq!(v.as_u64(), Some(42));
    assert_eq!(v.as_i64(), Some(42));

    let v: AnyValue = (-1i64).into();
    assert_eq!(v.as_i64(), Some(-1));
    assert_eq!(v.as_u64(), None);
}

#[test]
fn struct_field_lookup() {
    let v = AnyValue::Struct(vec![
        ("a".to_string(), AnyValue::Int64(1)),
        ("b".to_string(), AnyValue::String("x".to_string())),
    ]);
    assert_eq!(v.field("a"), Some(&AnyValue::Int64(1)));
    assert_eq!(v.field("missing"), None);
    assert_eq!(AnyValue::Empty.field("a"), None);
}

#[test]
fn display_formats_struct_and_array() {
    let v = AnyValue::Array(vec![AnyValue::Int64(1), AnyValue::Int64(2)]);
    assert_eq!(v.to_string(), "[1, 2]");

    let v = AnyValue::Struct(vec![("x".to_string(), AnyValue::Bool(true))]);
    assert_eq!(v.to_string(), "{x: true}");
}

#[test]
fn serde_roundtrip() {
    let v = AnyValue::UInt64(7);
    let json = serde_json::to_string(&v).unwrap();
    let back: AnyValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
