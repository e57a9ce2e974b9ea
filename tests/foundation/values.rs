//! Integration tests for dynamic values
//!
//! Tests Value conversion, typing, equality, display, and function values.

use std::collections::HashSet;

use tablefn_foundation::{Arity, Func, Seq, Type, Value};

// =============================================================================
// Conversion and Typing
// =============================================================================

#[test]
fn value_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(3i64), Value::Int(3));
    assert_eq!(Value::from(3i32), Value::Int(3));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("hi").as_str(), Some("hi"));
    assert_eq!(Value::from(String::from("hi")), Value::from("hi"));
}

#[test]
fn value_from_vec_builds_seq() {
    let v = Value::from(vec![1i64, 2]);
    let s = v.as_seq().unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s[1], Value::Int(2));
}

#[test]
fn value_types() {
    assert_eq!(Value::Nil.value_type(), Type::Nil);
    assert_eq!(Value::Int(1).value_type(), Type::Int);
    assert_eq!(Value::Float(1.0).value_type(), Type::Float);
    assert_eq!(Value::from("x").value_type(), Type::String);
    assert_eq!(Value::Seq(Seq::new()).value_type(), Type::any_seq());

    let f = Func::native("id", Arity::Exact(1), |args| Ok(args[0].clone()));
    assert_eq!(Value::from(f).value_type(), Type::Fn(Arity::Exact(1)));
}

#[test]
fn number_accessors() {
    assert_eq!(Value::Int(2).as_number(), Some(2.0));
    assert_eq!(Value::Float(2.5).as_number(), Some(2.5));
    assert_eq!(Value::from("2").as_number(), None);
    assert!(Value::Int(0).is_zero());
    assert!(Value::Float(0.0).is_zero());
    assert!(!Value::Nil.is_zero());
}

#[test]
fn accessors_reject_other_variants() {
    assert_eq!(Value::Nil.as_int(), None);
    assert_eq!(Value::Int(1).as_float(), None);
    assert_eq!(Value::Int(1).as_str(), None);
    assert!(Value::from("x").as_seq().is_none());
    assert!(Value::Seq(Seq::new()).as_fn().is_none());
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn int_and_float_are_distinct() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
}

#[test]
fn values_hash_consistently() {
    let mut set = HashSet::new();
    set.insert(Value::from(vec![1i64, 2]));
    set.insert(Value::from(vec![1i64, 2]));
    set.insert(Value::Float(f64::NAN));
    set.insert(Value::Float(f64::NAN));
    assert_eq!(set.len(), 2);
}

#[test]
fn functions_compare_by_identity() {
    let f = Func::native("id", Arity::Exact(1), |args| Ok(args[0].clone()));
    let g = Func::native("id", Arity::Exact(1), |args| Ok(args[0].clone()));
    assert_eq!(f, f.clone());
    assert_ne!(Value::from(f), Value::from(g));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn value_display() {
    let nested = Value::from(vec![Value::from(vec![1i64, 2]), Value::Nil, Value::from("x")]);
    assert_eq!(format!("{nested}"), "[[1 2] nil x]");

    let f = Func::native("head", Arity::Exact(1), |_| Ok(Value::Nil));
    assert_eq!(format!("{}", Value::from(f)), "<fn head>");
}

// =============================================================================
// Function Values
// =============================================================================

#[test]
fn closures_capture_environment() {
    let offset = 10;
    let f = Func::new("offset", Arity::Exact(1), move |args: &[Value]| {
        Ok(Value::Int(args[0].as_int().unwrap_or(0) + offset))
    });
    assert_eq!(f.name(), "offset");
    assert_eq!(f.call(&[Value::Int(5)]).unwrap(), Value::Int(15));
}
