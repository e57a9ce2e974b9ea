//! Integration tests for the Library registry
//!
//! Tests name-based dispatch, configuration, and caller extensions.

use std::sync::Arc;
use std::thread;

use tablefn_foundation::{Arity, ErrorKind, Func, Value};
use tablefn_stdlib::{Library, LibraryConfig};

fn ints(values: &[i64]) -> Value {
    Value::from(values.to_vec())
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn every_operation_is_registered() {
    let lib = Library::standard();
    for name in [
        "transpose",
        "map",
        "foldl",
        "foldr",
        "compose",
        "head",
        "last",
        "tail",
        "init",
        "inits",
        "tails",
        "empty",
        "replicate",
        "intersperse",
        "array_append",
        "add",
        "sub",
        "mul",
        "div",
    ] {
        assert!(lib.contains(name), "{name} missing");
    }
    assert_eq!(lib.names().count(), 19);
}

#[test]
fn library_functions_as_arguments() {
    let lib = Library::standard();
    let add = lib.as_value("add").unwrap();

    let summed = lib
        .call("map", &[add.clone(), ints(&[1, 2, 3]), ints(&[1, 2, 3])])
        .unwrap();
    assert_eq!(summed, ints(&[2, 4, 6]));

    let total = lib.call("foldl", &[add, Value::Int(0), ints(&[1, 2, 3])]).unwrap();
    assert_eq!(total, Value::Int(6));

    let err = lib
        .call(
            "map",
            &[
                lib.as_value("head").unwrap(),
                lib.call("tails", &[ints(&[1, 2, 3])]).unwrap(),
            ],
        )
        .unwrap_err();
    // the last suffix is empty
    assert!(matches!(err.kind, ErrorKind::EmptyCollection { .. }));
}

#[test]
fn compose_through_library() {
    let mut lib = Library::standard();
    lib.register(Func::native("square", Arity::Exact(1), |args| {
        tablefn_stdlib::native::native_mul(&[args[0].clone(), args[0].clone()])
    }));
    let sum = lib
        .call("compose", &[lib.as_value("add").unwrap(), lib.as_value("add").unwrap()])
        .unwrap();
    assert_eq!(
        sum.as_fn().unwrap().call(&[Value::Int(1), Value::Int(2)]).unwrap(),
        Value::Int(3)
    );

    let h = lib
        .call("compose", &[lib.as_value("square").unwrap(), lib.as_value("head").unwrap()])
        .unwrap();
    lib.register(h.as_fn().unwrap().clone());
    assert!(lib.contains("compose(square, head)"));
    assert_eq!(
        lib.call("compose(square, head)", &[ints(&[3, 4])]).unwrap(),
        Value::Int(9)
    );
}

#[test]
fn undefined_function() {
    let lib = Library::standard();
    let err = lib.call("concat", &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UndefinedFunction(_)));
    assert_eq!(format!("{err}"), "undefined function: concat");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn strict_rejects_wrong_arity() {
    let lib = Library::with_config(LibraryConfig::strict());
    let err = lib.call("foldl", &[lib.as_value("add").unwrap(), Value::Int(0)]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ArityMismatch {
            expected: Arity::Exact(3),
            actual: 2
        }
    ));
    let err = lib.call("add", &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { actual: 0, .. }));
}

#[test]
fn permissive_lets_the_function_decide() {
    let lib = Library::with_config(LibraryConfig::permissive());
    // missing sequence reaches foldl as nil
    let err = lib.call("foldl", &[lib.as_value("add").unwrap(), Value::Int(0)]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidArgument { position: 2, .. }
    ));
}

#[test]
fn tracing_does_not_change_results() {
    let traced = Library::with_config(LibraryConfig::debug());
    let plain = Library::standard();
    let args = [ints(&[1, 2]), ints(&[3])];
    assert_eq!(
        traced.call("array_append", &args).unwrap(),
        plain.call("array_append", &args).unwrap()
    );
    assert!(traced.config().trace_calls);
    assert!(traced.call("head", &[ints(&[])]).is_err());
}

#[test]
fn error_context_names_function() {
    let lib = Library::standard();
    let err = lib.call("init", &[ints(&[])]).unwrap_err();
    let ctx = err.context.expect("context");
    assert_eq!(ctx.function.as_deref(), Some("init"));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn shared_across_threads() {
    let lib = Arc::new(Library::standard());
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let lib = Arc::clone(&lib);
            thread::spawn(move || lib.call("add", &[Value::Int(i), Value::Int(i)]))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = Value::Int(2 * i64::try_from(i).unwrap());
        assert_eq!(handle.join().unwrap().unwrap(), expected);
    }
}
