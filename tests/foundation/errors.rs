//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tablefn_foundation::{Arity, Error, ErrorContext, ErrorKind, Type};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument(2, Type::any_seq(), Type::Int);
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidArgument { position: 2, .. }
    ));
    assert!(err.context.is_none());
}

#[test]
fn error_empty_collection() {
    let err = Error::empty_collection("head");
    assert!(matches!(
        err.kind,
        ErrorKind::EmptyCollection { operation: "head" }
    ));
}

#[test]
fn error_division_by_zero() {
    let err = Error::division_by_zero(3);
    assert!(matches!(err.kind, ErrorKind::DivisionByZero { position: 3 }));
}

#[test]
fn error_undefined_function() {
    let err = Error::undefined_function("zip");
    assert!(matches!(err.kind, ErrorKind::UndefinedFunction(ref name) if name == "zip"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_invalid_argument() {
    let err = Error::invalid_argument(1, Type::any_seq(), Type::Nil);
    assert_eq!(
        format!("{err}"),
        "invalid argument at position 1: expected seq<any>, got nil"
    );
}

#[test]
fn error_display_empty_collection() {
    assert_eq!(
        format!("{}", Error::empty_collection("last")),
        "last: empty collection"
    );
}

#[test]
fn error_display_division_by_zero() {
    assert_eq!(
        format!("{}", Error::division_by_zero(1)),
        "division by zero at position 1"
    );
}

#[test]
fn error_display_arity_mismatch() {
    let err = Error::arity_mismatch(Arity::Exact(3), 1);
    assert_eq!(format!("{err}"), "arity mismatch: expected exactly 3, got 1");
    let err = Error::arity_mismatch(Arity::Variadic(1), 0);
    assert_eq!(format!("{err}"), "arity mismatch: expected at least 1, got 0");
}

#[test]
fn error_display_overflow() {
    assert_eq!(
        format!("{}", Error::overflow("mul")),
        "mul: integer overflow"
    );
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new().with_function("head");
    assert_eq!(format!("{ctx}"), "in head");

    let ctx = ctx.with_frame("foldl");
    let rendered = format!("{ctx}");
    assert!(rendered.starts_with("in head\n"));
    assert!(rendered.contains("  in foldl"));
}

#[test]
fn error_with_context_keeps_kind() {
    let err = Error::empty_collection("init")
        .with_context(ErrorContext::new().with_function("init"));
    assert!(matches!(err.kind, ErrorKind::EmptyCollection { .. }));
    assert_eq!(
        err.context.and_then(|c| c.function),
        Some("init".to_string())
    );
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::division_by_zero(1));
}
