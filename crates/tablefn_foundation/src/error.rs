//! Error types for tablefn.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::{Arity, Type};

/// The main error type for tablefn operations.
#[derive(Clone, Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error.
    ///
    /// `position` is the zero-based index of the offending argument.
    #[must_use]
    pub fn invalid_argument(position: usize, expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            position,
            expected,
            actual,
        })
    }

    /// Creates an empty collection error for the named operation.
    #[must_use]
    pub fn empty_collection(operation: &'static str) -> Self {
        Self::new(ErrorKind::EmptyCollection { operation })
    }

    /// Creates a division by zero error for the divisor at `position`.
    #[must_use]
    pub fn division_by_zero(position: usize) -> Self {
        Self::new(ErrorKind::DivisionByZero { position })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: Arity, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates an undefined function error.
    #[must_use]
    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedFunction(name.into()))
    }

    /// Creates an integer overflow error for the named operation.
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::new(ErrorKind::Overflow { operation })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error)]
pub enum ErrorKind {
    /// An argument has the wrong type (usually: is not a sequence).
    #[error("invalid argument at position {position}: expected {expected}, got {actual}")]
    InvalidArgument {
        /// Zero-based position of the argument in the call.
        position: usize,
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// An operation that needs at least one element got none.
    #[error("{operation}: empty collection")]
    EmptyCollection {
        /// The operation that was called.
        operation: &'static str,
    },

    /// A divisor after the first argument was zero.
    #[error("division by zero at position {position}")]
    DivisionByZero {
        /// Zero-based position of the zero divisor in the call.
        position: usize,
    },

    /// Wrong number of arguments to function.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// The accepted arity.
        expected: Arity,
        /// Actual number of arguments.
        actual: usize,
    },

    /// No function is registered under the name.
    #[error("undefined function: {0}")]
    UndefinedFunction(String),

    /// Integer arithmetic left the `i64` range.
    #[error("{operation}: integer overflow")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
}

/// Context about where an error occurred.
#[derive(Clone, Debug, Default)]
pub struct ErrorContext {
    /// Name of the function that was called.
    pub function: Option<String>,
    /// Stack of enclosing calls, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the called function.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(function) = &self.function {
            write!(f, "in {function}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
