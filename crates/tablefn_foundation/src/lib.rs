//! Sequences, dynamic values, callables, and error types for tablefn.
//!
//! This crate provides:
//! - [`Seq`] - The immutable, index-addressable sequence every combinator works on
//! - [`Value`] - The dynamic value type used at the untyped call boundary
//! - [`Func`] - Named, shareable callables that can be stored in a [`Value`]
//! - [`Type`] and [`Arity`] - Descriptors used when reporting rejected arguments
//! - [`Error`] - Error kinds with optional call context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod func;
pub mod seq;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use func::{Func, NativeFnPtr};
pub use seq::Seq;
pub use types::{Arity, Type};
pub use value::Value;

/// Result type for tablefn operations.
pub type Result<T> = std::result::Result<T, Error>;
