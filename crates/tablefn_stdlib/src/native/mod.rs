//! Dynamic forms of every combinator.
//!
//! Each function takes its arguments as a slice of [`Value`]s and has the
//! [`NativeFnPtr`](tablefn_foundation::NativeFnPtr) signature, so it can be
//! stored in a [`Func`] and registered in a [`Library`](crate::Library).
//! Argument kinds are checked before any work is done; the first offending
//! argument is reported by its zero-based position.
//!
//! A missing argument is treated as `nil`. The library's arity check catches
//! short calls earlier when it is enabled.
//!
//! This module contains:
//! - `sequence`: transpose, map, folds, compose
//! - `slice`: accessors, slicers, concatenation
//! - `arithmetic`: variadic numeric reducers

mod arithmetic;
mod sequence;
mod slice;

pub use arithmetic::{native_add, native_div, native_mul, native_sub};
pub use sequence::{native_compose, native_foldl, native_foldr, native_map, native_transpose};
pub use slice::{
    native_array_append, native_empty, native_head, native_init, native_inits,
    native_intersperse, native_last, native_replicate, native_tail, native_tails,
};

use tablefn_foundation::{Error, Func, Result, Seq, Type, Value};

/// Type of the argument at `position`, or nil when it is missing.
fn arg_type(args: &[Value], position: usize) -> Type {
    args.get(position).map_or(Type::Nil, Value::value_type)
}

/// Extracts the sequence at `position`.
fn expect_seq(args: &[Value], position: usize) -> Result<&Seq<Value>> {
    match args.get(position) {
        Some(Value::Seq(s)) => Ok(s),
        _ => Err(Error::invalid_argument(
            position,
            Type::any_seq(),
            arg_type(args, position),
        )),
    }
}

/// Extracts every argument from `offset` on as a sequence.
///
/// Cloning a sequence is O(1), so the copies are cheap.
fn expect_seqs(args: &[Value], offset: usize) -> Result<Vec<Seq<Value>>> {
    (offset..args.len())
        .map(|position| expect_seq(args, position).cloned())
        .collect()
}

/// Extracts the callable at `position`.
fn expect_fn(args: &[Value], position: usize) -> Result<&Func> {
    match args.get(position) {
        Some(Value::Fn(f)) => Ok(f),
        _ => Err(Error::invalid_argument(
            position,
            Type::Fn(tablefn_foundation::Arity::Variadic(0)),
            arg_type(args, position),
        )),
    }
}

/// Wraps a sequence of sequences as a value.
fn nested(tables: Seq<Seq<Value>>) -> Value {
    Value::Seq(tables.into_iter().map(Value::Seq).collect())
}
