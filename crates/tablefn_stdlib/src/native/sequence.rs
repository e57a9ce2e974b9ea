//! Dynamic zip, map, folds, and composition.

use tablefn_foundation::{Func, Result, Value};

use super::{expect_fn, expect_seq, expect_seqs, nested};
use crate::sequence::{transpose, try_foldl, try_foldr, try_map};

/// Sequence: transpose - zip sequences into columns
/// (transpose [1 2 3] [4 5]) -> [[1 4] [2 5]]
pub fn native_transpose(args: &[Value]) -> Result<Value> {
    let tables = expect_seqs(args, 0)?;
    Ok(nested(transpose(&tables)))
}

/// Sequence: map - apply a function to each column
/// (map f [1 2 3] [10 20]) -> [(f 1 10) (f 2 20)]
pub fn native_map(args: &[Value]) -> Result<Value> {
    let func = expect_fn(args, 0)?;
    let tables = expect_seqs(args, 1)?;
    try_map(|column| func.call(column), &tables).map(Value::Seq)
}

/// Sequence: foldl - left fold with accumulator first
/// (foldl f init [a b c]) -> (f (f (f init a) b) c)
pub fn native_foldl(args: &[Value]) -> Result<Value> {
    let func = expect_fn(args, 0)?;
    let table = expect_seq(args, 2)?;
    let init = args.get(1).cloned().unwrap_or(Value::Nil);
    try_foldl(|acc, item| func.call(&[acc, item.clone()]), init, table)
}

/// Sequence: foldr - accumulator-first fold from the last element
/// (foldr f init [a b c]) -> (f (f (f init c) b) a)
pub fn native_foldr(args: &[Value]) -> Result<Value> {
    let func = expect_fn(args, 0)?;
    let table = expect_seq(args, 2)?;
    let init = args.get(1).cloned().unwrap_or(Value::Nil);
    try_foldr(|acc, item| func.call(&[acc, item.clone()]), init, table)
}

/// Sequence: compose - chain two functions
/// ((compose f g) x y) -> (f (g x y))
pub fn native_compose(args: &[Value]) -> Result<Value> {
    let outer = expect_fn(args, 0)?.clone();
    let inner = expect_fn(args, 1)?.clone();
    let name = format!("compose({}, {})", outer.name(), inner.name());
    let arity = inner.arity();
    Ok(Value::Fn(Func::new(name, arity, move |call_args: &[Value]| {
        let intermediate = inner.call(call_args)?;
        outer.call(&[intermediate])
    })))
}
