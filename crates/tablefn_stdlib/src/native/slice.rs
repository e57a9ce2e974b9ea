//! Dynamic accessors, slicers, and concatenation.

use tablefn_foundation::{Error, Result, Seq, Type, Value};

use super::{arg_type, expect_seq, expect_seqs, nested};
use crate::slice::{array_append, head, init, inits, intersperse, last, replicate, tail, tails};

/// Sequence with at least one element, or `EmptyCollection` for anything
/// else (including a non-sequence).
fn non_empty<'a>(args: &'a [Value], operation: &'static str) -> Result<&'a Seq<Value>> {
    match args.first() {
        Some(Value::Seq(s)) if !s.is_empty() => Ok(s),
        _ => Err(Error::empty_collection(operation)),
    }
}

/// Collection: empty - true for a sequence with no elements
pub fn native_empty(args: &[Value]) -> Result<Value> {
    let table = expect_seq(args, 0)?;
    Ok(Value::Bool(table.is_empty()))
}

/// Collection: head - first element
pub fn native_head(args: &[Value]) -> Result<Value> {
    head(non_empty(args, "head")?).cloned()
}

/// Collection: last - last element
pub fn native_last(args: &[Value]) -> Result<Value> {
    last(non_empty(args, "last")?).cloned()
}

/// Collection: tail - everything after the first element
pub fn native_tail(args: &[Value]) -> Result<Value> {
    tail(non_empty(args, "tail")?).map(Value::Seq)
}

/// Collection: init - everything before the last element
pub fn native_init(args: &[Value]) -> Result<Value> {
    init(non_empty(args, "init")?).map(Value::Seq)
}

/// Collection: inits - every prefix, longest first
/// (inits [1 2]) -> [[1 2] [1] []]
pub fn native_inits(args: &[Value]) -> Result<Value> {
    let table = expect_seq(args, 0)?;
    Ok(nested(inits(table)))
}

/// Collection: tails - every suffix, longest first
/// (tails [1 2]) -> [[1 2] [2] []]
pub fn native_tails(args: &[Value]) -> Result<Value> {
    let table = expect_seq(args, 0)?;
    Ok(nested(tails(table)))
}

/// Collection: replicate - repeat a value n times
/// (replicate 3 :x) -> [:x :x :x]
pub fn native_replicate(args: &[Value]) -> Result<Value> {
    match args.first() {
        Some(Value::Int(n)) => {
            let count = usize::try_from(*n).unwrap_or(0);
            let value = args.get(1).cloned().unwrap_or(Value::Nil);
            Ok(Value::Seq(replicate(count, value)))
        }
        _ => Err(Error::invalid_argument(0, Type::Int, arg_type(args, 0))),
    }
}

/// Collection: intersperse - separator between adjacent elements
/// (intersperse 0 [1 2 3]) -> [1 0 2 0 3]
pub fn native_intersperse(args: &[Value]) -> Result<Value> {
    let table = expect_seq(args, 1)?;
    let separator = args.first().cloned().unwrap_or(Value::Nil);
    Ok(Value::Seq(intersperse(separator, table)))
}

/// Collection: array_append - concatenate sequences
/// (array_append [1 2] [3]) -> [1 2 3]
pub fn native_array_append(args: &[Value]) -> Result<Value> {
    let tables = expect_seqs(args, 0)?;
    Ok(Value::Seq(array_append(&tables)))
}
