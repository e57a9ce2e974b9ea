//! Accessors, slicers, and concatenation.

use std::iter;

use tablefn_foundation::{Error, Result, Seq};

/// Returns true if the sequence has no elements.
#[must_use]
pub fn empty<T: Clone>(table: &Seq<T>) -> bool {
    table.is_empty()
}

/// Returns the first element.
///
/// # Errors
///
/// Returns `EmptyCollection` if the sequence is empty.
pub fn head<T: Clone>(table: &Seq<T>) -> Result<&T> {
    table.first().ok_or_else(|| Error::empty_collection("head"))
}

/// Returns the last element.
///
/// # Errors
///
/// Returns `EmptyCollection` if the sequence is empty.
pub fn last<T: Clone>(table: &Seq<T>) -> Result<&T> {
    table.last().ok_or_else(|| Error::empty_collection("last"))
}

/// Returns every element after the first.
///
/// # Errors
///
/// Returns `EmptyCollection` if the sequence is empty.
pub fn tail<T: Clone>(table: &Seq<T>) -> Result<Seq<T>> {
    table
        .skip_first()
        .ok_or_else(|| Error::empty_collection("tail"))
}

/// Returns every element before the last.
///
/// # Errors
///
/// Returns `EmptyCollection` if the sequence is empty.
pub fn init<T: Clone>(table: &Seq<T>) -> Result<Seq<T>> {
    table
        .drop_last()
        .ok_or_else(|| Error::empty_collection("init"))
}

/// `[t, init(t), init(init(t)), ..., []]`, longest first.
///
/// Always `len(t) + 1` entries; `inits([])` is `[[]]`.
#[must_use]
pub fn inits<T: Clone>(table: &Seq<T>) -> Seq<Seq<T>> {
    iter::successors(Some(table.clone()), |t| init(t).ok()).collect()
}

/// `[t, tail(t), tail(tail(t)), ..., []]`, longest first.
///
/// Always `len(t) + 1` entries; `tails([])` is `[[]]`.
#[must_use]
pub fn tails<T: Clone>(table: &Seq<T>) -> Seq<Seq<T>> {
    iter::successors(Some(table.clone()), |t| tail(t).ok()).collect()
}

/// A sequence holding `count` clones of `value`.
#[must_use]
pub fn replicate<T: Clone>(count: usize, value: T) -> Seq<T> {
    iter::repeat_n(value, count).collect()
}

/// Inserts `separator` between every pair of adjacent elements.
///
/// An empty input gives an empty output; a single element is returned as is.
#[must_use]
pub fn intersperse<T: Clone>(separator: T, table: &Seq<T>) -> Seq<T> {
    let mut result = Vec::with_capacity((table.len() * 2).saturating_sub(1));
    let mut first = true;
    for item in table {
        if !first {
            result.push(separator.clone());
        }
        first = false;
        result.push(item.clone());
    }
    Seq::from(result)
}

/// Concatenates the sequences in argument order.
#[must_use]
pub fn array_append<T: Clone>(tables: &[Seq<T>]) -> Seq<T> {
    tables
        .iter()
        .fold(Seq::new(), |joined, table| joined.concat(table))
}
