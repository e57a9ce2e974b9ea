//! Sequence combinators: zip, map, folds, and function composition.

use tablefn_foundation::Seq;

/// Zips any number of sequences into columns.
///
/// Column `i` holds the `i`-th element of every input, in argument order.
/// The result stops at the shortest input; zero inputs give an empty result.
///
/// ```
/// use tablefn_foundation::seq;
/// use tablefn_stdlib::transpose;
///
/// let columns = transpose(&[seq![1, 2, 3], seq![4, 5]]);
/// assert_eq!(columns, seq![seq![1, 4], seq![2, 5]]);
/// ```
#[must_use]
pub fn transpose<T: Clone>(tables: &[Seq<T>]) -> Seq<Seq<T>> {
    let rows = tables.iter().map(Seq::len).min().unwrap_or(0);
    (0..rows)
        .map(|i| tables.iter().map(|table| table[i].clone()).collect())
        .collect()
}

/// Applies `f` to every column of [`transpose`]`(tables)`.
///
/// `f` sees the column as a slice, one element per input sequence. The
/// result is as long as the shortest input.
pub fn map<T, U, F>(mut f: F, tables: &[Seq<T>]) -> Seq<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(&[T]) -> U,
{
    let mut column = Vec::with_capacity(tables.len());
    transpose(tables)
        .into_iter()
        .map(|col| {
            column.clear();
            column.extend(col);
            f(&column)
        })
        .collect()
}

/// Fallible [`map`]: stops at the first column for which `f` fails.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn try_map<T, U, E, F>(mut f: F, tables: &[Seq<T>]) -> Result<Seq<U>, E>
where
    T: Clone,
    U: Clone,
    F: FnMut(&[T]) -> Result<U, E>,
{
    let mut column = Vec::with_capacity(tables.len());
    transpose(tables)
        .into_iter()
        .map(|col| {
            column.clear();
            column.extend(col);
            f(&column)
        })
        .collect()
}

/// Left fold: `f(f(f(init, t[0]), t[1]), ..., t[n-1])`.
///
/// Returns `init` unchanged for an empty sequence.
pub fn foldl<T, A, F>(f: F, init: A, table: &Seq<T>) -> A
where
    T: Clone,
    F: FnMut(A, &T) -> A,
{
    table.iter().fold(init, f)
}

/// Fallible [`foldl`].
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn try_foldl<T, A, E, F>(f: F, init: A, table: &Seq<T>) -> Result<A, E>
where
    T: Clone,
    F: FnMut(A, &T) -> Result<A, E>,
{
    table.iter().try_fold(init, f)
}

/// Right fold with the accumulator kept as the first argument:
/// `f(f(f(init, t[n-1]), t[n-2]), ..., t[0])`.
///
/// This is a left fold over the reversed sequence, not the textbook
/// `f(t[0], f(t[1], ... f(t[n-1], init)))`. Callers depend on this order.
pub fn foldr<T, A, F>(f: F, init: A, table: &Seq<T>) -> A
where
    T: Clone,
    F: FnMut(A, &T) -> A,
{
    table.iter().rev().fold(init, f)
}

/// Fallible [`foldr`].
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn try_foldr<T, A, E, F>(f: F, init: A, table: &Seq<T>) -> Result<A, E>
where
    T: Clone,
    F: FnMut(A, &T) -> Result<A, E>,
{
    table.iter().rev().try_fold(init, f)
}

/// Returns `h` such that `h(x) == f(g(x))`.
///
/// Several arguments can be passed to `g` as a tuple.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |args| f(g(args))
}
