//! Functional combinators over immutable sequences.
//!
//! Every operation exists in two forms:
//! - A typed form at the crate root, generic over the element type and taking
//!   [`Seq`] arguments, so passing something that is not a sequence does not
//!   compile.
//! - A dynamic form in [`native`], taking a slice of [`Value`]s and checking
//!   argument kinds at runtime. The [`Library`] exposes these by name.
//!
//! Groups:
//! - Sequence combinators: [`transpose`], [`map`], [`foldl`], [`foldr`], [`compose`]
//! - Accessors and slicers: [`head`], [`last`], [`tail`], [`init`], [`inits`],
//!   [`tails`], [`empty`], [`replicate`], [`intersperse`]
//! - Concatenation: [`array_append`]
//! - Variadic arithmetic: [`add`], [`sub`], [`mul`], [`div`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod config;
pub mod library;
pub mod native;
pub mod sequence;
pub mod slice;

pub use arithmetic::{add, div, mul, sub};
pub use config::LibraryConfig;
pub use library::Library;
pub use sequence::{compose, foldl, foldr, map, transpose, try_foldl, try_foldr, try_map};
pub use slice::{
    array_append, empty, head, init, inits, intersperse, last, replicate, tail, tails,
};

pub use tablefn_foundation::{Error, ErrorKind, Func, Result, Seq, Value};
