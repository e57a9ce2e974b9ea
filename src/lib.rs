//! tablefn - Functional combinators over immutable sequences
//!
//! This crate re-exports both layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tablefn_stdlib  Combinators, dynamic natives, Library
//! Layer 0: tablefn_foundation  Core types (Seq, Value, Func, Error)
//! ```

pub use tablefn_foundation as foundation;
pub use tablefn_stdlib as stdlib;
