//! Integration tests for Layer 1: Standard library
//!
//! Tests the typed combinators, the dynamic natives, and name-based
//! dispatch through a Library.

mod library;
