//! Type and arity descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type descriptor for dynamic values.
///
/// Used to describe what an operation expected and what it actually received
/// when it rejects an argument.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Either an integer or a float.
    Number,
    /// String type.
    String,
    /// Sequence type with the given element type.
    Seq(Box<Type>),
    /// Any type (accepts any value).
    Any,
    /// Function type (arity only, no parameter types).
    Fn(Arity),
}

/// Number of arguments a function accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arity {
    /// Exactly N arguments.
    Exact(usize),
    /// Between min and max arguments (inclusive).
    Range(usize, usize),
    /// At least N arguments, then any number more.
    Variadic(usize),
}

impl Type {
    /// Creates a sequence type with the given element type.
    #[must_use]
    pub fn seq(element: Type) -> Self {
        Self::Seq(Box::new(element))
    }

    /// The type of a sequence whose elements are not known statically.
    #[must_use]
    pub fn any_seq() -> Self {
        Self::seq(Self::Any)
    }
}

impl Arity {
    /// Returns true if a call with `count` arguments satisfies this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::Range(min, max) => count >= min && count <= max,
            Self::Variadic(min) => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::Range(min, max) => write!(f, "{min} to {max}"),
            Self::Variadic(min) => write!(f, "at least {min}"),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Seq(t) => write!(f, "seq<{t:?}>"),
            Self::Any => write!(f, "any"),
            Self::Fn(arity) => write!(f, "fn({arity})"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
