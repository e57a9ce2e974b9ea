//! Callable values.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::Result;
use crate::types::Arity;
use crate::value::Value;

/// Plain function pointer signature shared by every built-in operation.
pub type NativeFnPtr = fn(&[Value]) -> Result<Value>;

type Body = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A named function that can be stored in a [`Value`] and called with a
/// slice of arguments.
///
/// Built-ins wrap a [`NativeFnPtr`]; closures (such as the result of
/// `compose`) capture their environment. Cloning shares the body.
#[derive(Clone)]
pub struct Func {
    name: Arc<str>,
    arity: Arity,
    body: Arc<Body>,
}

impl Func {
    /// Wraps a closure.
    pub fn new<F>(name: impl Into<Arc<str>>, arity: Arity, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            body: Arc::new(body),
        }
    }

    /// Wraps a plain function pointer.
    #[must_use]
    pub fn native(name: &'static str, arity: Arity, func: NativeFnPtr) -> Self {
        Self::new(name, arity, func)
    }

    /// The function name, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared arity.
    ///
    /// Calls through [`Func::call`] do not enforce it.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body produces.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.body)(args)
    }

    fn body_addr(&self) -> usize {
        Arc::as_ptr(&self.body).cast::<()>() as usize
    }
}

impl PartialEq for Func {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl Eq for Func {}

impl Hash for Func {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.body_addr().hash(state);
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
