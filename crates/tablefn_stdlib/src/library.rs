//! Name-based access to the dynamic combinators.
//!
//! A [`Library`] is an ordinary value owned by the caller. Nothing is
//! registered globally; two libraries never see each other's functions.
//!
//! # Example
//!
//! ```
//! use tablefn_stdlib::{Library, Value};
//!
//! let lib = Library::standard();
//! let sum = lib.call("add", &[Value::Int(1), Value::Int(2), Value::Int(3)]).unwrap();
//! assert_eq!(sum, Value::Int(6));
//!
//! let add = lib.as_value("add").unwrap();
//! let total = lib
//!     .call("foldl", &[add, Value::Int(0), Value::from(vec![1i64, 2, 3])])
//!     .unwrap();
//! assert_eq!(total, Value::Int(6));
//! ```

use std::collections::BTreeMap;

use tablefn_foundation::{Arity, Error, ErrorContext, Func, NativeFnPtr, Result, Value};

use crate::config::LibraryConfig;
use crate::native::{
    native_add, native_array_append, native_compose, native_div, native_empty, native_foldl,
    native_foldr, native_head, native_init, native_inits, native_intersperse, native_last,
    native_map, native_mul, native_replicate, native_sub, native_tail, native_tails,
    native_transpose,
};

/// Every built-in operation with its name and arity.
pub const STANDARD_FUNCTIONS: &[(&str, Arity, NativeFnPtr)] = &[
    // Sequence combinators
    ("transpose", Arity::Variadic(0), native_transpose),
    ("map", Arity::Variadic(1), native_map),
    ("foldl", Arity::Exact(3), native_foldl),
    ("foldr", Arity::Exact(3), native_foldr),
    ("compose", Arity::Exact(2), native_compose),
    // Accessors and slicers
    ("head", Arity::Exact(1), native_head),
    ("last", Arity::Exact(1), native_last),
    ("tail", Arity::Exact(1), native_tail),
    ("init", Arity::Exact(1), native_init),
    ("inits", Arity::Exact(1), native_inits),
    ("tails", Arity::Exact(1), native_tails),
    ("empty", Arity::Exact(1), native_empty),
    ("replicate", Arity::Exact(2), native_replicate),
    ("intersperse", Arity::Exact(2), native_intersperse),
    // Concatenation
    ("array_append", Arity::Variadic(0), native_array_append),
    // Arithmetic
    ("add", Arity::Variadic(1), native_add),
    ("sub", Arity::Variadic(1), native_sub),
    ("mul", Arity::Variadic(1), native_mul),
    ("div", Arity::Variadic(1), native_div),
];

/// A table of named functions.
#[derive(Clone, Debug, Default)]
pub struct Library {
    config: LibraryConfig,
    functions: BTreeMap<String, Func>,
}

impl Library {
    /// Creates an empty library.
    #[must_use]
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            config,
            functions: BTreeMap::new(),
        }
    }

    /// Creates a library holding every built-in, with the default config.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    /// Creates a library holding every built-in.
    #[must_use]
    pub fn with_config(config: LibraryConfig) -> Self {
        let mut library = Self::new(config);
        for &(name, arity, func) in STANDARD_FUNCTIONS {
            library.register(Func::native(name, arity, func));
        }
        library
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Adds a function under its own name, returning any function it replaces.
    pub fn register(&mut self, func: Func) -> Option<Func> {
        self.functions.insert(func.name().to_string(), func)
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Func> {
        self.functions.get(name)
    }

    /// Returns true if a function is registered under the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Looks up a function and wraps it as a value, ready to pass to `map`,
    /// the folds, or `compose`.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedFunction` if nothing is registered under the name.
    pub fn as_value(&self, name: &str) -> Result<Value> {
        self.get(name)
            .cloned()
            .map(Value::Fn)
            .ok_or_else(|| Error::undefined_function(name))
    }

    /// Calls the named function.
    ///
    /// Errors coming out of the function get the function name attached as
    /// context.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedFunction` for an unknown name, `ArityMismatch` when
    /// arity checking is on and the argument count is wrong, and otherwise
    /// whatever the function returns.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let func = self
            .get(name)
            .ok_or_else(|| Error::undefined_function(name))?;

        if self.config.check_arity && !func.arity().accepts(args.len()) {
            return Err(in_function(
                Error::arity_mismatch(func.arity(), args.len()),
                name,
            ));
        }

        if self.config.trace_calls {
            log::trace!("call {name} with {} argument(s)", args.len());
        }

        func.call(args).map_err(|err| {
            if self.config.trace_calls {
                log::debug!("{name} failed: {err}");
            }
            in_function(err, name)
        })
    }
}

/// Records `name` as the failing function, or as an enclosing frame if the
/// error already names one.
fn in_function(mut err: Error, name: &str) -> Error {
    let context = match err.context.take() {
        Some(context) => context.with_frame(name),
        None => ErrorContext::new().with_function(name),
    };
    err.with_context(context)
}
