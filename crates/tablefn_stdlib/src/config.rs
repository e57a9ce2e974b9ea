//! Configuration for a [`Library`](crate::Library).

/// Controls how a [`Library`](crate::Library) dispatches calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Reject calls whose argument count does not match the function's
    /// declared arity before running it.
    pub check_arity: bool,

    /// Emit `log` records for each dispatch and each failed call.
    pub trace_calls: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl LibraryConfig {
    /// Arity checks on, tracing off.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            check_arity: true,
            trace_calls: false,
        }
    }

    /// No arity checks: missing arguments reach the function as `nil`.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            check_arity: false,
            trace_calls: false,
        }
    }

    /// Arity checks and call tracing on.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            check_arity: true,
            trace_calls: true,
        }
    }

    /// Builder method to set arity checking.
    #[must_use]
    pub fn with_check_arity(mut self, check_arity: bool) -> Self {
        self.check_arity = check_arity;
        self
    }

    /// Builder method to set call tracing.
    #[must_use]
    pub fn with_trace_calls(mut self, trace_calls: bool) -> Self {
        self.trace_calls = trace_calls;
        self
    }
}
