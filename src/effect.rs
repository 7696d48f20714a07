//! The side-effect handler: outcome of an operation with no meaningful result.
//!
//! [`Effect`] is [`Resolve`](crate::Resolve) without the success payload. There is
//! nothing to map or filter, so recovery ([`Effect::catch_error`],
//! [`Effect::do_on_error`]) and the terminal [`Effect::or_else`] /
//! [`Effect::into_result`] are the whole algebra, plus [`Effect::effect`], which
//! settles both branches into a fresh handler with a new error type.
//!
//! # Example
//!
//! ```rust
//! use dichotomy::{run_effect, Effect};
//! use std::io;
//!
//! let flushed: Effect = run_effect(|| Err(io::Error::other("broken pipe").into()));
//!
//! let mut warned = false;
//! flushed
//!     .do_on_error(|_: &io::Error| warned = true)
//!     .or_else(|e| assert_eq!(e.to_string(), "broken pipe"));
//! assert!(warned);
//! ```

use std::error::Error as StdError;

use crate::error::{BoxError, Throwable};

/// Outcome of a runnable that may fail.
///
/// `Empty` means the operation completed (or a matching catch consumed its error)
/// and there is nothing left to report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an Effect may hold an unhandled error"]
pub enum Effect<E = BoxError> {
    /// The operation failed and no recovery has matched yet.
    Error(E),
    /// Nothing to report.
    Empty,
}

impl<E> Effect<E> {
    /// Capture a unit `Result` as `Empty` or `Error`.
    #[inline]
    pub fn from_result(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Effect::Empty,
            Err(error) => Effect::Error(error),
        }
    }

    /// Returns `true` if an unhandled error is present.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Effect::Error(_))
    }

    /// Returns `true` if there is nothing to report.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Effect::Empty)
    }

    /// Borrow the error, if any.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Effect::Error(error) => Some(error),
            Effect::Empty => None,
        }
    }

    /// Convert the error type.
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Effect<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Effect::Error(error) => Effect::Error(f(error)),
            Effect::Empty => Effect::Empty,
        }
    }

    /// Observe the error when `predicate` accepts it. Always returns self.
    #[inline]
    pub fn do_on_error_if<P, F>(self, predicate: P, f: F) -> Self
    where
        P: FnOnce(&E) -> bool,
        F: FnOnce(&E),
    {
        if let Effect::Error(ref error) = self {
            if predicate(error) {
                f(error);
            }
        }
        self
    }

    /// Consume the error with `f` when `predicate` accepts it, leaving `Empty`.
    #[inline]
    pub fn catch_error_if<P, F>(self, predicate: P, f: F) -> Self
    where
        P: FnOnce(&E) -> bool,
        F: FnOnce(E),
    {
        match self {
            Effect::Error(error) if predicate(&error) => {
                f(error);
                Effect::Empty
            }
            other => other,
        }
    }

    /// Run the next runnable only if nothing went wrong so far.
    #[inline]
    pub fn then_run<X, F>(self, f: F) -> Self
    where
        F: FnOnce() -> Result<(), X>,
        X: Into<E>,
    {
        match self {
            Effect::Empty => Effect::from_result(f().map_err(Into::into)),
            error => error,
        }
    }

    /// Settle both branches, capturing whichever runs into a new handler.
    ///
    /// Exactly one of `on_success` / `on_error` runs. Its own outcome, with its own
    /// error type `E2`, becomes the result. Use this to bring a chain of
    /// heterogeneous catches back to a single error type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Effect;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Reported(String);
    ///
    /// let e: Effect<std::fmt::Error> = Effect::Error(std::fmt::Error);
    /// let settled: Effect<Reported> = e.effect(
    ///     || Ok(()),
    ///     |err| Err(Reported(err.to_string())),
    /// );
    /// assert_eq!(settled.error().map(|r| r.0.is_empty()), Some(false));
    /// ```
    #[inline]
    pub fn effect<E2, S, F>(self, on_success: S, on_error: F) -> Effect<E2>
    where
        S: FnOnce() -> Result<(), E2>,
        F: FnOnce(E) -> Result<(), E2>,
    {
        match self {
            Effect::Empty => Effect::from_result(on_success()),
            Effect::Error(error) => Effect::from_result(on_error(error)),
        }
    }

    /// Terminal: hand an unhandled error to `f`.
    #[inline]
    pub fn or_else<F>(self, f: F)
    where
        F: FnOnce(E),
    {
        if let Effect::Error(error) = self {
            f(error);
        }
    }

    /// Terminal: re-raise an unhandled error as `Err`.
    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Effect::Error(error) => Err(error),
            Effect::Empty => Ok(()),
        }
    }
}

impl<E: Throwable> Effect<E> {
    /// Observe the error only if it is an `X` at runtime. Always returns self.
    #[inline]
    pub fn do_on_error<X, F>(self, f: F) -> Self
    where
        X: StdError + 'static,
        F: FnOnce(&X),
    {
        if let Effect::Error(ref error) = self {
            if let Some(matched) = error.downcast_ref::<X>() {
                f(matched);
            }
        }
        self
    }

    /// Consume the error with `f` only if it is an `X`, leaving `Empty`.
    ///
    /// A non-matching error is returned unchanged for later catches.
    #[inline]
    pub fn catch_error<X, F>(self, f: F) -> Self
    where
        X: StdError + 'static,
        F: FnOnce(X),
    {
        match self {
            Effect::Error(error) => match error.downcast::<X>() {
                Ok(matched) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(error_type = std::any::type_name::<X>(), "catch_error matched");
                    f(matched);
                    Effect::Empty
                }
                Err(error) => Effect::Error(error),
            },
            Effect::Empty => Effect::Empty,
        }
    }

    /// Like [`Effect::catch_error`] with a handler that may itself fail.
    #[inline]
    pub fn try_catch_error<X, X2, F>(self, f: F) -> Self
    where
        X: StdError + 'static,
        F: FnOnce(X) -> Result<(), X2>,
        X2: Into<E>,
    {
        match self {
            Effect::Error(error) => match error.downcast::<X>() {
                Ok(matched) => Effect::from_result(f(matched).map_err(Into::into)),
                Err(error) => Effect::Error(error),
            },
            Effect::Empty => Effect::Empty,
        }
    }
}

impl<E> Default for Effect<E> {
    /// Returns `Effect::Empty`.
    fn default() -> Self {
        Effect::Empty
    }
}

impl<E> From<Result<(), E>> for Effect<E> {
    fn from(result: Result<(), E>) -> Self {
        Effect::from_result(result)
    }
}

impl<E> From<Effect<E>> for Result<(), E> {
    fn from(effect: Effect<E>) -> Self {
        effect.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    #[derive(Debug, PartialEq)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("timed out")
        }
    }

    impl StdError for Timeout {}

    #[test]
    fn test_catch_error_consumes_matching_error() {
        let mut caught = None;
        let e: Effect = Effect::Error(Box::new(Timeout));
        let e = e
            .catch_error(|_: io::Error| panic!("not an io error"))
            .catch_error(|t: Timeout| caught = Some(t));
        assert!(e.is_empty());
        assert_eq!(caught, Some(Timeout));
    }

    #[test]
    fn test_unmatched_error_reaches_terminal() {
        let e: Effect = Effect::Error(io::Error::other("eof").into());
        let mut reached = false;
        e.catch_error(|_: Timeout| {}).or_else(|_| reached = true);
        assert!(reached);
    }

    #[test]
    fn test_do_on_error_never_changes_state() {
        let mut seen = 0;
        let e: Effect = Effect::Error(Box::new(Timeout));
        let e = e.do_on_error(|_: &Timeout| seen += 1);
        assert!(e.error().is_some_and(|err| err.is::<Timeout>()));
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_empty_is_inert() {
        let e: Effect<&str> = Effect::Empty;
        let e = e
            .catch_error_if(|_| true, |_| panic!("nothing to catch"))
            .do_on_error_if(|_| true, |_| panic!("nothing to observe"));
        assert_eq!(e.into_result(), Ok(()));
    }

    #[test]
    fn test_effect_runs_success_branch_only() {
        let e: Effect<&str> = Effect::Empty;
        let settled: Effect<String> = e.effect(|| Err("from success".to_string()), |_| Ok(()));
        assert_eq!(settled, Effect::Error("from success".to_string()));
    }

    #[test]
    fn test_effect_rehomes_error_type() {
        let e: Effect<&str> = Effect::Error("disk");
        let settled: Effect<usize> = e.effect(|| Ok(()), |err| Err(err.len()));
        assert_eq!(settled, Effect::Error(4));

        let e: Effect<&str> = Effect::Error("disk");
        let settled: Effect<usize> = e.effect(|| Err(0), |_| Ok(()));
        assert!(settled.is_empty());
    }

    #[test]
    fn test_then_run_short_circuits_on_error() {
        let e: Effect<&str> = Effect::Error("first");
        let e = e.then_run(|| -> Result<(), &str> { panic!("must not run") });
        assert_eq!(e, Effect::Error("first"));

        let e: Effect<&str> = Effect::Empty;
        assert_eq!(e.then_run(|| Err("second")), Effect::Error("second"));
    }

    #[test]
    fn test_try_catch_error_handler_failure() {
        let e: Effect = Effect::Error(Box::new(Timeout));
        let e = e.try_catch_error(|_: Timeout| Err(io::Error::other("retry failed")));
        assert!(e.error().is_some_and(|err| err.is::<io::Error>()));
    }

    #[test]
    fn test_map_error_and_conversions() {
        let e: Effect<&str> = Err("x").into();
        assert_eq!(e.map_error(str::len), Effect::Error(1));
        let r: Result<(), &str> = Effect::<&str>::Empty.into();
        assert_eq!(r, Ok(()));
    }
}
