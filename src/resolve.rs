//! The value-producing handler: a tri-state over Success, Error and Empty.
//!
//! A [`Resolve`] is what you get back from running a supplier that may fail
//! (see [`resolve`](crate::resolve)). From there the chain is a sequence of state
//! transitions, each consuming the handler and returning a new one:
//!
//! | state        | `map` / `filter` / `cast`  | `catch_error::<X>`              | `do_on_error::<X>` |
//! |--------------|----------------------------|---------------------------------|--------------------|
//! | `Success(v)` | transforms / may demote    | no-op                           | no-op              |
//! | `Error(e)`   | no-op, error preserved     | `Success(f(x))` if `e` is an `X` | observes if `X`    |
//! | `Empty`      | no-op                      | no-op                           | no-op              |
//!
//! Terminal operations ([`unwrap_or`](Resolve::unwrap_or),
//! [`unwrap_or_else`](Resolve::unwrap_or_else), [`into_result`](Resolve::into_result),
//! [`to_either`](Resolve::to_either), [`into_option`](Resolve::into_option)) are the only
//! places an error leaves the chain.
//!
//! # Example
//!
//! ```rust
//! use dichotomy::{resolve, Resolve};
//! use std::io;
//!
//! let port: Resolve<u16> = resolve(|| {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "port file").into())
//! });
//!
//! let port = port
//!     .catch_error(|_: std::num::ParseIntError| 0)
//!     .catch_error(|e: io::Error| if e.kind() == io::ErrorKind::NotFound { 8080 } else { 0 })
//!     .unwrap_or(1);
//!
//! assert_eq!(port, 8080);
//! ```

use std::any::Any;
use std::error::Error as StdError;

use crate::effect::Effect;
use crate::either::Either;
use crate::error::{BoxError, Throwable, TypeMismatchError};
use crate::resource::ResourceHolder;

/// Outcome of a fallible operation that produces a value.
///
/// Exactly one state is live at a time; there is no way to hold both a value and
/// an error. The error parameter defaults to [`BoxError`], which supports
/// type-matched recovery through [`Resolve::catch_error`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "a Resolve may hold an unhandled error"]
pub enum Resolve<T, E = BoxError> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed and no recovery has matched yet.
    Error(E),
    /// There is neither a value nor an error, e.g. after a rejecting `filter`.
    Empty,
}

impl<T, E> Resolve<T, E> {
    // ========== Constructors ==========

    /// Capture a `Result` as `Success` or `Error`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Resolve::Success(value),
            Err(error) => Resolve::Error(error),
        }
    }

    /// Lift an optional value; `None` becomes `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Resolve;
    ///
    /// let r: Resolve<i32> = Resolve::from_option(None);
    /// assert!(r.is_empty());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Resolve::Success(value),
            None => Resolve::Empty,
        }
    }

    // ========== Predicates / accessors ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Resolve::Success(_))
    }

    /// Returns `true` if an unhandled error is present.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Resolve::Error(_))
    }

    /// Returns `true` if neither a value nor an error is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Resolve::Empty)
    }

    /// Borrow the value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Resolve::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the error, if any.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Resolve::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Convert to `Resolve<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Resolve<&T, &E> {
        match self {
            Resolve::Success(value) => Resolve::Success(value),
            Resolve::Error(error) => Resolve::Error(error),
            Resolve::Empty => Resolve::Empty,
        }
    }

    // ========== Success-side transitions ==========

    /// Transform the value. Error and Empty pass through untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Resolve<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Resolve::Success(value) => Resolve::Success(f(value)),
            Resolve::Error(error) => Resolve::Error(error),
            Resolve::Empty => Resolve::Empty,
        }
    }

    /// Transform the value with a mapper that may fail.
    ///
    /// A failing mapper does not get lost: its error becomes the new `Error` state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Resolve;
    ///
    /// let r: Resolve<&str> = Resolve::Success("forty-two");
    /// let parsed = r.try_map(|s| s.parse::<i32>());
    /// assert!(parsed.is_error());
    /// ```
    #[inline]
    pub fn try_map<U, X, F>(self, f: F) -> Resolve<U, E>
    where
        F: FnOnce(T) -> Result<U, X>,
        X: Into<E>,
    {
        match self {
            Resolve::Success(value) => match f(value) {
                Ok(mapped) => Resolve::Success(mapped),
                Err(error) => Resolve::Error(error.into()),
            },
            Resolve::Error(error) => Resolve::Error(error),
            Resolve::Empty => Resolve::Empty,
        }
    }

    /// Chain another handler-producing step on the value.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Resolve<U, E>
    where
        F: FnOnce(T) -> Resolve<U, E>,
    {
        match self {
            Resolve::Success(value) => f(value),
            Resolve::Error(error) => Resolve::Error(error),
            Resolve::Empty => Resolve::Empty,
        }
    }

    /// Keep the value only if `predicate` holds; otherwise become `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Resolve;
    ///
    /// let even: Resolve<i32> = Resolve::Success(3);
    /// assert!(even.filter(|n| n % 2 == 0).is_empty());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Resolve::Success(value) if predicate(&value) => Resolve::Success(value),
            Resolve::Success(_) => Resolve::Empty,
            other => other,
        }
    }

    /// Observe the value without changing state.
    #[inline]
    pub fn do_on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Resolve::Success(ref value) = self {
            f(value);
        }
        self
    }

    // ========== Error-side transitions ==========

    /// Convert the error type. Success and Empty pass through untouched.
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Resolve<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Resolve::Success(value) => Resolve::Success(value),
            Resolve::Error(error) => Resolve::Error(f(error)),
            Resolve::Empty => Resolve::Empty,
        }
    }

    /// Observe the error when `predicate` accepts it. Always returns self.
    #[inline]
    pub fn do_on_error_if<P, F>(self, predicate: P, f: F) -> Self
    where
        P: FnOnce(&E) -> bool,
        F: FnOnce(&E),
    {
        if let Resolve::Error(ref error) = self {
            if predicate(error) {
                f(error);
            }
        }
        self
    }

    /// Recover from the error when `predicate` accepts it.
    ///
    /// This is the form for closed error enums, where "type" is a variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Resolve;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum FetchError {
    ///     CacheMiss,
    ///     Network,
    /// }
    ///
    /// let r: Resolve<&str, FetchError> = Resolve::Error(FetchError::CacheMiss);
    /// let r = r
    ///     .catch_error_if(|e| *e == FetchError::Network, |_| "offline")
    ///     .catch_error_if(|e| *e == FetchError::CacheMiss, |_| "fresh");
    /// assert_eq!(r, Resolve::Success("fresh"));
    /// ```
    #[inline]
    pub fn catch_error_if<P, F>(self, predicate: P, f: F) -> Self
    where
        P: FnOnce(&E) -> bool,
        F: FnOnce(E) -> T,
    {
        match self {
            Resolve::Error(error) if predicate(&error) => Resolve::Success(f(error)),
            other => other,
        }
    }

    // ========== Composition ==========

    /// Run a consumer that may fail on the value, producing an [`Effect`].
    ///
    /// An existing error carries over; `Empty` stays empty without running `f`.
    #[inline]
    pub fn then_run<X, F>(self, f: F) -> Effect<E>
    where
        F: FnOnce(T) -> Result<(), X>,
        X: Into<E>,
    {
        match self {
            Resolve::Success(value) => Effect::from_result(f(value).map_err(Into::into)),
            Resolve::Error(error) => Effect::Error(error),
            Resolve::Empty => Effect::Empty,
        }
    }

    /// Turn the value into a scoped resource for a following `*_closing` call.
    ///
    /// An error is carried into the holder unchanged and `Empty` yields an empty
    /// holder; in both cases `f` never runs.
    #[inline]
    pub fn map_to_resource<R, F>(self, f: F) -> ResourceHolder<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Resolve::Success(value) => ResourceHolder::new(f(value)),
            Resolve::Error(error) => ResourceHolder::from_error(error),
            Resolve::Empty => ResourceHolder::empty(),
        }
    }

    /// Like [`Resolve::map_to_resource`] with a constructor that may fail.
    #[inline]
    pub fn try_map_to_resource<R, X, F>(self, f: F) -> ResourceHolder<R, E>
    where
        F: FnOnce(T) -> Result<R, X>,
        X: Into<E>,
    {
        match self {
            Resolve::Success(value) => match f(value) {
                Ok(resource) => ResourceHolder::new(resource),
                Err(error) => ResourceHolder::from_error(error.into()),
            },
            Resolve::Error(error) => ResourceHolder::from_error(error),
            Resolve::Empty => ResourceHolder::empty(),
        }
    }

    // ========== Terminal operations ==========

    /// Return the value, or `fallback` for Error and Empty.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Resolve::Success(value) => value,
            _ => fallback,
        }
    }

    /// Return the value, or compute one from the error (`None` when Empty).
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Resolve;
    ///
    /// let r: Resolve<usize, &str> = Resolve::Error("oops");
    /// assert_eq!(r.unwrap_or_else(|e| e.map_or(0, str::len)), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Option<E>) -> T,
    {
        match self {
            Resolve::Success(value) => value,
            Resolve::Error(error) => f(Some(error)),
            Resolve::Empty => f(None),
        }
    }

    /// Re-raise: an unhandled error becomes `Err`, Empty becomes `Ok(None)`.
    ///
    /// Matching on the returned `Result` is where closed error enums get
    /// compiler-checked exhaustive handling.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Resolve::Success(value) => Ok(Some(value)),
            Resolve::Error(error) => Err(error),
            Resolve::Empty => Ok(None),
        }
    }

    /// Convert to `Either<E, T>`; `None` when Empty.
    #[inline]
    pub fn to_either(self) -> Option<Either<E, T>> {
        match self {
            Resolve::Success(value) => Some(Either::Right(value)),
            Resolve::Error(error) => Some(Either::Left(error)),
            Resolve::Empty => None,
        }
    }

    /// Keep only the value, discarding any error.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Resolve::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl<T, E: Throwable> Resolve<T, E> {
    /// Observe the error only if it is an `X` at runtime. Always returns self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Resolve;
    /// use std::io;
    ///
    /// let mut logged = Vec::new();
    /// let r: Resolve<i32> = Resolve::Error(io::Error::other("disk").into());
    /// let r = r.do_on_error(|e: &io::Error| logged.push(e.to_string()));
    /// assert!(r.is_error());
    /// assert_eq!(logged, vec!["disk".to_string()]);
    /// ```
    #[inline]
    pub fn do_on_error<X, F>(self, f: F) -> Self
    where
        X: StdError + 'static,
        F: FnOnce(&X),
    {
        if let Resolve::Error(ref error) = self {
            if let Some(matched) = error.downcast_ref::<X>() {
                f(matched);
            }
        }
        self
    }

    /// Recover from the error only if it is an `X` at runtime.
    ///
    /// On a match the state becomes `Success(f(x))`, so every later catch in the
    /// chain is a no-op. Otherwise self is returned unchanged for the next catch.
    #[inline]
    pub fn catch_error<X, F>(self, f: F) -> Self
    where
        X: StdError + 'static,
        F: FnOnce(X) -> T,
    {
        match self {
            Resolve::Error(error) => match error.downcast::<X>() {
                Ok(matched) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(error_type = std::any::type_name::<X>(), "catch_error matched");
                    Resolve::Success(f(matched))
                }
                Err(error) => Resolve::Error(error),
            },
            other => other,
        }
    }

    /// Like [`Resolve::catch_error`] with a handler that may itself fail.
    ///
    /// A failing handler replaces the caught error with its own.
    #[inline]
    pub fn try_catch_error<X, X2, F>(self, f: F) -> Self
    where
        X: StdError + 'static,
        F: FnOnce(X) -> Result<T, X2>,
        X2: Into<E>,
    {
        match self {
            Resolve::Error(error) => match error.downcast::<X>() {
                Ok(matched) => Resolve::from_result(f(matched).map_err(Into::into)),
                Err(error) => Resolve::Error(error),
            },
            other => other,
        }
    }
}

impl<T: 'static, E> Resolve<T, E> {
    /// Check at runtime that the value is a `U`.
    ///
    /// A mismatch becomes an `Error` holding a [`TypeMismatchError`]; it never
    /// panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Resolve;
    /// use dichotomy::error::TypeMismatchError;
    ///
    /// let r: Resolve<i32, TypeMismatchError> = Resolve::Success(7);
    /// assert_eq!(r.clone().cast::<i32>(), Resolve::Success(7));
    /// assert_eq!(
    ///     r.cast::<String>(),
    ///     Resolve::Error(TypeMismatchError::of::<String, i32>())
    /// );
    /// ```
    pub fn cast<U: 'static>(self) -> Resolve<U, E>
    where
        E: From<TypeMismatchError>,
    {
        match self {
            Resolve::Success(value) => {
                let boxed: Box<dyn Any> = Box::new(value);
                match boxed.downcast::<U>() {
                    Ok(cast) => Resolve::Success(*cast),
                    Err(_) => {
                        let mismatch = TypeMismatchError::of::<U, T>();
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            expected = mismatch.expected(),
                            found = mismatch.found(),
                            "cast failed"
                        );
                        Resolve::Error(mismatch.into())
                    }
                }
            }
            Resolve::Error(error) => Resolve::Error(error),
            Resolve::Empty => Resolve::Empty,
        }
    }
}

// ========== Trait Implementations ==========

impl<T, E> Default for Resolve<T, E> {
    /// Returns `Resolve::Empty`.
    fn default() -> Self {
        Resolve::Empty
    }
}

impl<T, E> From<Result<T, E>> for Resolve<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Resolve::from_result(result)
    }
}

impl<T, E> From<Option<T>> for Resolve<T, E> {
    fn from(value: Option<T>) -> Self {
        Resolve::from_option(value)
    }
}

impl<T, E> From<Either<E, T>> for Resolve<T, E> {
    fn from(either: Either<E, T>) -> Self {
        either.fold(Resolve::Error, Resolve::Success)
    }
}

impl<T, E> IntoIterator for Resolve<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("timed out")
        }
    }

    impl StdError for Timeout {}

    fn not_found() -> BoxError {
        io::Error::new(io::ErrorKind::NotFound, "settings.json").into()
    }

    #[test]
    fn test_success_unwrap_or() {
        let r: Resolve<i32> = Resolve::Success(42);
        assert_eq!(r.unwrap_or(0), 42);
    }

    #[test]
    fn test_catch_error_matches_io_error() {
        let r: Resolve<i32> = Resolve::Error(not_found());
        let r = r.catch_error(|_: io::Error| -1);
        assert_eq!(r.into_option(), Some(-1));
    }

    #[test]
    fn test_unmatched_catch_leaves_error_for_terminal() {
        let r: Resolve<i32> = Resolve::Error(not_found());
        let r = r.catch_error(|_: Timeout| -9);
        assert!(r.is_error());
        assert_eq!(r.unwrap_or_else(|_| -2), -2);
    }

    #[test]
    fn test_first_matching_catch_wins_once() {
        let mut second_ran = false;
        let r: Resolve<i32> = Resolve::Error(not_found());
        let r = r
            .catch_error(|_: io::Error| 1)
            .catch_error(|_: io::Error| {
                second_ran = true;
                2
            });
        assert_eq!(r.unwrap_or(0), 1);
        assert!(!second_ran);
    }

    #[test]
    fn test_catch_skips_non_matching_then_matches_later() {
        let r: Resolve<i32> = Resolve::Error(Box::new(Timeout));
        let r = r.catch_error(|_: io::Error| 1).catch_error(|_: Timeout| 2);
        assert_eq!(r.unwrap_or(0), 2);
    }

    #[test]
    fn test_catch_and_observe_are_noops_on_success() {
        let r: Resolve<i32> = Resolve::Success(5);
        let r = r
            .do_on_error(|_: &io::Error| panic!("no error to observe"))
            .catch_error(|_: io::Error| 0);
        assert_eq!(r.unwrap_or(0), 5);
    }

    #[test]
    fn test_do_on_error_observes_only_matching_type() {
        let mut io_seen = 0;
        let mut timeout_seen = 0;
        let r: Resolve<i32> = Resolve::Error(not_found());
        let r = r
            .do_on_error(|_: &Timeout| timeout_seen += 1)
            .do_on_error(|e: &io::Error| {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                io_seen += 1;
            });
        assert!(r.is_error());
        assert_eq!((io_seen, timeout_seen), (1, 0));
    }

    #[test]
    fn test_map_filter_preserve_error() {
        let r: Resolve<i32, &str> = Resolve::Error("boom");
        let r = r
            .map(|x| x + 1)
            .filter(|_| true)
            .do_on_error_if(|_| true, |_| {})
            .try_map(|x| Ok::<_, &str>(x * 2));
        assert_eq!(r, Resolve::Error("boom"));
    }

    #[test]
    fn test_filter_demotes_to_empty() {
        let r: Resolve<i32, &str> = Resolve::Success(3);
        assert_eq!(r.filter(|n| *n > 5), Resolve::Empty);

        let r: Resolve<i32, &str> = Resolve::Success(8);
        assert_eq!(r.filter(|n| *n > 5), Resolve::Success(8));
    }

    #[test]
    fn test_empty_ignores_everything() {
        let r: Resolve<i32, &str> = Resolve::Empty;
        let r = r
            .map(|x| x + 1)
            .catch_error_if(|_| true, |_| 1)
            .do_on_success(|_| panic!("nothing to observe"));
        assert!(r.is_empty());
        assert_eq!(r.unwrap_or_else(|e| if e.is_none() { 7 } else { 0 }), 7);
    }

    #[test]
    fn test_try_map_failure_becomes_error() {
        let r: Resolve<&str> = Resolve::Success("abc");
        let r = r.try_map(|s| s.parse::<i32>());
        assert!(r
            .error()
            .is_some_and(|e| e.is::<std::num::ParseIntError>()));
    }

    #[test]
    fn test_flat_map() {
        let r: Resolve<i32, &str> = Resolve::Success(2);
        assert_eq!(r.flat_map(|x| Resolve::Success(x * 10)), Resolve::Success(20));

        let r: Resolve<i32, &str> = Resolve::Success(2);
        assert_eq!(
            r.flat_map(|_| Resolve::<i32, &str>::Error("inner")),
            Resolve::Error("inner")
        );
    }

    #[test]
    fn test_cast_success_and_mismatch() {
        let r: Resolve<i32> = Resolve::Success(9);
        assert_eq!(r.cast::<i32>().into_option(), Some(9));

        let r: Resolve<i32> = Resolve::Success(9);
        let cast = r.cast::<String>();
        let err = cast.error().and_then(|e| e.downcast_ref::<TypeMismatchError>());
        assert_eq!(err, Some(&TypeMismatchError::of::<String, i32>()));
    }

    #[test]
    fn test_cast_preserves_error() {
        let r: Resolve<i32, TypeMismatchError> = Resolve::Error(TypeMismatchError::of::<u8, i8>());
        assert_eq!(
            r.cast::<String>(),
            Resolve::Error(TypeMismatchError::of::<u8, i8>())
        );
    }

    #[test]
    fn test_try_catch_error_handler_failure_replaces_error() {
        let r: Resolve<i32> = Resolve::Error(not_found());
        let r = r.try_catch_error(|_: io::Error| Err::<i32, _>(Timeout));
        assert!(r.error().is_some_and(|e| e.is::<Timeout>()));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Resolve::<i32, &str>::Success(1).into_result(), Ok(Some(1)));
        assert_eq!(Resolve::<i32, &str>::Error("e").into_result(), Err("e"));
        assert_eq!(Resolve::<i32, &str>::Empty.into_result(), Ok(None));
    }

    #[test]
    fn test_to_either_round_trip() {
        for r in [
            Resolve::<i32, &str>::Success(1),
            Resolve::Error("e"),
            Resolve::Empty,
        ] {
            let back = r
                .clone()
                .to_either()
                .map(Resolve::from)
                .unwrap_or(Resolve::Empty);
            assert_eq!(back, r);
        }
    }

    #[test]
    fn test_then_run() {
        let mut sink = Vec::new();
        let r: Resolve<i32, &str> = Resolve::Success(3);
        let effect = r.then_run(|n| {
            sink.push(n);
            Ok::<_, &str>(())
        });
        assert!(effect.is_empty());
        assert_eq!(sink, vec![3]);

        let r: Resolve<i32, &str> = Resolve::Error("upstream");
        assert_eq!(r.then_run(|_| Err("never")), Effect::Error("upstream"));
    }

    #[test]
    fn test_map_to_resource_carries_error_without_constructing() {
        let r: Resolve<i32, &str> = Resolve::Error("no route");
        let holder = r.map_to_resource(|_| -> Vec<u8> { panic!("constructor must not run") });
        assert!(holder.has_error());

        let r: Resolve<i32, &str> = Resolve::Error("no route");
        let holder =
            r.try_map_to_resource(|_| -> Result<Vec<u8>, &str> { panic!("constructor must not run") });
        assert!(holder.has_error());
    }

    #[test]
    fn test_map_to_resource_on_empty_yields_empty_holder() {
        let r: Resolve<i32, &str> = Resolve::Empty;
        let holder = r.map_to_resource(|_| -> Vec<u8> { panic!("constructor must not run") });
        assert!(holder.is_empty());

        let r: Resolve<i32, &str> = Resolve::Empty;
        let holder =
            r.try_map_to_resource(|_| -> Result<Vec<u8>, &str> { panic!("constructor must not run") });
        assert!(holder.is_empty());
    }

    #[test]
    fn test_try_map_to_resource_failure_becomes_holder_error() {
        let r: Resolve<i32, &str> = Resolve::Success(1);
        let holder = r.try_map_to_resource(|_| Err::<Vec<u8>, _>("refused"));
        assert!(holder.has_error() && !holder.has_resource());
    }

    #[test]
    fn test_map_error() {
        let r: Resolve<i32, &str> = Resolve::Error("four");
        assert_eq!(r.map_error(str::len), Resolve::Error(4));
    }

    #[test]
    fn test_conversions() {
        let r: Resolve<i32, &str> = Ok(1).into();
        assert_eq!(r, Resolve::Success(1));
        let r: Resolve<i32, &str> = None.into();
        assert!(r.is_empty());
        assert_eq!(Resolve::<i32, &str>::default(), Resolve::Empty);
        assert_eq!(
            Resolve::<i32, &str>::Success(4).into_iter().collect::<Vec<_>>(),
            vec![4]
        );
    }
}
