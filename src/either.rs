//! A neutral sum type holding exactly one of two alternatives.
//!
//! `Either<L, R>` carries no success/failure meaning of its own. Handlers use it
//! at their boundary ([`Resolve::to_either`](crate::Resolve::to_either) yields
//! `Either<E, T>`) and [`ResourceHolder`](crate::ResourceHolder) stores
//! "error or resource" in one internally.
//!
//! The only way to get a value out without naming a side is [`Either::fold`]
//! (also spelled [`Either::unwrap`]), which forces both variants to be handled.
//!
//! # Right-Biased Convention
//!
//! `map`, `and_then` and iteration operate on `Right`, the conventional happy path.
//!
//! # Examples
//!
//! ```rust
//! use dichotomy::Either;
//!
//! fn lookup(cached: bool) -> Either<&'static str, u32> {
//!     if cached {
//!         Either::left("from cache")
//!     } else {
//!         Either::right(200)
//!     }
//! }
//!
//! let shown = lookup(true).fold(|hit| hit.to_string(), |status| format!("HTTP {}", status));
//! assert_eq!(shown, "from cache");
//! ```

use std::fmt;

use crate::error::{NullValueError, Side};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Equality, ordering and hashing follow the variant first, then the payload.
///
/// # Example
///
/// ```rust
/// use dichotomy::Either;
///
/// let port: Either<String, u16> = Either::right(8080);
///
/// match port {
///     Either::Left(name) => println!("named port {}", name),
///     Either::Right(n) => println!("port {}", n),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Create a Left value from a possibly absent payload.
    ///
    /// Fails with [`NullValueError`] when `value` is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Either;
    /// use dichotomy::error::Side;
    ///
    /// let ok: Either<&str, i32> = Either::try_left(Some("boom")).unwrap();
    /// assert_eq!(ok, Either::left("boom"));
    ///
    /// let err = Either::<&str, i32>::try_left(None).unwrap_err();
    /// assert_eq!(err.side(), Side::Left);
    /// ```
    #[inline]
    pub fn try_left(value: Option<L>) -> Result<Self, NullValueError> {
        value
            .map(Either::Left)
            .ok_or_else(|| NullValueError::new(Side::Left))
    }

    /// Create a Right value from a possibly absent payload.
    ///
    /// Fails with [`NullValueError`] when `value` is `None`.
    #[inline]
    pub fn try_right(value: Option<R>) -> Result<Self, NullValueError> {
        value
            .map(Either::Right)
            .ok_or_else(|| NullValueError::new(Side::Right))
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::left(7).into_left(), Some(7));
    /// assert_eq!(Either::<i32, &str>::right("x").into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Convert to `Either<&mut L, &mut R>`.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Folding ==========

    /// Apply exactly one of two functions depending on the live variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert_eq!(e.fold(|n| n as usize, |s| s.len()), 5);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Exhaustive extraction; same as [`Either::fold`].
    ///
    /// Unlike `Option::unwrap` this never panics: both sides must be handled.
    #[inline]
    pub fn unwrap<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.fold(on_left, on_right)
    }

    /// Extract the left value, panicking if Right.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Extract the right value, panicking if Left.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Either::Right(r) => r,
        }
    }

    /// Return the left value or a fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::left(42).left_or(0), 42);
    /// assert_eq!(Either::<i32, &str>::right("x").left_or(0), 0);
    /// ```
    #[inline]
    pub fn left_or(self, fallback: L) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => fallback,
        }
    }

    /// Return the right value or a fallback.
    #[inline]
    pub fn right_or(self, fallback: R) -> R {
        match self {
            Either::Left(_) => fallback,
            Either::Right(r) => r,
        }
    }

    /// Return the left value or compute it from the right.
    #[inline]
    pub fn left_or_else<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Either::Left(l) => l,
            Either::Right(r) => f(r),
        }
    }

    /// Return the right value or compute it from the left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Either;
    ///
    /// let e: Either<&str, usize> = Either::left("four");
    /// assert_eq!(e.right_or_else(|s| s.len()), 4);
    /// ```
    #[inline]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r,
        }
    }

    // ========== Transformations ==========

    /// Transform the left value, passing right values through unchanged.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, passing left values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("boom");
    /// assert_eq!(e.map_right(|x| x + 1), Either::left("boom"));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Right-biased alias for [`Either::map_right`].
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.map_right(f)
    }

    /// Transform both variants.
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(g(r)),
        }
    }

    /// Chain on the left value without double wrapping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("12");
    /// let parsed = e.flat_map_left(|s| match s.parse::<i32>() {
    ///     Ok(n) => Either::right(n),
    ///     Err(_) => Either::left(s.len()),
    /// });
    /// assert_eq!(parsed, Either::right(12));
    /// ```
    #[inline]
    pub fn flat_map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chain on the right value without double wrapping.
    #[inline]
    pub fn flat_map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Right-biased alias for [`Either::flat_map_right`].
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.flat_map_right(f)
    }

    /// Alias for [`Either::flat_map_left`].
    #[inline]
    pub fn or_else<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        self.flat_map_left(f)
    }

    /// Swap Left and Right.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    // ========== Observers ==========

    /// Run `f` on the left value, if any, and return self unchanged.
    #[inline]
    pub fn do_on_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(ref l) = self {
            f(l);
        }
        self
    }

    /// Run `f` on the right value, if any, and return self unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::Either;
    ///
    /// let mut seen = Vec::new();
    /// let e: Either<&str, i32> = Either::right(3);
    /// let e = e.do_on_right(|n| seen.push(*n)).do_on_left(|_| unreachable!());
    /// assert_eq!(e, Either::right(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn do_on_right<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(ref r) = self {
            f(r);
        }
        self
    }

    // ========== Conversions ==========

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Returns an iterator over the right value, if present.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.as_ref().into_right().into_iter()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested Either.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(inner) => inner,
        }
    }
}

// ========== Trait Implementations ==========

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_right().into_iter()
    }
}

// ========== Collection Utilities ==========

/// Partition an iterator of Either into two vectors.
///
/// # Example
///
/// ```rust
/// use dichotomy::either::{partition, Either};
///
/// let (errors, values) = partition(vec![
///     Either::left("bad"),
///     Either::right(1),
///     Either::right(2),
/// ]);
/// assert_eq!(errors, vec!["bad"]);
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        match item {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }

    (lefts, rights)
}

/// Extract all Left values from an iterator.
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_left)
}

/// Extract all Right values from an iterator.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_right)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_swap_involution(x: i32) {
            let e: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(e.swap().swap(), e);
        }

        #[test]
        fn prop_right_or_returns_payload_or_fallback(x: i32, fallback: i32) {
            prop_assert_eq!(Either::<i32, i32>::right(x).right_or(fallback), x);
            prop_assert_eq!(Either::<i32, i32>::left(x).right_or(fallback), fallback);
        }

        #[test]
        fn prop_result_roundtrip(x: i32, is_left: bool) {
            let either: Either<i32, i32> = if is_left { Either::left(x) } else { Either::right(x) };
            let result: Result<i32, i32> = either.into();
            let back: Either<i32, i32> = result.into();
            prop_assert_eq!(back, either);
        }

        #[test]
        fn prop_fold_with_constructors_is_identity(x: i32, is_left: bool) {
            let either: Either<i32, i32> = if is_left { Either::left(x) } else { Either::right(x) };
            prop_assert_eq!(either.fold(Either::left, Either::right), either);
        }
    }
}
