//! Entry points: run a fallible operation and get the matching handler.
//!
//! - [`resolve`] - supplier that may fail, yields a [`Resolve`]
//! - [`run_effect`] - runnable that may fail, yields an [`Effect`]
//! - [`with_resource`] - acquisition that may fail, yields a [`ResourceHolder`]
//!
//! The `*_with` and `partial*` helpers build functions rather than run them, so
//! steps can be passed point-free into `flat_map`, `map` or iterator adapters.
//!
//! # Example
//!
//! ```rust
//! use dichotomy::{partial, resolve_with, Resolve};
//! use std::num::ParseIntError;
//!
//! fn scale(factor: i64, n: i64) -> i64 {
//!     factor * n
//! }
//!
//! let parse = resolve_with(|s: &str| s.trim().parse::<i64>());
//!
//! let total: Resolve<i64, ParseIntError> = parse(" 21 ").map(partial(scale, 2));
//! assert_eq!(total, Resolve::Success(42));
//! ```

use crate::effect::Effect;
use crate::resolve::Resolve;
use crate::resource::ResourceHolder;

/// Run a supplier that may fail and capture its outcome.
///
/// # Example
///
/// ```rust
/// use dichotomy::{resolve, Resolve};
///
/// let answer: Resolve<i32> = resolve(|| Ok(42));
/// assert_eq!(answer.unwrap_or(0), 42);
/// ```
#[inline]
pub fn resolve<T, E, F>(op: F) -> Resolve<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Resolve::from_result(op())
}

/// Run a runnable that may fail and capture its outcome.
#[inline]
pub fn run_effect<E, F>(op: F) -> Effect<E>
where
    F: FnOnce() -> Result<(), E>,
{
    Effect::from_result(op())
}

/// Acquire a resource and hold it for a following `*_closing` call.
///
/// A failed acquisition is carried as the holder's error.
#[inline]
pub fn with_resource<R, E, F>(acquire: F) -> ResourceHolder<R, E>
where
    F: FnOnce() -> Result<R, E>,
{
    ResourceHolder::from_result(acquire())
}

/// Lift a function that may fail into one that yields a [`Resolve`].
#[inline]
pub fn resolve_with<A, T, E, F>(f: F) -> impl Fn(A) -> Resolve<T, E>
where
    F: Fn(A) -> Result<T, E>,
{
    move |arg| Resolve::from_result(f(arg))
}

/// Lift a consumer that may fail into one that yields an [`Effect`].
///
/// # Example
///
/// ```rust
/// use dichotomy::run_effect_with;
///
/// let check = run_effect_with(|n: u8| if n < 10 { Ok(()) } else { Err(n) });
/// let failures: Vec<_> = [3, 12, 7, 40]
///     .into_iter()
///     .map(check)
///     .filter_map(|e| e.error().copied())
///     .collect();
/// assert_eq!(failures, vec![12, 40]);
/// ```
#[inline]
pub fn run_effect_with<A, E, F>(f: F) -> impl Fn(A) -> Effect<E>
where
    F: Fn(A) -> Result<(), E>,
{
    move |arg| Effect::from_result(f(arg))
}

/// Bind the first argument of a two-argument function.
#[inline]
pub fn partial<A, B, C, F>(f: F, first: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
    A: Clone,
{
    move |second| f(first.clone(), second)
}

/// Bind the last argument of a two-argument function.
#[inline]
pub fn partial_last<A, B, C, F>(f: F, last: B) -> impl Fn(A) -> C
where
    F: Fn(A, B) -> C,
    B: Clone,
{
    move |first| f(first, last.clone())
}
