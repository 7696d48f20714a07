//! Error taxonomy for handler chains.
//!
//! Three kinds of failure are produced by the crate itself:
//!
//! - [`NullValueError`] - an [`Either`](crate::Either) side was built from an absent value
//! - [`TypeMismatchError`] - [`Resolve::cast`](crate::Resolve::cast) found a different type
//! - [`ClosingError`] - a scoped resource operation failed, with the failing phase kept
//!
//! Everything else is a domain error produced by the wrapped operations. The default
//! domain error is [`BoxError`], which implements [`Throwable`] so handlers can match
//! it by concrete type at runtime.
//!
//! # Example
//!
//! ```rust
//! use dichotomy::error::{BoxError, Throwable};
//! use std::io;
//!
//! let err: BoxError = io::Error::new(io::ErrorKind::NotFound, "config.toml").into();
//!
//! assert!(err.is::<io::Error>());
//! assert!(!err.is::<std::fmt::Error>());
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Type-erased domain error used as the default error parameter of every handler.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// ============================================================================
// Throwable
// ============================================================================

/// Runtime type inspection for error values.
///
/// `Throwable` is the seam that type-matched recovery
/// ([`Resolve::catch_error`](crate::Resolve::catch_error),
/// [`Effect::do_on_error`](crate::Effect::do_on_error), ...) is built on. A match
/// means the error is, at runtime, exactly the requested concrete type.
///
/// Implemented for the boxed `dyn Error` flavours. Closed error enums do not need
/// it: use the `*_if` predicate combinators and match exhaustively instead.
pub trait Throwable: Sized {
    /// Borrow the error as `X` if it is one.
    fn downcast_ref<X>(&self) -> Option<&X>
    where
        X: StdError + 'static;

    /// Take the error as `X`, handing `self` back unchanged when it is not one.
    fn downcast<X>(self) -> Result<X, Self>
    where
        X: StdError + 'static;

    /// Returns `true` if the error is an `X`.
    fn is<X>(&self) -> bool
    where
        X: StdError + 'static,
    {
        self.downcast_ref::<X>().is_some()
    }
}

macro_rules! impl_throwable_for_box {
    ($dyn_error:ty) => {
        impl Throwable for Box<$dyn_error> {
            #[inline]
            fn downcast_ref<X>(&self) -> Option<&X>
            where
                X: StdError + 'static,
            {
                <$dyn_error>::downcast_ref::<X>(&**self)
            }

            #[inline]
            fn downcast<X>(self) -> Result<X, Self>
            where
                X: StdError + 'static,
            {
                <$dyn_error>::downcast::<X>(self).map(|boxed| *boxed)
            }
        }
    };
}

impl_throwable_for_box!(dyn StdError + 'static);
impl_throwable_for_box!(dyn StdError + Send + 'static);
impl_throwable_for_box!(dyn StdError + Send + Sync + 'static);

// ============================================================================
// NullValueError
// ============================================================================

/// Which side of an [`Either`](crate::Either) a construction targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left side
    Left,
    /// The right side
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("Left"),
            Side::Right => f.write_str("Right"),
        }
    }
}

/// An `Either` side was constructed from an absent value.
///
/// This is a construction-time failure returned by
/// [`Either::try_left`](crate::Either::try_left) and
/// [`Either::try_right`](crate::Either::try_right); it is never threaded through a
/// handler chain on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullValueError {
    side: Side,
}

impl NullValueError {
    /// Create an error for the given side.
    pub fn new(side: Side) -> Self {
        NullValueError { side }
    }

    /// The side that was being constructed.
    pub fn side(&self) -> Side {
        self.side
    }
}

impl fmt::Display for NullValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot build Either::{} from an absent value", self.side)
    }
}

impl StdError for NullValueError {}

// ============================================================================
// TypeMismatchError
// ============================================================================

/// A runtime cast found a value of a different type than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeMismatchError {
    expected: &'static str,
    found: &'static str,
}

impl TypeMismatchError {
    /// Create a mismatch between the `Expected` and `Found` types.
    pub fn of<Expected: ?Sized, Found: ?Sized>() -> Self {
        TypeMismatchError {
            expected: std::any::type_name::<Expected>(),
            found: std::any::type_name::<Found>(),
        }
    }

    /// Name of the requested type.
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Name of the type actually held.
    pub fn found(&self) -> &'static str {
        self.found
    }
}

impl fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type mismatch: expected `{}`, found `{}`",
            self.expected, self.found
        )
    }
}

impl StdError for TypeMismatchError {}

// ============================================================================
// ClosingError
// ============================================================================

/// Failure of a resource-scoped operation, keeping every error that occurred.
///
/// Returned by [`ResourceHolder::resolve_closing_detailed`](crate::ResourceHolder::resolve_closing_detailed).
/// Each variant identifies the phase that failed:
///
/// - `Upstream` - the holder already carried an error; no resource was touched
/// - `Operation` - the operation failed, release succeeded
/// - `Release` - the operation succeeded, release failed
/// - `Both` - the operation failed and release failed too
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosingError<E> {
    /// The holder carried an error before any resource was used.
    Upstream(E),
    /// The operation failed, release succeeded.
    Operation(E),
    /// The operation succeeded, release failed.
    Release(E),
    /// Both the operation and the release failed.
    Both {
        /// The error from the operation
        operation: E,
        /// The error from the release
        release: E,
    },
}

impl<E> ClosingError<E> {
    pub(crate) fn from_outcomes<T>(operation: Result<T, E>, release: Result<(), E>) -> Result<T, Self> {
        match (operation, release) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(release)) => Err(ClosingError::Release(release)),
            (Err(operation), Ok(())) => Err(ClosingError::Operation(operation)),
            (Err(operation), Err(release)) => Err(ClosingError::Both { operation, release }),
        }
    }

    /// Returns the upstream error, if any.
    pub fn upstream_error(&self) -> Option<&E> {
        match self {
            ClosingError::Upstream(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the operation error, if any.
    pub fn operation_error(&self) -> Option<&E> {
        match self {
            ClosingError::Operation(e) | ClosingError::Both { operation: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Returns the release error, if any.
    pub fn release_error(&self) -> Option<&E> {
        match self {
            ClosingError::Release(e) | ClosingError::Both { release: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Collapse to the error that takes precedence.
    ///
    /// When both phases failed the operation error wins and the release error is
    /// dropped.
    pub fn into_primary(self) -> E {
        match self {
            ClosingError::Upstream(e) | ClosingError::Operation(e) | ClosingError::Release(e) => e,
            ClosingError::Both { operation, .. } => operation,
        }
    }

    /// Maps the error type using the provided function.
    pub fn map<F, E2>(self, f: F) -> ClosingError<E2>
    where
        F: Fn(E) -> E2,
    {
        match self {
            ClosingError::Upstream(e) => ClosingError::Upstream(f(e)),
            ClosingError::Operation(e) => ClosingError::Operation(f(e)),
            ClosingError::Release(e) => ClosingError::Release(f(e)),
            ClosingError::Both { operation, release } => ClosingError::Both {
                operation: f(operation),
                release: f(release),
            },
        }
    }
}

impl<E: fmt::Display> fmt::Display for ClosingError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosingError::Upstream(e) => write!(f, "{}", e),
            ClosingError::Operation(e) => write!(f, "{}", e),
            ClosingError::Release(e) => write!(f, "release failed: {}", e),
            ClosingError::Both { operation, release } => write!(
                f,
                "operation failed: {}; release also failed: {}",
                operation, release
            ),
        }
    }
}

impl<E: StdError + 'static> StdError for ClosingError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ClosingError::Upstream(e) | ClosingError::Operation(e) | ClosingError::Release(e) => {
                Some(e)
            }
            ClosingError::Both { operation, .. } => Some(operation),
        }
    }
}
