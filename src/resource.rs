//! Scoped resources with guaranteed release.
//!
//! A [`ResourceHolder`] sits between two steps of a chain: it holds either a live
//! resource or the error that prevented acquiring one. Consuming it with
//! [`resolve_closing`](ResourceHolder::resolve_closing) or
//! [`run_effect_closing`](ResourceHolder::run_effect_closing) runs the next
//! operation against the resource and then releases it, on every exit path:
//!
//! 1. **Use**: the operation borrows the resource mutably
//! 2. **Release**: always runs, also when the operation fails or panics
//! 3. **Combine**: an operation error wins over a release error
//!
//! When only the release fails, its error becomes the handler's error. When both
//! fail, the release error is logged as suppressed and the operation error is kept.
//! [`resolve_closing_detailed`](ResourceHolder::resolve_closing_detailed) keeps both
//! instead.
//!
//! # Example
//!
//! ```rust
//! use dichotomy::{resolve, Closeable, Resolve};
//!
//! struct Session {
//!     queries: Vec<String>,
//! }
//!
//! impl Closeable for Session {
//!     type Error = String;
//!
//!     fn close(self) -> Result<(), String> {
//!         Ok(())
//!     }
//! }
//!
//! let rows: Resolve<usize, String> = resolve(|| Ok::<_, String>("db://local"))
//!     .map_to_resource(|_url| Session { queries: Vec::new() })
//!     .resolve_closing(|session| {
//!         session.queries.push("SELECT 1".to_string());
//!         Ok::<_, String>(session.queries.len())
//!     });
//!
//! assert_eq!(rows, Resolve::Success(1));
//! ```

use std::fmt;
use std::io::{BufWriter, Write};
use std::panic::{self, AssertUnwindSafe};

use crate::effect::Effect;
use crate::either::Either;
use crate::error::{BoxError, ClosingError};
use crate::resolve::Resolve;

/// A resource with an explicit release step that may fail.
///
/// `close` takes the resource by value, so it can run at most once.
pub trait Closeable {
    /// Error produced when release fails.
    type Error;

    /// Release the resource.
    fn close(self) -> Result<(), Self::Error>;
}

impl<W: Write> Closeable for BufWriter<W> {
    type Error = std::io::Error;

    /// Flushes buffered data; a failed flush is the release error.
    fn close(self) -> Result<(), std::io::Error> {
        self.into_inner().map(drop).map_err(|e| e.into_error())
    }
}

/// A live resource, a propagated error, or nothing.
///
/// Built by [`Resolve::map_to_resource`], [`Resolve::try_map_to_resource`] or
/// [`with_resource`](crate::with_resource). Every `*_closing` method consumes the
/// holder, so the resource is released exactly once.
pub struct ResourceHolder<R, E = BoxError> {
    inner: Option<Either<E, R>>,
}

impl<R, E> fmt::Debug for ResourceHolder<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.inner {
            Some(Either::Right(_)) => "<resource>",
            Some(Either::Left(_)) => "<error>",
            None => "<empty>",
        };
        f.debug_struct("ResourceHolder").field("state", &state).finish()
    }
}

impl<R, E> ResourceHolder<R, E> {
    /// Hold a freshly acquired resource.
    pub fn new(resource: R) -> Self {
        ResourceHolder {
            inner: Some(Either::Right(resource)),
        }
    }

    /// Carry an upstream error; no resource will be touched.
    pub fn from_error(error: E) -> Self {
        ResourceHolder {
            inner: Some(Either::Left(error)),
        }
    }

    /// Hold nothing; every `*_closing` call yields `Empty`.
    pub fn empty() -> Self {
        ResourceHolder { inner: None }
    }

    /// Capture an acquisition result.
    pub fn from_result(result: Result<R, E>) -> Self {
        match result {
            Ok(resource) => ResourceHolder::new(resource),
            Err(error) => ResourceHolder::from_error(error),
        }
    }

    /// Returns `true` if a resource is held.
    pub fn has_resource(&self) -> bool {
        matches!(self.inner, Some(Either::Right(_)))
    }

    /// Returns `true` if an upstream error is held.
    pub fn has_error(&self) -> bool {
        matches!(self.inner, Some(Either::Left(_)))
    }

    /// Returns `true` if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Run `op` on the resource, then release it with `release`.
    ///
    /// For resources that do not implement [`Closeable`]. Semantics are those of
    /// [`ResourceHolder::resolve_closing`].
    pub fn resolve_closing_with<T, X, RX, Op, Rel>(self, op: Op, release: Rel) -> Resolve<T, E>
    where
        Op: FnOnce(&mut R) -> Result<T, X>,
        Rel: FnOnce(R) -> Result<(), RX>,
        X: Into<E>,
        RX: Into<E>,
        E: fmt::Debug,
    {
        match self.inner {
            None => Resolve::Empty,
            Some(Either::Left(error)) => Resolve::Error(error),
            Some(Either::Right(resource)) => {
                Resolve::from_result(use_then_release(resource, op, release).map_err(settle))
            }
        }
    }

    /// Effect-shaped counterpart of [`ResourceHolder::resolve_closing_with`].
    pub fn run_effect_closing_with<X, RX, Op, Rel>(self, op: Op, release: Rel) -> Effect<E>
    where
        Op: FnOnce(&mut R) -> Result<(), X>,
        Rel: FnOnce(R) -> Result<(), RX>,
        X: Into<E>,
        RX: Into<E>,
        E: fmt::Debug,
    {
        match self.inner {
            None => Effect::Empty,
            Some(Either::Left(error)) => Effect::Error(error),
            Some(Either::Right(resource)) => {
                Effect::from_result(use_then_release(resource, op, release).map_err(settle))
            }
        }
    }

    /// Like [`ResourceHolder::resolve_closing_with`], keeping every error.
    pub fn resolve_closing_detailed_with<T, X, RX, Op, Rel>(
        self,
        op: Op,
        release: Rel,
    ) -> Resolve<T, ClosingError<E>>
    where
        Op: FnOnce(&mut R) -> Result<T, X>,
        Rel: FnOnce(R) -> Result<(), RX>,
        X: Into<E>,
        RX: Into<E>,
        E: fmt::Debug,
    {
        match self.inner {
            None => Resolve::Empty,
            Some(Either::Left(error)) => Resolve::Error(ClosingError::Upstream(error)),
            Some(Either::Right(resource)) => {
                Resolve::from_result(use_then_release(resource, op, release))
            }
        }
    }
}

impl<R, E> ResourceHolder<R, E>
where
    R: Closeable,
    R::Error: Into<E>,
{
    /// Run `op` on the resource and release it afterwards.
    ///
    /// - resource held: `op` runs, then [`Closeable::close`] runs unconditionally
    ///   (also if `op` panics, after which the panic resumes)
    /// - error held: the error is propagated and nothing is released
    /// - nothing held: `Empty`
    ///
    /// If `op` succeeds but release fails, the release error is the result. If both
    /// fail, the operation error is the result and the release error is logged.
    pub fn resolve_closing<T, X, Op>(self, op: Op) -> Resolve<T, E>
    where
        Op: FnOnce(&mut R) -> Result<T, X>,
        X: Into<E>,
        E: fmt::Debug,
    {
        self.resolve_closing_with(op, R::close)
    }

    /// Effect-shaped counterpart of [`ResourceHolder::resolve_closing`].
    pub fn run_effect_closing<X, Op>(self, op: Op) -> Effect<E>
    where
        Op: FnOnce(&mut R) -> Result<(), X>,
        X: Into<E>,
        E: fmt::Debug,
    {
        self.run_effect_closing_with(op, R::close)
    }

    /// Like [`ResourceHolder::resolve_closing`], reporting which phase failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichotomy::{Closeable, ResourceHolder};
    /// use dichotomy::error::ClosingError;
    ///
    /// struct Lease;
    ///
    /// impl Closeable for Lease {
    ///     type Error = &'static str;
    ///
    ///     fn close(self) -> Result<(), &'static str> {
    ///         Err("lease already expired")
    ///     }
    /// }
    ///
    /// let holder: ResourceHolder<Lease, &str> = ResourceHolder::new(Lease);
    /// let outcome = holder.resolve_closing_detailed(|_| Err::<(), _>("renew rejected"));
    ///
    /// assert_eq!(
    ///     outcome.error(),
    ///     Some(&ClosingError::Both {
    ///         operation: "renew rejected",
    ///         release: "lease already expired",
    ///     })
    /// );
    /// ```
    pub fn resolve_closing_detailed<T, X, Op>(self, op: Op) -> Resolve<T, ClosingError<E>>
    where
        Op: FnOnce(&mut R) -> Result<T, X>,
        X: Into<E>,
        E: fmt::Debug,
    {
        self.resolve_closing_detailed_with(op, R::close)
    }
}

impl<R, E> From<Result<R, E>> for ResourceHolder<R, E> {
    fn from(result: Result<R, E>) -> Self {
        ResourceHolder::from_result(result)
    }
}

fn use_then_release<R, T, E, X, RX, Op, Rel>(
    mut resource: R,
    op: Op,
    release: Rel,
) -> Result<T, ClosingError<E>>
where
    Op: FnOnce(&mut R) -> Result<T, X>,
    Rel: FnOnce(R) -> Result<(), RX>,
    X: Into<E>,
    RX: Into<E>,
    E: fmt::Debug,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| op(&mut resource)));

    // Release runs regardless of how the operation ended
    let released: Result<(), E> = release(resource).map_err(Into::into);

    match outcome {
        Ok(result) => ClosingError::from_outcomes(result.map_err(Into::into), released),
        Err(payload) => {
            if let Err(ref release_error) = released {
                #[cfg(feature = "tracing")]
                tracing::error!("Resource release failed after panic: {:?}", release_error);
                #[cfg(not(feature = "tracing"))]
                eprintln!("Resource release failed after panic: {:?}", release_error);
            }
            panic::resume_unwind(payload)
        }
    }
}

fn settle<E: fmt::Debug>(error: ClosingError<E>) -> E {
    if let ClosingError::Both { ref release, .. } = error {
        #[cfg(feature = "tracing")]
        tracing::warn!("Resource release failed (suppressed): {:?}", release);
        #[cfg(not(feature = "tracing"))]
        eprintln!("Resource release failed (suppressed): {:?}", release);
    }
    error.into_primary()
}
