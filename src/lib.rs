//! # Dichotomy
//!
//! > *Every outcome is exactly one thing.*
//!
//! A Rust library for threading the outcome of fallible operations through a
//! chain of steps.
//!
//! ## Philosophy
//!
//! An operation either produced something, failed, or left nothing behind.
//! **Dichotomy** keeps that disposition in a closed enum and moves it through the
//! chain one transition at a time:
//! - [`Resolve`] = value-producing operations (`Success` / `Error` / `Empty`)
//! - [`Effect`] = side-effecting operations (`Error` / `Empty`)
//! - [`ResourceHolder`] = a resource released exactly once, whatever happens
//! - [`Either`] = a neutral "one of two" used at the boundaries
//!
//! Errors are never swallowed implicitly: a step preserves the error, converts it
//! through a function you wrote, or the chain ends in a terminal operation.
//!
//! ## Quick Example
//!
//! ```rust
//! use dichotomy::prelude::*;
//! use std::io;
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl std::fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//!
//! fn read_limit() -> Result<i32, BoxError> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "limits.conf").into())
//! }
//!
//! let limit = resolve(read_limit)
//!     .catch_error(|_: Timeout| 10)
//!     .catch_error(|_: io::Error| -1)
//!     .filter(|n| *n != 0)
//!     .unwrap_or(100);
//!
//! assert_eq!(limit, -1);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod effect;
pub mod either;
pub mod error;
pub mod ext;
pub mod facade;
pub mod resolve;
pub mod resource;
pub mod testing;

// Re-exports
pub use effect::Effect;
pub use either::Either;
pub use error::{BoxError, ClosingError, NullValueError, Throwable, TypeMismatchError};
pub use ext::{OptionExt, ResultExt};
pub use facade::{
    partial, partial_last, resolve, resolve_with, run_effect, run_effect_with, with_resource,
};
pub use resolve::Resolve;
pub use resource::{Closeable, ResourceHolder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::effect::Effect;
    pub use crate::either::Either;
    pub use crate::error::{BoxError, Throwable};
    pub use crate::ext::{OptionExt, ResultExt};
    pub use crate::facade::{resolve, run_effect, with_resource};
    pub use crate::resolve::Resolve;
    pub use crate::resource::{Closeable, ResourceHolder};
}
