//! Testing utilities for code built on handlers.
//!
//! Assertion macros for the three handler states, plus `proptest` strategies
//! behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use dichotomy::{assert_empty, assert_error, assert_success, Resolve};
//!
//! let found: Resolve<i32, &str> = Resolve::Success(42);
//! assert_success!(found);
//!
//! let failed: Resolve<i32, &str> = Resolve::Error("timeout");
//! assert_error!(failed);
//!
//! let filtered: Resolve<i32, &str> = Resolve::Success(3).filter(|n| *n > 10);
//! assert_empty!(filtered);
//! ```

/// Assert that a resolve holds a value.
///
/// Panics with the error (or "Empty") otherwise. With a second argument the value
/// is also compared.
///
/// # Example
///
/// ```rust
/// use dichotomy::{assert_success, Resolve};
///
/// let r: Resolve<_, String> = Resolve::Success(7);
/// assert_success!(r, 7);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($resolve:expr) => {
        match $resolve {
            $crate::Resolve::Success(_) => {}
            $crate::Resolve::Error(e) => {
                panic!("Expected Success, got Error: {:?}", e);
            }
            $crate::Resolve::Empty => {
                panic!("Expected Success, got Empty");
            }
        }
    };
    ($resolve:expr, $expected:expr) => {
        match $resolve {
            $crate::Resolve::Success(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Resolve::Error(e) => {
                panic!("Expected Success({:?}), got Error: {:?}", $expected, e);
            }
            $crate::Resolve::Empty => {
                panic!("Expected Success({:?}), got Empty", $expected);
            }
        }
    };
}

/// Assert that a resolve or effect holds an unhandled error.
#[macro_export]
macro_rules! assert_error {
    ($handler:expr) => {{
        let state = $crate::testing::__HandlerState::state(&$handler);
        if state != "Error" {
            panic!("Expected Error, got {}", state);
        }
    }};
}

/// Assert that a resolve or effect holds neither a value nor an error.
#[macro_export]
macro_rules! assert_empty {
    ($handler:expr) => {{
        let state = $crate::testing::__HandlerState::state(&$handler);
        if state != "Empty" {
            panic!("Expected Empty, got {}", state);
        }
    }};
}

#[doc(hidden)]
pub trait __HandlerState {
    /// Name of the live state.
    fn state(&self) -> &'static str;
}

impl<T, E> __HandlerState for crate::Resolve<T, E> {
    fn state(&self) -> &'static str {
        match self {
            crate::Resolve::Success(_) => "Success",
            crate::Resolve::Error(_) => "Error",
            crate::Resolve::Empty => "Empty",
        }
    }
}

impl<E> __HandlerState for crate::Effect<E> {
    fn state(&self) -> &'static str {
        match self {
            crate::Effect::Error(_) => "Error",
            crate::Effect::Empty => "Empty",
        }
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for crate::Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(crate::Either::Left),
            any_with::<R>(r_params).prop_map(crate::Either::Right),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Resolve<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(crate::Resolve::Success),
            any_with::<E>(e_params).prop_map(crate::Resolve::Error),
            LazyJust::new(|| crate::Resolve::Empty),
        ]
        .boxed()
    }
}
