//! Extension traits for lifting std types into handlers.
//!
//! ```rust
//! use dichotomy::prelude::*;
//!
//! let port: Resolve<u16, std::num::ParseIntError> = "8080".parse::<u16>().into_resolve();
//! assert_eq!(port.unwrap_or(0), 8080);
//!
//! let missing: Resolve<u16, String> = None::<u16>.into_resolve();
//! assert!(missing.is_empty());
//! ```

use crate::effect::Effect;
use crate::resolve::Resolve;
use crate::resource::ResourceHolder;

/// Handler conversions for `Result`.
pub trait ResultExt<T, E> {
    /// Capture as `Success` or `Error`.
    fn into_resolve(self) -> Resolve<T, E>;

    /// Capture as an [`Effect`], discarding the success value.
    fn into_effect(self) -> Effect<E>;

    /// Treat the success value as a resource to be released later.
    fn into_resource(self) -> ResourceHolder<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_resolve(self) -> Resolve<T, E> {
        Resolve::from_result(self)
    }

    #[inline]
    fn into_effect(self) -> Effect<E> {
        Effect::from_result(self.map(drop))
    }

    #[inline]
    fn into_resource(self) -> ResourceHolder<T, E> {
        ResourceHolder::from_result(self)
    }
}

/// Handler conversions for `Option`.
pub trait OptionExt<T> {
    /// `Some` becomes `Success`, `None` becomes `Empty`.
    fn into_resolve<E>(self) -> Resolve<T, E>;

    /// `Some` becomes `Success`, `None` becomes `Error(error())`.
    fn into_resolve_or_else<E, F>(self, error: F) -> Resolve<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_resolve<E>(self) -> Resolve<T, E> {
        Resolve::from_option(self)
    }

    #[inline]
    fn into_resolve_or_else<E, F>(self, error: F) -> Resolve<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Resolve::Success(value),
            None => Resolve::Error(error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_resolve() {
        assert_eq!(Ok::<_, &str>(1).into_resolve(), Resolve::Success(1));
        assert_eq!(Err::<i32, _>("e").into_resolve(), Resolve::Error("e"));
    }

    #[test]
    fn test_result_into_effect_discards_value() {
        assert!(Ok::<_, &str>(99).into_effect().is_empty());
        assert_eq!(Err::<i32, _>("e").into_effect(), Effect::Error("e"));
    }

    #[test]
    fn test_result_into_resource() {
        assert!(Ok::<_, &str>(vec![1u8]).into_resource().has_resource());
    }

    #[test]
    fn test_option_into_resolve() {
        assert_eq!(Some(3).into_resolve::<&str>(), Resolve::Success(3));
        assert!(None::<i32>.into_resolve::<&str>().is_empty());
        assert_eq!(
            None::<i32>.into_resolve_or_else(|| "missing"),
            Resolve::Error("missing")
        );
    }
}
