//! Shorthand macros for policy configuration.
//!
//! - [`macro@crate::kinds`] - builds a sequence [`Selector`](crate::Selector)
//!   from a list of error types.
//! - [`macro@crate::handlers`] - builds a sequence
//!   [`HandlerSpec`](crate::HandlerSpec), with `_` for "no handler here".
//!
//! # Examples
//!
//! ```
//! use core::fmt;
//! use core::num::ParseIntError;
//!
//! use error_policy::{handlers, kinds, Handler, Policy};
//!
//! let policy = Policy::new(
//!     kinds![ParseIntError, fmt::Error],
//!     handlers![Handler::new(|_| {}), _],
//!     [false, true],
//! );
//!
//! assert_eq!(policy.selector().len(), 2);
//! ```

/// Builds a sequence [`Selector`](crate::Selector) from error types.
///
/// The order of the types is the order used for handler and reraise
/// alignment. `*` stands for the universal kind.
///
/// # Examples
///
/// ```
/// use core::num::{ParseFloatError, ParseIntError};
///
/// use error_policy::{kinds, ErrorKind, Selector};
///
/// let selector = kinds![ParseIntError, ParseFloatError];
/// assert_eq!(
///     selector,
///     Selector::from_kinds([ErrorKind::of::<ParseIntError>(), ErrorKind::of::<ParseFloatError>()])
/// );
///
/// let with_fallback = kinds![ParseIntError, *];
/// assert!(with_fallback.kinds()[1].is_universal());
/// ```
#[macro_export]
macro_rules! kinds {
    ($($kind:tt)*) => {
        $crate::Selector::from_kinds($crate::__kind_list!([] $($kind)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __kind_list {
    ([$($done:expr),*]) => {
        [$($done),*]
    };
    ([$($done:expr),*] * $(, $($rest:tt)*)?) => {
        $crate::__kind_list!([$($done,)* $crate::ErrorKind::universal()] $($($rest)*)?)
    };
    ([$($done:expr),*] $kind:ty $(, $($rest:tt)*)?) => {
        $crate::__kind_list!([$($done,)* $crate::ErrorKind::of::<$kind>()] $($($rest)*)?)
    };
}

/// Builds a sequence [`HandlerSpec`](crate::HandlerSpec).
///
/// Each entry is an expression producing a [`Handler`](crate::Handler), or
/// `_` to leave that position without a handler.
///
/// # Examples
///
/// ```
/// use error_policy::{handlers, Handler, HandlerSpec};
///
/// let spec = handlers![_, Handler::new(|_| {}).with_label("second")];
///
/// assert!(spec.resolve(0).is_none());
/// assert_eq!(spec.resolve(1).and_then(Handler::label), Some("second"));
/// ```
#[macro_export]
macro_rules! handlers {
    ($($entry:tt)*) => {
        $crate::HandlerSpec::Sequence($crate::__handler_list!([] $($entry)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __handler_list {
    ([$($done:expr),*]) => {
        ::core::convert::From::from([$($done),*])
    };
    ([$($done:expr),*] _ $(, $($rest:tt)*)?) => {
        $crate::__handler_list!([$($done,)* ::core::option::Option::None] $($($rest)*)?)
    };
    ([$($done:expr),*] $handler:expr $(, $($rest:tt)*)?) => {
        $crate::__handler_list!(
            [$($done,)* ::core::option::Option::Some::<$crate::Handler>($handler)] $($($rest)*)?
        )
    };
}
