//! Declarative, reusable error policies.
//!
//! A [`Policy`] decides what happens to the errors an operation produces:
//! which error kinds are intercepted, which [`Handler`] runs for each kind,
//! and whether the error keeps propagating afterwards. Errors outside the
//! policy's selector pass through untouched.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_policy::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Catch everything, report, keep going
//!
//! ```
//! use error_policy::{Handler, Policy};
//!
//! let policy = Policy::builder()
//!     .handler(Handler::new(|err| eprintln!("operation failed: {err}")))
//!     .reraise(false)
//!     .build();
//!
//! let outcome = policy.run(|| "not a number".parse::<u32>());
//! assert!(matches!(outcome, Ok(None)));
//! ```
//!
//! ## Different treatment per error kind
//!
//! ```
//! use core::fmt;
//! use core::num::ParseIntError;
//!
//! use error_policy::{kinds, BoxError, Handler, Policy};
//!
//! let policy = Policy::new(
//!     kinds![ParseIntError, fmt::Error],
//!     [Handler::new(|_| {}), Handler::new(|_| {})],
//!     [false, true],
//! );
//!
//! // ParseIntError is handled and suppressed.
//! assert!(matches!(policy.run(|| "x".parse::<i32>()), Ok(None)));
//!
//! // fmt::Error is handled and propagated.
//! let err = policy.run(|| Err::<(), _>(fmt::Error)).unwrap_err();
//! assert!(err.is::<fmt::Error>());
//!
//! // Anything else is not the policy's business.
//! let other: Result<(), BoxError> = Err("unrelated".into());
//! assert!(policy.run(|| other).is_err());
//! ```
//!
//! ## Wrapping an operation
//!
//! ```
//! use error_policy::Policy;
//!
//! let checked_div = Policy::default().wrap(|a: i32, b: i32| {
//!     a.checked_div(b).ok_or("division by zero")
//! });
//!
//! assert_eq!(checked_div.call((10, 2)).unwrap(), Some(5));
//! assert!(checked_div.call((1, 0)).is_err());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Loosely-typed configuration and the name registry
pub mod config;
/// Configuration macros
pub mod macros;
/// Policy construction, validation and application
pub mod policy;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for wrapping operations
pub mod traits;
/// Error kinds, selectors, handlers and reraise flags
pub mod types;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use policy::{Guarded, Policy, PolicyBuilder, Resolution};
pub use traits::*;
pub use types::{
    BoxError, ConfigField, DynError, ErrorKind, Handler, HandlerSpec, KindVec, PolicyResult,
    ReraiseSpec, Selector, ValidationIssue,
};
