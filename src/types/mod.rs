//! Building blocks of a policy: error kinds, selectors, handlers and reraise
//! flags.
//!
//! # Examples
//!
//! ```
//! use error_policy::{ErrorKind, Handler, HandlerSpec, ReraiseSpec, Selector};
//!
//! let selector = Selector::from_kinds([
//!     ErrorKind::of::<core::num::ParseIntError>(),
//!     ErrorKind::of::<core::fmt::Error>(),
//! ]);
//! let handlers = HandlerSpec::from(Handler::new(|_| {}));
//! let reraise = ReraiseSpec::from([false, true]);
//!
//! assert_eq!(selector.len(), 2);
//! assert!(handlers.is_configured());
//! assert_eq!(reraise.resolve(1), true);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_kind;
pub mod handler;
pub mod issue;
pub mod reraise;
pub mod selector;

pub use error_kind::*;
pub use handler::*;
pub use issue::*;
pub use reraise::*;
pub use selector::*;

use alloc_type::Box;

/// The error object every policy works with.
pub type DynError = dyn core::error::Error + Send + Sync + 'static;

/// Boxed error propagated out of a policy-wrapped operation.
pub type BoxError = Box<DynError>;

/// Outcome of a policy-wrapped call.
///
/// * `Ok(Some(value))` - the operation succeeded, value untouched
/// * `Ok(None)` - the operation failed and the policy suppressed the error
/// * `Err(error)` - the error propagated
pub type PolicyResult<T> = Result<Option<T>, BoxError>;

/// SmallVec-backed list of error kinds.
///
/// Inline storage for two kinds covers the common "catch A or B" policy
/// without a heap allocation.
pub type KindVec = SmallVec<[ErrorKind; 2]>;

/// Picks the entry aligned with `index`, falling back to the last entry when
/// the sequence is too short.
#[inline]
pub(crate) fn aligned<T>(entries: &[T], index: usize) -> Option<&T> {
    entries.get(index).or_else(|| entries.last())
}
