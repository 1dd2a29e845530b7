//! Extension trait for applying a policy to an existing `Result`.
//!
//! # Examples
//!
//! ```
//! use error_policy::traits::ResultPolicyExt;
//! use error_policy::Policy;
//!
//! let lenient = Policy::builder().reraise(false).build();
//!
//! let value = "12".parse::<u8>().apply_policy(&lenient).unwrap();
//! assert_eq!(value, Some(12));
//!
//! let value = "300".parse::<u8>().apply_policy(&lenient).unwrap();
//! assert_eq!(value, None);
//! ```

use crate::policy::Policy;
use crate::types::{BoxError, PolicyResult};

/// Applies a [`Policy`] to a `Result` that was produced without a wrapper.
///
/// Useful when the fallible call is an expression in the middle of a function
/// rather than a standalone operation.
pub trait ResultPolicyExt<T> {
    /// Routes the error, if any, through `policy`.
    ///
    /// Equivalent to [`Policy::handle`].
    fn apply_policy(self, policy: &Policy) -> PolicyResult<T>;
}

impl<T, E> ResultPolicyExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn apply_policy(self, policy: &Policy) -> PolicyResult<T> {
        policy.handle(self)
    }
}
