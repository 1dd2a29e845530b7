//! Traits for wrapping operations with a policy.
//!
//! - [`Operation`]: calling convention for fallible operations of any arity
//! - [`ResultPolicyExt`]: apply a policy to an existing `Result`
//!
//! # Examples
//!
//! ```
//! use error_policy::traits::{Operation, ResultPolicyExt};
//! use error_policy::Policy;
//!
//! let parse = |text: &str| text.parse::<i64>();
//! let policy = Policy::default();
//!
//! assert!(parse.invoke(("7",)).apply_policy(&policy).is_ok());
//! assert!(parse.invoke(("x",)).apply_policy(&policy).is_err());
//! ```

pub mod operation;
pub mod result_ext;

pub use operation::Operation;
pub use result_ext::ResultPolicyExt;
