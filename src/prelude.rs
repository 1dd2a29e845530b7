//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_policy::prelude::*;
//!
//! let policy = Policy::builder().reraise(false).build();
//! assert_eq!("5".parse::<u8>().apply_policy(&policy).unwrap(), Some(5));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`kinds!`], [`handlers!`]
//! - **Types**: [`Policy`], [`PolicyBuilder`], [`Handler`], [`ErrorKind`],
//!   [`Selector`], [`HandlerSpec`], [`ReraiseSpec`]
//! - **Traits**: [`ResultPolicyExt`], [`Operation`]
//! - **Aliases**: [`BoxError`], [`PolicyResult`]

// Macros
pub use crate::{handlers, kinds};

// Core types
pub use crate::policy::{Policy, PolicyBuilder};
pub use crate::types::{ErrorKind, Handler, HandlerSpec, ReraiseSpec, Selector};

// Traits
pub use crate::traits::{Operation, ResultPolicyExt};

// Aliases
pub use crate::types::{BoxError, PolicyResult};
