//! The policy: configuration, validation and application.
//!
//! A [`Policy`] pairs a [`Selector`] (which errors to intercept) with a
//! [`HandlerSpec`] (what to call) and a [`ReraiseSpec`] (whether to keep
//! propagating). It is validated once on construction and then reused for
//! any number of calls.
//!
//! # Examples
//!
//! ```
//! use std::num::ParseIntError;
//!
//! use error_policy::{Handler, Policy};
//!
//! let policy = Policy::builder()
//!     .catch::<ParseIntError>()
//!     .handler(Handler::new(|err| eprintln!("ignoring: {err}")))
//!     .reraise(false)
//!     .build();
//!
//! let parsed = policy.run(|| "nope".parse::<i32>());
//! assert!(matches!(parsed, Ok(None)));
//!
//! let parsed = policy.run(|| "42".parse::<i32>());
//! assert!(matches!(parsed, Ok(Some(42))));
//! ```

mod builder;
mod guarded;
mod resolve;

pub use builder::PolicyBuilder;
pub use guarded::Guarded;
pub use resolve::Resolution;

use crate::types::{HandlerSpec, ReraiseSpec, Selector, ValidationIssue};

/// Declarative error policy.
///
/// The default policy intercepts every error, runs no handler and always
/// propagates, which is indistinguishable from having no policy at all. Any
/// configuration that fails validation degrades to exactly that.
#[derive(Clone, Debug, Default)]
pub struct Policy {
    selector: Selector,
    handlers: HandlerSpec,
    reraise: ReraiseSpec,
    issue: Option<ValidationIssue>,
}

impl Policy {
    /// Creates a policy, validating the configuration.
    ///
    /// An invalid configuration does not fail: the policy resets to the
    /// default and records the reason, see [`validation_issue`](Self::validation_issue).
    ///
    /// # Examples
    ///
    /// ```
    /// use error_policy::{HandlerSpec, Policy, ReraiseSpec, Selector, ValidationIssue};
    ///
    /// let policy = Policy::new(Selector::Universal, HandlerSpec::None, ReraiseSpec::Sequence(vec![]));
    ///
    /// assert!(policy.is_default());
    /// assert_eq!(policy.validation_issue(), Some(&ValidationIssue::EmptyReraise));
    /// ```
    pub fn new(
        selector: impl Into<Selector>,
        handlers: impl Into<HandlerSpec>,
        reraise: impl Into<ReraiseSpec>,
    ) -> Self {
        let reraise = reraise.into();
        match validate_reraise(&reraise) {
            Ok(()) => Self { selector: selector.into(), handlers: handlers.into(), reraise, issue: None },
            Err(issue) => Self::reset(issue),
        }
    }

    /// Starts a [`PolicyBuilder`].
    #[inline]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    /// The default policy, remembering why a configuration was discarded.
    pub(crate) fn reset(issue: ValidationIssue) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(%issue, "error policy configuration rejected, falling back to default policy");

        Self { issue: Some(issue), ..Self::default() }
    }

    /// Which errors this policy intercepts.
    #[inline]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The configured handlers.
    #[inline]
    pub const fn handlers(&self) -> &HandlerSpec {
        &self.handlers
    }

    /// The configured reraise decisions.
    #[inline]
    pub const fn reraise(&self) -> &ReraiseSpec {
        &self.reraise
    }

    /// Why the configuration was discarded, if it was.
    #[inline]
    pub const fn validation_issue(&self) -> Option<&ValidationIssue> {
        self.issue.as_ref()
    }

    /// Returns `true` if the configuration was discarded during validation.
    #[inline]
    pub const fn is_reset(&self) -> bool {
        self.issue.is_some()
    }

    /// Returns `true` if this policy behaves like the default policy:
    /// every error intercepted, no handler, always propagated.
    pub fn is_default(&self) -> bool {
        self.selector.is_universal() && self.handlers.resolve(0).is_none() && self.reraise.resolve(0)
    }
}

fn validate_reraise(reraise: &ReraiseSpec) -> Result<(), ValidationIssue> {
    match reraise {
        ReraiseSpec::Sequence(flags) if flags.is_empty() => Err(ValidationIssue::EmptyReraise),
        _ => Ok(()),
    }
}
