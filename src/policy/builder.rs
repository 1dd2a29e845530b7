use core::error::Error;

use crate::policy::Policy;
use crate::types::{ErrorKind, Handler, HandlerSpec, KindVec, ReraiseSpec, Selector};

/// Step-by-step construction of a [`Policy`].
///
/// Kinds added with [`catch`](Self::catch) keep their order: the first kind
/// aligns with the first handler and reraise entries. With no kinds the
/// policy intercepts every error; with one kind it is a single-kind selector.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use core::num::ParseIntError;
///
/// use error_policy::{Handler, Policy};
///
/// let policy = Policy::builder()
///     .catch::<ParseIntError>()
///     .catch::<fmt::Error>()
///     .handlers([Handler::new(|_| {}), Handler::new(|_| {})])
///     .reraise_each([false, true])
///     .build();
///
/// assert_eq!(policy.selector().len(), 2);
/// assert!(policy.validation_issue().is_none());
/// ```
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct PolicyBuilder {
    kinds: KindVec,
    handlers: HandlerSpec,
    reraise: ReraiseSpec,
}

impl PolicyBuilder {
    /// Creates a builder for the default policy.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intercepts errors of type `E`.
    #[inline]
    pub fn catch<E>(self) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.catch_kind(ErrorKind::of::<E>())
    }

    /// Intercepts every error at this position.
    #[inline]
    pub fn catch_any(self) -> Self {
        self.catch_kind(ErrorKind::universal())
    }

    /// Intercepts errors of `kind`.
    pub fn catch_kind(mut self, kind: ErrorKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Uses one handler for every intercepted error.
    pub fn handler(mut self, handler: Handler) -> Self {
        self.handlers = HandlerSpec::Single(handler);
        self
    }

    /// Uses handlers aligned with the caught kinds.
    pub fn handlers<I, H>(mut self, handlers: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<Option<Handler>>,
    {
        self.handlers = HandlerSpec::sequence(handlers);
        self
    }

    /// Uses one reraise decision for every intercepted error.
    pub fn reraise(mut self, reraise: bool) -> Self {
        self.reraise = ReraiseSpec::Single(reraise);
        self
    }

    /// Uses reraise decisions aligned with the caught kinds.
    pub fn reraise_each<I>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.reraise = flags.into_iter().collect();
        self
    }

    /// Validates the configuration and builds the policy.
    pub fn build(self) -> Policy {
        let selector = match self.kinds.len() {
            0 => Selector::Universal,
            1 => Selector::Single(self.kinds[0]),
            _ => Selector::Sequence(self.kinds),
        };
        Policy::new(selector, self.handlers, self.reraise)
    }
}
