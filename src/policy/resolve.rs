use crate::policy::Policy;
use crate::types::{BoxError, DynError, Handler, PolicyResult};

/// What a policy decided for one intercepted error.
///
/// Produced by [`Policy::resolve`]; nothing has been invoked yet.
#[derive(Clone, Copy, Debug)]
pub struct Resolution<'p> {
    index: usize,
    handler: Option<&'p Handler>,
    reraise: bool,
}

impl<'p> Resolution<'p> {
    /// Position of the error within the selector.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The handler to invoke, if any.
    #[inline]
    pub const fn handler(&self) -> Option<&'p Handler> {
        self.handler
    }

    /// Whether the error keeps propagating after the handler ran.
    #[inline]
    pub const fn reraise(&self) -> bool {
        self.reraise
    }
}

impl Policy {
    /// Returns `true` if `error` falls under this policy's selector.
    #[inline]
    pub fn intercepts(&self, error: &DynError) -> bool {
        self.selector.matches(error)
    }

    /// Resolves the handler and reraise decision for `error`.
    ///
    /// Returns `None` for errors the selector does not intercept.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use core::num::ParseIntError;
    ///
    /// use error_policy::{kinds, BoxError, Handler, Policy};
    ///
    /// let policy = Policy::new(
    ///     kinds![ParseIntError, fmt::Error],
    ///     [Handler::new(|_| {}).with_label("parse"), Handler::new(|_| {}).with_label("fmt")],
    ///     [false, true],
    /// );
    ///
    /// let err: BoxError = fmt::Error.into();
    /// let resolution = policy.resolve(&*err).unwrap();
    ///
    /// assert_eq!(resolution.index(), 1);
    /// assert_eq!(resolution.handler().and_then(Handler::label), Some("fmt"));
    /// assert!(resolution.reraise());
    /// ```
    pub fn resolve(&self, error: &DynError) -> Option<Resolution<'_>> {
        if !self.intercepts(error) {
            return None;
        }
        Some(self.resolve_at(self.selector.position(error)))
    }

    /// Resolves the handler and reraise decision for selector position
    /// `index`.
    ///
    /// Handler and reraise sequences shorter than `index + 1` fall back to
    /// their last entry; so does every lookup when the selector is an empty
    /// sequence.
    pub fn resolve_at(&self, index: usize) -> Resolution<'_> {
        if self.selector.is_empty() {
            return Resolution {
                index,
                handler: self.handlers.resolve_unindexed(),
                reraise: self.reraise.resolve_unindexed(),
            };
        }
        Resolution { index, handler: self.handlers.resolve(index), reraise: self.reraise.resolve(index) }
    }

    /// Applies the policy to an error.
    ///
    /// * `Ok(())` - the error was intercepted and suppressed
    /// * `Err(error)` - the original error, unchanged, if it was not
    ///   intercepted or the policy reraises it
    /// * `Err(other)` - the handler failed with `other`
    pub fn apply(&self, error: BoxError) -> Result<(), BoxError> {
        let Some(resolution) = self.resolve(&*error) else {
            return Err(error);
        };

        if let Some(handler) = resolution.handler() {
            handler.call(&*error)?;
        }

        if resolution.reraise() {
            return Err(error);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(error = %error, index = resolution.index(), "error suppressed by policy");

        Ok(())
    }

    /// Applies the policy to the result of an operation.
    #[inline]
    pub fn handle<T, E>(&self, result: Result<T, E>) -> PolicyResult<T>
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) => self.apply(error.into()).map(|()| None),
        }
    }

    /// Runs `op` once under this policy.
    ///
    /// A successful value is returned untouched as `Ok(Some(value))`; a
    /// suppressed error becomes `Ok(None)`.
    #[inline]
    pub fn run<T, E, F>(&self, op: F) -> PolicyResult<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        self.handle(op())
    }
}
