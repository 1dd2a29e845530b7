use core::error::Error;
use core::fmt;

use crate::types::alloc_type::{Arc, Cow, Vec};
use crate::types::{aligned, BoxError, DynError};

type HandlerFn = dyn Fn(&DynError) -> Result<(), BoxError> + Send + Sync;

/// Callback invoked with an intercepted error before the reraise decision.
///
/// Handlers are cheap to clone (reference counted) and may carry a label,
/// which shows up in `Debug` output and makes resolutions easy to inspect.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// use error_policy::{BoxError, Handler};
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// let handler = Handler::new(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// })
/// .with_label("count");
///
/// let err: BoxError = "boom".into();
/// handler.call(&*err).unwrap();
///
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// assert_eq!(handler.label(), Some("count"));
/// ```
#[derive(Clone)]
pub struct Handler {
    func: Arc<HandlerFn>,
    label: Option<Cow<'static, str>>,
}

impl Handler {
    /// Creates a handler from a callback that cannot fail.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&DynError) + Send + Sync + 'static,
    {
        Self::try_new(move |error| {
            f(error);
            Ok(())
        })
    }

    /// Creates a handler from a fallible callback.
    ///
    /// An error returned here propagates out of the wrapped call in place of
    /// the intercepted error, regardless of the reraise setting.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&DynError) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self { func: Arc::new(f), label: None }
    }

    /// Creates a handler that only reacts to errors of type `E`.
    ///
    /// Errors of any other type are ignored by the callback.
    pub fn for_kind<E, F>(f: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        Self::new(move |error| {
            if let Some(typed) = error.downcast_ref::<E>() {
                f(typed);
            }
        })
    }

    /// Attaches a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label given with [`with_label`](Self::with_label), if any.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Invokes the callback with `error`.
    #[inline]
    pub fn call(&self, error: &DynError) -> Result<(), BoxError> {
        (self.func)(error)
    }

    /// Returns `true` if both values share the same callback.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => f.debug_tuple("Handler").field(label).finish(),
            None => f.write_str("Handler(<fn>)"),
        }
    }
}

/// Handler configuration of a policy.
#[derive(Clone, Debug, Default)]
pub enum HandlerSpec {
    /// No handler.
    #[default]
    None,
    /// One handler for every intercepted error.
    Single(Handler),
    /// Handlers aligned with the selector sequence. `None` entries leave the
    /// aligned error kind without a handler.
    Sequence(Vec<Option<Handler>>),
}

impl HandlerSpec {
    /// Handler sequence from any list of handlers or absent entries.
    pub fn sequence<I, H>(handlers: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<Option<Handler>>,
    {
        Self::Sequence(handlers.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if at least one handler slot exists.
    ///
    /// An empty sequence counts as unconfigured.
    pub fn is_configured(&self) -> bool {
        match self {
            Self::None => false,
            Self::Single(_) => true,
            Self::Sequence(handlers) => !handlers.is_empty(),
        }
    }

    /// Handler for the error found at `index` of a non-empty selector.
    ///
    /// A sequence shorter than `index + 1` falls back to its last entry.
    pub fn resolve(&self, index: usize) -> Option<&Handler> {
        match self {
            Self::None => None,
            Self::Single(handler) => Some(handler),
            Self::Sequence(handlers) => aligned(handlers, index).and_then(Option::as_ref),
        }
    }

    /// Handler used when the selector is an empty sequence: the last entry.
    pub(crate) fn resolve_unindexed(&self) -> Option<&Handler> {
        match self {
            Self::None => None,
            Self::Single(handler) => Some(handler),
            Self::Sequence(handlers) => handlers.last().and_then(Option::as_ref),
        }
    }
}

impl From<Handler> for HandlerSpec {
    fn from(handler: Handler) -> Self {
        Self::Single(handler)
    }
}

impl From<Option<Handler>> for HandlerSpec {
    fn from(handler: Option<Handler>) -> Self {
        handler.map_or(Self::None, Self::Single)
    }
}

impl From<Vec<Option<Handler>>> for HandlerSpec {
    fn from(handlers: Vec<Option<Handler>>) -> Self {
        Self::Sequence(handlers)
    }
}

impl From<Vec<Handler>> for HandlerSpec {
    fn from(handlers: Vec<Handler>) -> Self {
        Self::sequence(handlers)
    }
}

impl<const N: usize> From<[Handler; N]> for HandlerSpec {
    fn from(handlers: [Handler; N]) -> Self {
        Self::sequence(handlers)
    }
}
