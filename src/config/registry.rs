use core::error::Error;

use crate::types::alloc_type::{BTreeMap, String};
use crate::types::{ErrorKind, Handler, ValidationIssue};

/// Name that always resolves to the universal kind.
pub const UNIVERSAL_KIND: &str = "*";

/// Named error kinds and handlers available to a [`PolicyConfig`](super::PolicyConfig).
///
/// # Examples
///
/// ```
/// use error_policy::config::{Registry, UNIVERSAL_KIND};
/// use error_policy::ErrorKind;
///
/// let registry = Registry::with_core_kinds();
///
/// assert_eq!(registry.kind("ParseIntError"), Some(ErrorKind::of::<core::num::ParseIntError>()));
/// assert_eq!(registry.kind(UNIVERSAL_KIND), Some(ErrorKind::universal()));
/// assert_eq!(registry.kind("NoSuchError"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    kinds: BTreeMap<String, ErrorKind>,
    handlers: BTreeMap<String, Handler>,
}

impl Registry {
    /// Creates an empty registry. Only [`UNIVERSAL_KIND`] resolves.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the error types of `core` and `alloc`
    /// registered under their type names, plus `io::Error` with the `std`
    /// feature.
    pub fn with_core_kinds() -> Self {
        let registry = Self::new()
            .with_kind::<core::fmt::Error>("fmt::Error")
            .with_kind::<core::num::ParseIntError>("ParseIntError")
            .with_kind::<core::num::ParseFloatError>("ParseFloatError")
            .with_kind::<core::num::TryFromIntError>("TryFromIntError")
            .with_kind::<core::str::ParseBoolError>("ParseBoolError")
            .with_kind::<core::str::Utf8Error>("Utf8Error")
            .with_kind::<core::char::CharTryFromError>("CharTryFromError")
            .with_kind::<alloc::string::FromUtf8Error>("FromUtf8Error");

        #[cfg(feature = "std")]
        let registry = registry.with_kind::<std::io::Error>("io::Error");

        registry
    }

    /// Registers `E` under `name`, replacing any previous entry.
    pub fn with_kind<E>(self, name: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_error_kind(name, ErrorKind::of::<E>())
    }

    /// Registers `kind` under `name`, replacing any previous entry.
    pub fn with_error_kind(mut self, name: impl Into<String>, kind: ErrorKind) -> Self {
        self.register_kind(name, kind);
        self
    }

    /// Registers `handler` under `name`, replacing any previous entry.
    pub fn with_handler(mut self, name: impl Into<String>, handler: Handler) -> Self {
        self.register_handler(name, handler);
        self
    }

    /// Registers `kind` under `name`, returning the kind it replaced.
    pub fn register_kind(&mut self, name: impl Into<String>, kind: ErrorKind) -> Option<ErrorKind> {
        self.kinds.insert(name.into(), kind)
    }

    /// Registers `handler` under `name`, returning the handler it replaced.
    ///
    /// A handler without a label is labelled with its name.
    pub fn register_handler(&mut self, name: impl Into<String>, handler: Handler) -> Option<Handler> {
        let name = name.into();
        let handler = match handler.label() {
            Some(_) => handler,
            None => handler.with_label(name.clone()),
        };
        self.handlers.insert(name, handler)
    }

    /// Looks up a kind by name.
    pub fn kind(&self, name: &str) -> Option<ErrorKind> {
        if name == UNIVERSAL_KIND {
            return Some(ErrorKind::universal());
        }
        self.kinds.get(name).copied()
    }

    /// Looks up a handler by name.
    pub fn handler(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    /// Registered kind names, in sorted order.
    pub fn kind_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.kinds.keys().map(String::as_str)
    }

    /// Registered handler names, in sorted order.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.keys().map(String::as_str)
    }

    pub(crate) fn resolve_kind(&self, name: &str) -> Result<ErrorKind, ValidationIssue> {
        self.kind(name).ok_or_else(|| ValidationIssue::UnknownKind { name: name.into() })
    }

    pub(crate) fn resolve_handler(&self, name: &str) -> Result<Handler, ValidationIssue> {
        self.handler(name).cloned().ok_or_else(|| ValidationIssue::UnknownHandler { name: name.into() })
    }
}
