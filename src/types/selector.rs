use core::error::Error;

use crate::types::{ErrorKind, KindVec};

/// Which error kinds a policy intercepts.
///
/// Errors outside the selector are never touched by the policy: no handler
/// runs and the reraise setting is not consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selector {
    /// Intercept every error.
    #[default]
    Universal,
    /// Intercept one kind.
    Single(ErrorKind),
    /// Intercept any of the listed kinds. Position matters: it selects the
    /// aligned handler and reraise entries. An empty list intercepts nothing.
    Sequence(KindVec),
}

impl Selector {
    /// Selector for the concrete error type `E`.
    #[inline]
    pub fn of<E>() -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Single(ErrorKind::of::<E>())
    }

    /// Sequence selector from an ordered list of kinds.
    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = ErrorKind>,
    {
        Self::Sequence(kinds.into_iter().collect())
    }

    /// Returns `true` for a sequence selector, where an error's position
    /// decides which handler and reraise entries apply.
    #[inline]
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` if the selector intercepts every error.
    pub fn is_universal(&self) -> bool {
        match self {
            Self::Universal => true,
            Self::Single(kind) => kind.is_universal(),
            Self::Sequence(_) => false,
        }
    }

    /// Number of configured kinds. The universal selector counts as one.
    pub fn len(&self) -> usize {
        match self {
            Self::Universal | Self::Single(_) => 1,
            Self::Sequence(kinds) => kinds.len(),
        }
    }

    /// Returns `true` for an empty sequence, the only selector that
    /// intercepts nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Sequence(kinds) if kinds.is_empty())
    }

    /// The configured kinds in order. The universal selector yields the
    /// universal kind.
    pub fn kinds(&self) -> KindVec {
        match self {
            Self::Universal => KindVec::from_iter([ErrorKind::universal()]),
            Self::Single(kind) => KindVec::from_iter([*kind]),
            Self::Sequence(kinds) => kinds.clone(),
        }
    }

    /// Returns `true` if the selector intercepts `error`.
    pub fn matches(&self, error: &(dyn Error + 'static)) -> bool {
        match self {
            Self::Universal => true,
            Self::Single(kind) => kind.matches(error),
            Self::Sequence(kinds) => kinds.iter().any(|kind| kind.matches(error)),
        }
    }

    /// Index of `error` within the selector.
    ///
    /// Universal and single-kind selectors always answer `0`. For a sequence
    /// the first entry of exactly the error's kind wins; an error caught only
    /// through a universal entry takes that entry's position. An error with
    /// no position at all maps to `0`, the same slot a universal selector
    /// uses.
    pub fn position(&self, error: &(dyn Error + 'static)) -> usize {
        match self {
            Self::Universal | Self::Single(_) => 0,
            Self::Sequence(kinds) => kinds
                .iter()
                .position(|kind| kind.is_exact(error))
                .or_else(|| kinds.iter().position(ErrorKind::is_universal))
                .unwrap_or(0),
        }
    }
}

impl From<ErrorKind> for Selector {
    fn from(kind: ErrorKind) -> Self {
        Self::Single(kind)
    }
}

impl From<KindVec> for Selector {
    fn from(kinds: KindVec) -> Self {
        Self::Sequence(kinds)
    }
}

impl<const N: usize> From<[ErrorKind; N]> for Selector {
    fn from(kinds: [ErrorKind; N]) -> Self {
        Self::from_kinds(kinds)
    }
}

impl FromIterator<ErrorKind> for Selector {
    fn from_iter<I: IntoIterator<Item = ErrorKind>>(iter: I) -> Self {
        Self::from_kinds(iter)
    }
}
