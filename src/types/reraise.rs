use crate::types::alloc_type::Vec;
use crate::types::aligned;

/// Whether an intercepted error keeps propagating after its handler ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReraiseSpec {
    /// One decision for every intercepted error.
    Single(bool),
    /// Decisions aligned with the selector sequence. Must not be empty.
    Sequence(Vec<bool>),
}

impl Default for ReraiseSpec {
    fn default() -> Self {
        Self::Single(true)
    }
}

impl ReraiseSpec {
    /// Decision for the error found at `index` of a non-empty selector.
    ///
    /// A sequence shorter than `index + 1` falls back to its last entry, and
    /// an empty sequence propagates.
    pub fn resolve(&self, index: usize) -> bool {
        match self {
            Self::Single(reraise) => *reraise,
            Self::Sequence(flags) => aligned(flags, index).copied().unwrap_or(true),
        }
    }

    /// Decision used when the selector is an empty sequence: the last entry.
    pub(crate) fn resolve_unindexed(&self) -> bool {
        match self {
            Self::Single(reraise) => *reraise,
            Self::Sequence(flags) => flags.last().copied().unwrap_or(true),
        }
    }
}

impl From<bool> for ReraiseSpec {
    fn from(reraise: bool) -> Self {
        Self::Single(reraise)
    }
}

impl From<Vec<bool>> for ReraiseSpec {
    fn from(flags: Vec<bool>) -> Self {
        Self::Sequence(flags)
    }
}

impl<const N: usize> From<[bool; N]> for ReraiseSpec {
    fn from(flags: [bool; N]) -> Self {
        Self::Sequence(flags.into())
    }
}

impl FromIterator<bool> for ReraiseSpec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}
