use core::any::{type_name, TypeId};
use core::error::Error;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::types::DynError;

/// Identity of an error type, used to decide which errors a policy intercepts.
///
/// A kind is either a concrete error type (created with [`ErrorKind::of`]) or
/// the universal kind (created with [`ErrorKind::universal`]), which matches
/// every error.
///
/// Matching a concrete kind is exact type identity: an error boxed as
/// `Box<dyn Error + Send + Sync>` matches the kind of the value inside the box.
///
/// # Examples
///
/// ```
/// use error_policy::{BoxError, ErrorKind};
///
/// let kind = ErrorKind::of::<core::num::ParseIntError>();
/// let err: BoxError = "x".parse::<i32>().unwrap_err().into();
///
/// assert!(kind.matches(&*err));
/// assert!(ErrorKind::universal().matches(&*err));
/// assert!(!ErrorKind::of::<core::fmt::Error>().matches(&*err));
/// ```
#[derive(Clone, Copy)]
pub struct ErrorKind {
    id: TypeId,
    name: &'static str,
    matcher: fn(&(dyn Error + 'static)) -> bool,
}

fn match_any(_: &(dyn Error + 'static)) -> bool {
    true
}

impl ErrorKind {
    /// Kind of the concrete error type `E`.
    #[inline]
    pub fn of<E>() -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { id: TypeId::of::<E>(), name: type_name::<E>(), matcher: |error| error.is::<E>() }
    }

    /// The kind that matches every error.
    #[inline]
    pub fn universal() -> Self {
        Self { id: TypeId::of::<DynError>(), name: "any error", matcher: match_any }
    }

    /// Returns `true` for the universal kind.
    #[inline]
    pub fn is_universal(&self) -> bool {
        self.id == TypeId::of::<DynError>()
    }

    /// Type name of the error, or `"any error"` for the universal kind.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if `error` belongs to this kind.
    #[inline]
    pub fn matches(&self, error: &(dyn Error + 'static)) -> bool {
        (self.matcher)(error)
    }

    /// Returns `true` if `error` is exactly this concrete kind.
    ///
    /// Always `false` for the universal kind, which is a category rather than
    /// an identity.
    #[inline]
    pub fn is_exact(&self, error: &(dyn Error + 'static)) -> bool {
        !self.is_universal() && self.matches(error)
    }
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::universal()
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorKind {}

impl Hash for ErrorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorKind").field(&self.name).finish()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
