use crate::policy::Policy;
use crate::traits::Operation;
use crate::types::{BoxError, PolicyResult};

/// An operation wrapped by a [`Policy`].
///
/// Calling it runs the operation with the same arguments (passed as a tuple)
/// and applies the policy to whatever error comes out.
///
/// # Examples
///
/// ```
/// use core::num::ParseIntError;
///
/// use error_policy::Policy;
///
/// let add = Policy::builder()
///     .catch::<ParseIntError>()
///     .reraise(false)
///     .build()
///     .wrap(|a: &str, b: &str| Ok::<_, ParseIntError>(a.parse::<i32>()? + b.parse::<i32>()?));
///
/// assert_eq!(add.call(("2", "3")).unwrap(), Some(5));
/// assert_eq!(add.call(("2", "x")).unwrap(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Guarded<F> {
    policy: Policy,
    inner: F,
}

impl<F> Guarded<F> {
    /// Wraps `inner` with `policy`.
    #[inline]
    pub const fn new(policy: Policy, inner: F) -> Self {
        Self { policy, inner }
    }

    /// Returns a reference to the policy.
    #[inline]
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Returns a reference to the wrapped operation.
    #[inline]
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    /// Consumes the wrapper and returns the wrapped operation.
    #[inline]
    pub fn into_inner(self) -> F {
        self.inner
    }

    /// Calls the operation and applies the policy to its result.
    #[inline]
    pub fn call<Args>(&self, args: Args) -> PolicyResult<F::Output>
    where
        F: Operation<Args>,
        F::Error: Into<BoxError>,
    {
        self.policy.handle(self.inner.invoke(args))
    }

    /// Turns the wrapper into a plain closure taking the argument tuple.
    pub fn into_fn<Args>(self) -> impl Fn(Args) -> PolicyResult<F::Output>
    where
        F: Operation<Args>,
        F::Error: Into<BoxError>,
    {
        move |args| self.call(args)
    }
}

impl Policy {
    /// Wraps `op` so every call goes through this policy.
    ///
    /// The policy is cloned into the wrapper; handlers are shared, not
    /// duplicated.
    #[inline]
    pub fn wrap<F>(&self, op: F) -> Guarded<F> {
        Guarded::new(self.clone(), op)
    }
}
