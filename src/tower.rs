//! Tower integration for error-policy.
//!
//! This module provides Tower `Layer` and `Service` implementations
//! that apply a [`Policy`] to the errors of a wrapped service.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-policy = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_policy::tower::PolicyLayer;
//! use error_policy::Policy;
//! use tower::ServiceBuilder;
//!
//! let policy = Policy::builder().catch::<NotFound>().reraise(false).build();
//!
//! let service = ServiceBuilder::new()
//!     .layer(PolicyLayer::new(policy))
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::policy::Policy;
use crate::types::alloc_type::Arc;
use crate::types::{BoxError, PolicyResult};

/// A Tower [`Layer`] that applies a [`Policy`] to service errors.
///
/// Responses become `Option<Response>`: `None` means the service failed and
/// the policy suppressed the error.
#[derive(Clone, Debug)]
pub struct PolicyLayer {
    policy: Arc<Policy>,
}

impl PolicyLayer {
    /// Creates a new `PolicyLayer` with the given policy.
    #[inline]
    pub fn new(policy: Policy) -> Self {
        Self { policy: Arc::new(policy) }
    }

    /// Returns a reference to the policy.
    #[inline]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl<S> Layer<S> for PolicyLayer {
    type Service = PolicyService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        PolicyService { inner, policy: Arc::clone(&self.policy) }
    }
}

/// A Tower [`Service`] that applies a [`Policy`] to the errors of its inner
/// service.
///
/// This is created by [`PolicyLayer`]. Errors from `poll_ready` bypass the
/// policy.
#[derive(Clone, Debug)]
pub struct PolicyService<S> {
    inner: S,
    policy: Arc<Policy>,
}

impl<S> PolicyService<S> {
    /// Creates a new `PolicyService` wrapping the given service.
    #[inline]
    pub fn new(inner: S, policy: Policy) -> Self {
        Self { inner, policy: Arc::new(policy) }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Returns a reference to the policy.
    #[inline]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl<S, Request> Service<Request> for PolicyService<S>
where
    S: Service<Request>,
    S::Error: Into<BoxError>,
{
    type Response = Option<S::Response>;
    type Error = BoxError;
    type Future = PolicyFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        PolicyFuture::new(self.inner.call(request), Arc::clone(&self.policy))
    }
}

pin_project! {
    /// Future returned by [`PolicyService`].
    ///
    /// Wraps the inner service's future and applies the policy on error.
    #[must_use = "futures do nothing unless polled"]
    pub struct PolicyFuture<F> {
        #[pin]
        inner: F,
        policy: Option<Arc<Policy>>,
    }
}

impl<F> PolicyFuture<F> {
    /// Creates a new `PolicyFuture` with the given inner future and policy.
    #[inline]
    fn new(inner: F, policy: Arc<Policy>) -> Self {
        Self { inner, policy: Some(policy) }
    }
}

impl<F, T, E> Future for PolicyFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = PolicyResult<T>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(result) => match this.policy.take() {
                Some(policy) => Poll::Ready(policy.handle(result)),
                // polled after completion: nothing left to apply
                None => Poll::Ready(result.map(Some).map_err(Into::into)),
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E> FusedFuture for PolicyFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.policy.is_none() || self.inner.is_terminated()
    }
}

/// Extension trait for easily wrapping services with a policy.
pub trait ServicePolicyExt<Request>: Service<Request> + Sized {
    /// Wraps this service so its errors go through `policy`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_policy::tower::ServicePolicyExt;
    ///
    /// let wrapped = my_service.with_policy(Policy::builder().reraise(false).build());
    /// ```
    fn with_policy(self, policy: Policy) -> PolicyService<Self>
    where
        Self::Error: Into<BoxError>,
    {
        PolicyService::new(self, policy)
    }
}

impl<S, Request> ServicePolicyExt<Request> for S where S: Service<Request> {}
