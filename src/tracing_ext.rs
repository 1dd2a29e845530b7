//! Tracing integration for error-policy.
//!
//! Policies never log on their own. This module supplies a ready-made
//! [`Handler`] that records intercepted errors as `tracing` events, for
//! callers who want the policy itself to be the place errors get reported.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-policy = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Level;

use crate::types::{DynError, Handler};

/// Returns a handler that records every error it receives as an event at
/// `level`, labelled `"trace:<level>"`.
///
/// # Example
///
/// ```rust,ignore
/// use error_policy::tracing_ext::traced_handler;
/// use error_policy::Policy;
/// use tracing::Level;
///
/// let policy = Policy::builder()
///     .handler(traced_handler(Level::WARN))
///     .reraise(false)
///     .build();
/// ```
pub fn traced_handler(level: Level) -> Handler {
    let label = alloc::format!("trace:{}", level).to_ascii_lowercase();
    Handler::new(move |error| record(level, error)).with_label(label)
}

fn record(level: Level, error: &DynError) {
    if level == Level::ERROR {
        tracing::error!(error = %error, "error intercepted by policy");
    } else if level == Level::WARN {
        tracing::warn!(error = %error, "error intercepted by policy");
    } else if level == Level::INFO {
        tracing::info!(error = %error, "error intercepted by policy");
    } else if level == Level::DEBUG {
        tracing::debug!(error = %error, "error intercepted by policy");
    } else {
        tracing::trace!(error = %error, "error intercepted by policy");
    }
}
