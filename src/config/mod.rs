//! Loosely-typed policy configuration.
//!
//! Policies described in configuration files arrive as untyped values: kind
//! and handler names, booleans, lists. [`PolicyConfig::build`] resolves the
//! names against a [`Registry`] and validates every value. Anything it cannot
//! make sense of resets the whole policy to the default instead of producing
//! a half-configured one.
//!
//! With the `serde` feature, [`PolicyConfig`] and [`ConfigValue`] implement
//! `Deserialize` and `Serialize`.
//!
//! # Examples
//!
//! ```
//! use core::num::ParseIntError;
//!
//! use error_policy::config::{ConfigValue, PolicyConfig, Registry};
//! use error_policy::Handler;
//!
//! let registry = Registry::new()
//!     .with_kind::<ParseIntError>("ParseIntError")
//!     .with_handler("ignore", Handler::new(|_| {}));
//!
//! let config = PolicyConfig {
//!     errors: ConfigValue::from("ParseIntError"),
//!     handlers: ConfigValue::from("ignore"),
//!     reraise: ConfigValue::Bool(false),
//! };
//! let policy = config.build(&registry);
//! assert!(!policy.is_reset());
//!
//! let broken = PolicyConfig { reraise: ConfigValue::from("no"), ..config };
//! assert!(broken.build(&registry).is_default());
//! ```

mod registry;
mod value;

pub use registry::{Registry, UNIVERSAL_KIND};
pub use value::ConfigValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::Policy;
use crate::types::alloc_type::Vec;
use crate::types::{ConfigField, HandlerSpec, KindVec, ReraiseSpec, Selector, ValidationIssue};

/// Untyped description of a policy.
///
/// Every field defaults to [`ConfigValue::Null`], which selects the default
/// for that part of the policy.
///
/// | field      | accepted values                                             |
/// |------------|-------------------------------------------------------------|
/// | `errors`   | null, a kind name, a list of kind names                     |
/// | `handlers` | null, a handler name, a list of handler names or nulls      |
/// | `reraise`  | null, a boolean, a non-empty list of booleans               |
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolicyConfig {
    /// Error kinds to intercept.
    #[cfg_attr(feature = "serde", serde(default))]
    pub errors: ConfigValue,
    /// Handlers to invoke.
    #[cfg_attr(feature = "serde", serde(default))]
    pub handlers: ConfigValue,
    /// Whether intercepted errors keep propagating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reraise: ConfigValue,
}

impl PolicyConfig {
    /// Resolves names against `registry` and builds the policy.
    ///
    /// Never fails: an invalid configuration yields the default policy with
    /// the reason available through [`Policy::validation_issue`].
    pub fn build(&self, registry: &Registry) -> Policy {
        match self.resolve(registry) {
            Ok((selector, handlers, reraise)) => Policy::new(selector, handlers, reraise),
            Err(issue) => Policy::reset(issue),
        }
    }

    fn resolve(
        &self,
        registry: &Registry,
    ) -> Result<(Selector, HandlerSpec, ReraiseSpec), ValidationIssue> {
        Ok((selector(&self.errors, registry)?, handlers(&self.handlers, registry)?, reraise(&self.reraise)?))
    }
}

fn selector(value: &ConfigValue, registry: &Registry) -> Result<Selector, ValidationIssue> {
    let field = ConfigField::Errors;
    match value {
        ConfigValue::Null => Ok(Selector::Universal),
        ConfigValue::Text(name) => registry.resolve_kind(name).map(Selector::Single),
        ConfigValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                ConfigValue::Text(name) => registry.resolve_kind(name),
                other => Err(ValidationIssue::InvalidElement { field, index, found: other.type_name() }),
            })
            .collect::<Result<KindVec, _>>()
            .map(Selector::Sequence),
        other => Err(ValidationIssue::InvalidShape { field, found: other.type_name() }),
    }
}

fn handlers(value: &ConfigValue, registry: &Registry) -> Result<HandlerSpec, ValidationIssue> {
    let field = ConfigField::Handlers;
    match value {
        ConfigValue::Null => Ok(HandlerSpec::None),
        ConfigValue::Text(name) => registry.resolve_handler(name).map(HandlerSpec::Single),
        ConfigValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                ConfigValue::Null => Ok(None),
                ConfigValue::Text(name) => registry.resolve_handler(name).map(Some),
                other => Err(ValidationIssue::InvalidElement { field, index, found: other.type_name() }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(HandlerSpec::Sequence),
        other => Err(ValidationIssue::InvalidShape { field, found: other.type_name() }),
    }
}

fn reraise(value: &ConfigValue) -> Result<ReraiseSpec, ValidationIssue> {
    let field = ConfigField::Reraise;
    match value {
        ConfigValue::Null => Ok(ReraiseSpec::default()),
        ConfigValue::Bool(flag) => Ok(ReraiseSpec::Single(*flag)),
        ConfigValue::List(items) if items.is_empty() => Err(ValidationIssue::EmptyReraise),
        ConfigValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                ConfigValue::Bool(flag) => Ok(*flag),
                other => Err(ValidationIssue::InvalidElement { field, index, found: other.type_name() }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ReraiseSpec::Sequence),
        other => Err(ValidationIssue::InvalidShape { field, found: other.type_name() }),
    }
}
