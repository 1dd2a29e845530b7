use core::fmt;

use crate::types::alloc_type::String;

/// The part of a policy configuration an issue was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// The error-kind selector.
    Errors,
    /// The handler specification.
    Handlers,
    /// The reraise specification.
    Reraise,
}

impl ConfigField {
    /// Name of the field as it appears in a configuration document.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConfigField::Errors => "errors",
            ConfigField::Handlers => "handlers",
            ConfigField::Reraise => "reraise",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a configuration was rejected and replaced with the default policy.
///
/// A rejected configuration never fails construction. The policy degrades to
/// "intercept everything, no handler, always propagate", and the issue stays
/// available through [`Policy::validation_issue`](crate::Policy::validation_issue).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A kind name is not present in the registry.
    UnknownKind { name: String },
    /// A handler name is not present in the registry.
    UnknownHandler { name: String },
    /// The field holds a value of the wrong shape.
    InvalidShape { field: ConfigField, found: &'static str },
    /// A list element of the field holds a value of the wrong type.
    InvalidElement { field: ConfigField, index: usize, found: &'static str },
    /// The reraise list is empty, leaving nothing to resolve to.
    EmptyReraise,
}

impl ValidationIssue {
    /// The configuration field the issue belongs to.
    pub const fn field(&self) -> ConfigField {
        match self {
            ValidationIssue::UnknownKind { .. } => ConfigField::Errors,
            ValidationIssue::UnknownHandler { .. } => ConfigField::Handlers,
            ValidationIssue::InvalidShape { field, .. }
            | ValidationIssue::InvalidElement { field, .. } => *field,
            ValidationIssue::EmptyReraise => ConfigField::Reraise,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::UnknownKind { name } => write!(f, "unknown error kind '{}'", name),
            ValidationIssue::UnknownHandler { name } => write!(f, "unknown handler '{}'", name),
            ValidationIssue::InvalidShape { field, found } => {
                write!(f, "{}: unsupported value of type {}", field, found)
            },
            ValidationIssue::InvalidElement { field, index, found } => {
                write!(f, "{}[{}]: unsupported element of type {}", field, index, found)
            },
            ValidationIssue::EmptyReraise => f.write_str("reraise: empty list"),
        }
    }
}

impl core::error::Error for ValidationIssue {}
