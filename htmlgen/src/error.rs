//! Error type shared by the element model and the element catalogue.

use std::fmt;

/// Error returned by fallible element and generator operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A child that was asked to be removed is not present.
    ChildNotFound,

    /// A `data-` attribute lookup or removal missed.
    KeyNotFound {
        /// The key, without the `data-` prefix.
        key: String,
    },

    /// No candidate carries the requested value.
    ValueNotFound {
        /// The value that was looked for.
        value: String,
    },

    /// A value falls outside the range its property allows.
    OutOfRange {
        /// The property being set.
        name: &'static str,
        /// What the range is.
        reason: String,
    },

    /// A value is malformed for its property.
    InvalidValue {
        /// The property being set.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildNotFound => write!(f, "child not found"),
            Self::KeyNotFound { key } => write!(f, "data key not found: {key}"),
            Self::ValueNotFound { value } => write!(f, "value not found: {value}"),
            Self::OutOfRange { name, reason } => write!(f, "{name} out of range: {reason}"),
            Self::InvalidValue {
                name,
                value,
                reason,
            } => write!(f, "invalid {name} {value:?}: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
