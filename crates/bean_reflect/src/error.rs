use thiserror::Error;

use crate::ValueError;

/// A failure raised by a single generated accessor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Bean type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Bean type `{type_path}` has no parent type")]
    MissingParent { type_path: &'static str },
    #[error("Property `{property}` has no getter")]
    NotReadable { property: &'static str },
    #[error("Property `{property}` has no setter")]
    NotWritable { property: &'static str },
    #[error("Property `{property}` cannot take the given value")]
    Conversion {
        property: &'static str,
        #[source]
        source: ValueError,
    },
    #[error("Accessor of property `{property}` failed: {reason}")]
    Failed {
        property: &'static str,
        reason: String,
    },
}

/// Errors returned by the operations of a [`BeanContext`](crate::BeanContext).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeanError {
    #[error("Property name must not be blank")]
    BlankPropertyName,
    #[error("Cannot compare beans of different types: `{origin}` and `{target}`")]
    MismatchedTypes {
        origin: &'static str,
        target: &'static str,
    },
    #[error("Failed to read `{type_path}.{property}`")]
    Read {
        type_path: &'static str,
        property: &'static str,
        #[source]
        source: AccessError,
    },
    #[error("Failed to write `{type_path}.{property}`")]
    Write {
        type_path: &'static str,
        property: &'static str,
        #[source]
        source: AccessError,
    },
    #[error("Cannot instantiate `{type_path}`: {reason}")]
    Instantiation {
        type_path: &'static str,
        reason: &'static str,
    },
}
