use thiserror::Error;

/// Failure to convert a [`Value`](super::Value) into a concrete type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value's variant cannot represent the target type.
    #[error("expected {expected}, found {found}")]
    Mismatched {
        expected: &'static str,
        found: &'static str,
    },
    /// A numeric value does not fit the target type.
    #[error("value {value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: String },
    /// The value has the right shape but its content cannot be parsed.
    #[error("cannot parse {value:?} as {target}")]
    Invalid { target: &'static str, value: String },
}
