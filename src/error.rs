//! Error definitions for the crate.

/// Errors returned by the fallible [`BigInt`](crate::BigInt) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// The input text is not an optional `-` followed by decimal digits.
    #[error("invalid input format: {0}")]
    InvalidFormat(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("negative exponents are not supported")]
    NegativeExponent,
}

pub type BigIntResult<T> = Result<T, BigIntError>;

/// Convenience alias for tests that want to use `?` on fallible operations.
pub type BigIntTestResult = Result<(), BigIntError>;
