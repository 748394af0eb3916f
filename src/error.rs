use std::num::ParseFloatError;

use thiserror::Error;

/// Top-level error type for planimetry.
#[derive(Debug, Error)]
pub enum PlanimetryError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors from reading the whitespace-separated text format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid scalar {token:?}")]
    InvalidScalar {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unexpected trailing input {token:?}")]
    TrailingInput { token: String },
}

/// Convenience type alias for results using [`PlanimetryError`].
pub type Result<T> = std::result::Result<T, PlanimetryError>;
