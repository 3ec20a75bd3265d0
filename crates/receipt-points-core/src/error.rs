//! Error types for Receipt Points Core.

use thiserror::Error;

/// Validation errors for submitted receipts.
///
/// Every variant describes input the caller must correct; none of them
/// indicate a defect in the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("receipt must contain at least one item")]
    NoItems,

    #[error("item {0} has an empty shortDescription")]
    EmptyItemDescription(usize),

    #[error("invalid amount {value:?}: {reason}")]
    InvalidAmount { value: String, reason: &'static str },

    #[error("invalid purchaseDate {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid purchaseTime {0:?}: expected HH:MM")]
    InvalidTime(String),

    #[error("receipt points exceed the representable maximum of {}", u64::MAX)]
    PointsOutOfRange,

    #[error("malformed receipt: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        ValidationError::Malformed(e.to_string())
    }
}
