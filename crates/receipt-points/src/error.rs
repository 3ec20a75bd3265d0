//! Error types for the processor.

use receipt_points_core::{ReceiptId, ValidationError};
use receipt_points_store::StoreError;
use thiserror::Error;

/// Errors that can occur while submitting or looking up receipts.
#[derive(Debug, Error)]
pub enum PointsError {
    /// The submitted receipt is malformed. The caller must correct it.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage failure. Indicates a defect, not bad input.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// No receipt was ever submitted under this id.
    #[error("receipt not found: {0}")]
    NotFound(ReceiptId),
}

/// Result type for processor operations.
pub type Result<T> = std::result::Result<T, PointsError>;
