//! Receipt validation: structural checks performed once, at the boundary.
//!
//! Field grammar (amounts, dates, times) is enforced while deserializing.
//! [`validate_receipt`] covers the rules serde cannot express.

use crate::error::ValidationError;
use crate::receipt::Receipt;
use crate::scoring::checked_points;

/// Validate a receipt's structure.
///
/// This performs:
/// - Retailer non-empty check
/// - At-least-one-item check
/// - Per-item description non-empty check
/// - Score representability check (the points must fit in a `u64`)
///
/// The total is not reconciled against the item prices.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ValidationError> {
    if receipt.retailer.trim().is_empty() {
        return Err(ValidationError::EmptyField("retailer"));
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    if let Some(index) = receipt
        .items
        .iter()
        .position(|item| item.short_description.trim().is_empty())
    {
        return Err(ValidationError::EmptyItemDescription(index));
    }

    if checked_points(receipt).is_none() {
        return Err(ValidationError::PointsOutOfRange);
    }

    Ok(())
}

/// Parse a receipt from its JSON wire form and validate it.
pub fn parse_receipt(json: &str) -> Result<Receipt, ValidationError> {
    let receipt: Receipt = serde_json::from_str(json)?;
    validate_receipt(&receipt)?;
    Ok(receipt)
}
