//! The Processor: unified API over validation, scoring and storage.
//!
//! Validation happens here, once, before a receipt reaches the scoring
//! engine or the store. Neither of those re-validates.

use tracing::{debug, info, warn};

use receipt_points_core::{
    score_breakdown, validate_receipt, Receipt, ReceiptId, ScoredReceipt, ValidationError,
};
use receipt_points_store::{InsertResult, Store, StoreExt};

use crate::error::{PointsError, Result};

/// The main Processor struct.
///
/// Provides a unified API for:
/// - Submitting receipts (validate, identify, score, store)
/// - Looking up the points of a submitted receipt
/// - Retrieving full stored records
pub struct Processor<S: Store> {
    /// The storage backend.
    store: S,
}

impl<S: Store> Processor<S> {
    /// Create a new processor over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Submit a receipt and return its identifier.
    ///
    /// Resubmitting identical content returns the same identifier and
    /// overwrites the earlier record with an identical one.
    pub async fn submit(&self, receipt: Receipt) -> Result<ReceiptId> {
        if let Err(e) = validate_receipt(&receipt) {
            warn!(error = %e, "rejected receipt");
            return Err(e.into());
        }

        let id = receipt.compute_id();
        let breakdown = score_breakdown(&receipt);
        let points = breakdown.total();
        debug!(receipt_id = ?id, ?breakdown, "scored receipt");

        let retailer = receipt.retailer.clone();
        match self
            .store
            .insert_receipt(id, ScoredReceipt { receipt, points })
            .await?
        {
            InsertResult::Inserted => {
                info!(receipt_id = ?id, %retailer, points, "accepted receipt");
            }
            InsertResult::Replaced => {
                debug!(receipt_id = ?id, "receipt resubmitted");
            }
        }

        Ok(id)
    }

    /// Parse a receipt from its JSON wire form, then [`submit`](Self::submit) it.
    pub async fn submit_json(&self, json: &str) -> Result<ReceiptId> {
        let receipt: Receipt = serde_json::from_str(json).map_err(|e| {
            let e = ValidationError::from(e);
            warn!(error = %e, "rejected receipt");
            e
        })?;
        self.submit(receipt).await
    }

    /// Look up the points stored for `id`.
    pub async fn lookup(&self, id: &ReceiptId) -> Result<u64> {
        self.store
            .get_points(id)
            .await?
            .ok_or(PointsError::NotFound(*id))
    }

    /// Get the full stored record for `id`.
    pub async fn get_receipt(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>> {
        Ok(self.store.get_receipt(id).await?)
    }

    /// Number of distinct receipts stored.
    pub async fn len(&self) -> Result<usize> {
        Ok(self.store.count().await?)
    }

    /// Whether no receipt has been stored yet.
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::compute_points;
    use receipt_points_store::MemoryStore;

    const CORNER_MARKET: &str = r#"{
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    }"#;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }

    fn processor() -> Processor<MemoryStore> {
        init_tracing();
        Processor::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn test_submit_then_lookup() {
        let processor = processor();

        let id = processor.submit_json(CORNER_MARKET).await.unwrap();
        assert_eq!(id.to_hex().len(), 64);
        assert_eq!(processor.lookup(&id).await.unwrap(), 109);
    }

    #[tokio::test]
    async fn test_lookup_matches_compute_points() {
        let processor = processor();
        let receipt: Receipt = serde_json::from_str(CORNER_MARKET).unwrap();
        let expected = compute_points(&receipt);

        let id = processor.submit(receipt.clone()).await.unwrap();
        assert_eq!(processor.lookup(&id).await.unwrap(), expected);

        let record = processor.get_receipt(&id).await.unwrap().unwrap();
        assert_eq!(record.receipt, receipt);
        assert_eq!(record.points, expected);
    }

    #[tokio::test]
    async fn test_identical_submissions_share_id() {
        let processor = processor();

        let id1 = processor.submit_json(CORNER_MARKET).await.unwrap();
        let id2 = processor.submit_json(CORNER_MARKET).await.unwrap();

        assert_eq!(id1, id2);
        assert_eq!(processor.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_field_order_in_json_does_not_change_id() {
        let processor = processor();
        let reordered = r#"{
            "total": "9.00",
            "items": [
                {"price": "2.25", "shortDescription": "Gatorade"},
                {"price": "2.25", "shortDescription": "Gatorade"},
                {"price": "2.25", "shortDescription": "Gatorade"},
                {"price": "2.25", "shortDescription": "Gatorade"}
            ],
            "purchaseTime": "14:33",
            "purchaseDate": "2022-03-20",
            "retailer": "M&M Corner Market"
        }"#;

        let id1 = processor.submit_json(CORNER_MARKET).await.unwrap();
        let id2 = processor.submit_json(reordered).await.unwrap();
        assert_eq!(id1, id2);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let processor = processor();
        let id = ReceiptId::from_bytes([0x42; 32]);

        let err = processor.lookup(&id).await.unwrap_err();
        assert!(matches!(err, PointsError::NotFound(missing) if missing == id));
        assert!(processor.get_receipt(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_not_stored() {
        let processor = processor();
        let no_items = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "0.00",
            "items": []
        }"#;

        let err = processor.submit_json(no_items).await.unwrap_err();
        assert!(matches!(
            err,
            PointsError::Validation(ValidationError::NoItems)
        ));
        assert!(processor.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let processor = processor();

        let err = processor.submit_json("{not json").await.unwrap_err();
        assert!(matches!(
            err,
            PointsError::Validation(ValidationError::Malformed(_))
        ));
    }
}
