//! Store trait: the abstract interface for scored receipt storage.
//!
//! This trait keeps the processor storage-agnostic. The shipped
//! implementation is in-memory; anything keyed by [`ReceiptId`] fits.

use async_trait::async_trait;
use receipt_points_core::{ReceiptId, ScoredReceipt};

use crate::error::Result;

/// Result of inserting a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// No record existed under this id.
    Inserted,
    /// A record existed under this id and was overwritten.
    Replaced,
}

/// The Store trait: async interface for scored receipt storage.
///
/// # Design Notes
///
/// - **Overwrite on identical id**: the store is a mapping from id to record.
/// - **Atomic records**: a reader observes either no record or a complete one.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a record under `id`, replacing any existing record.
    async fn insert_receipt(&self, id: ReceiptId, record: ScoredReceipt) -> Result<InsertResult>;

    /// Get a record by its content-derived id.
    async fn get_receipt(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>>;

    /// Number of distinct records held.
    async fn count(&self) -> Result<usize>;
}

/// Extension trait for common store patterns.
pub trait StoreExt: Store {
    /// Get only the points stored for `id`.
    fn get_points(
        &self,
        id: &ReceiptId,
    ) -> impl std::future::Future<Output = Result<Option<u64>>> + Send;
}

impl<S: Store + ?Sized> StoreExt for S {
    async fn get_points(&self, id: &ReceiptId) -> Result<Option<u64>> {
        Ok(self.get_receipt(id).await?.map(|record| record.points))
    }
}
