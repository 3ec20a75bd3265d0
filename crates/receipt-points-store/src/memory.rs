//! In-memory implementation of the Store trait.
//!
//! Records live for as long as the store does. Nothing is written on drop
//! and nothing is loaded on construction.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use receipt_points_core::{ReceiptId, ScoredReceipt};

use crate::error::Result;
use crate::traits::{InsertResult, Store};

/// In-memory store implementation.
///
/// Thread-safe via a single RwLock over the whole map.
pub struct MemoryStore {
    records: RwLock<HashMap<ReceiptId, ScoredReceipt>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_receipt(&self, id: ReceiptId, record: ScoredReceipt) -> Result<InsertResult> {
        let mut records = self.records.write()?;

        let result = match records.insert(id, record) {
            Some(_) => InsertResult::Replaced,
            None => InsertResult::Inserted,
        };

        debug!(receipt_id = ?id, ?result, total = records.len(), "stored receipt");
        Ok(result)
    }

    async fn get_receipt(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>> {
        let records = self.records.read()?;
        Ok(records.get(id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        let records = self.records.read()?;
        Ok(records.len())
    }
}
