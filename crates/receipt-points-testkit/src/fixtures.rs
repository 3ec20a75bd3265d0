//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use receipt_points::{Processor, Result};
use receipt_points_core::{Amount, LineItem, Receipt, ReceiptId};
use receipt_points_store::MemoryStore;

use crate::vectors::{receipt_from_vector, ScoreVector};

/// A test fixture with a processor over a fresh memory store.
pub struct TestFixture {
    pub processor: Processor<MemoryStore>,
}

impl TestFixture {
    /// Create a new test fixture with an empty store.
    pub fn new() -> Self {
        Self {
            processor: Processor::new(MemoryStore::new()),
        }
    }

    /// Submit the receipt a scoring vector describes.
    pub async fn submit_vector(&self, vector: &ScoreVector) -> Result<ReceiptId> {
        let receipt = receipt_from_vector(vector)?;
        self.processor.submit(receipt).await
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a receipt from string fields, with the total set to the item sum.
///
/// Panics on malformed date, time or price; intended for tests only.
pub fn make_receipt(retailer: &str, date: &str, time: &str, items: &[(&str, &str)]) -> Receipt {
    let items: Vec<LineItem> = items
        .iter()
        .map(|(desc, price)| LineItem::new(*desc, price.parse().expect("valid price")))
        .collect();
    let total = Amount::from_cents(items.iter().map(|item| item.price.cents()).sum());

    Receipt {
        retailer: retailer.to_string(),
        purchase_date: date.parse().expect("valid date"),
        purchase_time: time.parse().expect("valid time"),
        total,
        items,
    }
}
