//! # Receipt Points
//!
//! The unified API for Receipt Points: accept a purchase receipt, score it
//! once, and answer point lookups by content-derived identifier.
//!
//! ## Key Concepts
//!
//! - **Receipt**: Immutable. Identified by a hash of its content.
//! - **Points**: Computed exactly once, at submission, under a fixed rule set.
//! - **Store**: A mapping from identifier to scored receipt. Resubmitting the
//!   same content overwrites rather than duplicates.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points::Processor;
//! use receipt_points::store::MemoryStore;
//!
//! async fn example(json: &str) {
//!     let processor = Processor::new(MemoryStore::new());
//!
//!     let id = processor.submit_json(json).await.unwrap();
//!     let points = processor.lookup(&id).await.unwrap();
//!     println!("{id}: {points} points");
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Receipts, scoring rules, identifiers
//! - `receipt_points::store` - Storage abstraction and in-memory store

pub mod error;
pub mod processor;

// Re-export component crates
pub use receipt_points_core as core;
pub use receipt_points_store as store;

pub use error::{PointsError, Result};
pub use processor::Processor;

// Re-export commonly used core types
pub use receipt_points_core::{
    compute_points, score_breakdown, Amount, LineItem, PointsBreakdown, PurchaseDate,
    PurchaseTime, Receipt, ReceiptId, ScoredReceipt, ValidationError,
};
