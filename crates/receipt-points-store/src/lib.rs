//! # Receipt Points Store
//!
//! Storage abstraction for Receipt Points. Provides a trait-based interface
//! for keeping scored receipts, with an in-memory implementation.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`MemoryStore`] - In-memory storage, lives as long as the process
//! - [`InsertResult`] - Result of inserting a record
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points_core::{compute_points, parse_receipt, ScoredReceipt};
//! use receipt_points_store::{MemoryStore, Store};
//!
//! async fn example(json: &str) {
//!     let store = MemoryStore::new();
//!
//!     let receipt = parse_receipt(json).unwrap();
//!     let id = receipt.compute_id();
//!     let points = compute_points(&receipt);
//!
//!     store
//!         .insert_receipt(id, ScoredReceipt { receipt, points })
//!         .await
//!         .unwrap();
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Mapping, not a log**: inserting under an existing id replaces the record
//!   and reports `Replaced`. Ids are content-derived, so the replacement is
//!   identical to what it overwrites.
//! - **Single lock**: the whole map sits behind one `RwLock`; readers never see
//!   a partially written record.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{InsertResult, Store, StoreExt};
