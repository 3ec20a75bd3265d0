//! # Receipt Points Core
//!
//! Pure primitives for Receipt Points: receipts, the scoring rules, and
//! content-derived identifiers.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over validated receipt data.
//!
//! ## Key Types
//!
//! - [`Receipt`] - A submitted purchase receipt
//! - [`LineItem`] - One purchased product on a receipt
//! - [`ReceiptId`] - Content-derived identifier (SHA-256 hash)
//! - [`ScoredReceipt`] - A receipt together with the points it earned
//! - [`PointsBreakdown`] - Per-rule contributions to a score
//!
//! ## Canonicalization
//!
//! Identifiers hash a canonical JSON rendering of the receipt. See [`canonical`].

pub mod canonical;
pub mod error;
pub mod receipt;
pub mod scoring;
pub mod types;
pub mod validation;

pub use canonical::{canonical_text, ID_DOMAIN};
pub use error::ValidationError;
pub use receipt::{Amount, LineItem, PurchaseDate, PurchaseTime, Receipt, ScoredReceipt};
pub use scoring::{checked_points, compute_points, score_breakdown, PointsBreakdown};
pub use types::ReceiptId;
pub use validation::{parse_receipt, validate_receipt};
