//! # Receipt Points Testkit
//!
//! Testing utilities for Receipt Points.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Scoring vectors**: Known receipts with their expected points
//! - **Generators**: Proptest strategies for valid receipts
//! - **Fixtures**: A ready processor and a terse receipt constructor
//!
//! ## Scoring Vectors
//!
//! ```rust
//! use receipt_points_core::compute_points;
//! use receipt_points_testkit::vectors::{all_vectors, receipt_from_vector};
//!
//! for vector in all_vectors() {
//!     let receipt = receipt_from_vector(&vector).unwrap();
//!     assert_eq!(compute_points(&receipt), vector.expected_points);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_testkit::generators::{receipt_from_params, ReceiptParams};
//!
//! proptest! {
//!     #[test]
//!     fn receipt_id_is_deterministic(params: ReceiptParams) {
//!         let r1 = receipt_from_params(&params);
//!         let r2 = receipt_from_params(&params);
//!         prop_assert_eq!(r1.compute_id(), r2.compute_id());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{make_receipt, TestFixture};
pub use generators::{receipt_from_params, ReceiptParams};
pub use vectors::{all_vectors, receipt_from_vector, verify_all_vectors, ScoreVector};
