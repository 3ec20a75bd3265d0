//! Scoring vectors: receipts with known point totals.
//!
//! Each vector is the JSON wire form of a receipt plus the points it must
//! earn. They pin the rule set, including its boundaries.

use receipt_points_core::{compute_points, parse_receipt, Receipt, ValidationError};

/// A scoring test vector.
#[derive(Debug, Clone)]
pub struct ScoreVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Receipt in its JSON wire form.
    pub receipt_json: &'static str,
    /// Points the receipt must earn.
    pub expected_points: u64,
}

/// Get all scoring vectors.
pub fn all_vectors() -> Vec<ScoreVector> {
    vec![
        ScoreVector {
            name: "Target, five items",
            receipt_json: r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [
                    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                    {"shortDescription": "Klarbrunn 12-PK 12 FL OZ", "price": "12.00"}
                ],
                "total": "35.35"
            }"#,
            // 6 retailer + 10 pairs + 3 + 3 descriptions + 6 odd day
            expected_points: 28,
        },
        ScoreVector {
            name: "M&M Corner Market, round total",
            receipt_json: r#"{
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
            }"#,
            // 14 retailer + 75 round + 10 pairs + 10 afternoon
            expected_points: 109,
        },
        ScoreVector {
            name: "Target, padded description",
            receipt_json: r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [
                    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                    {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
                ],
                "total": "35.35"
            }"#,
            // padding makes the last description 29 characters long
            expected_points: 25,
        },
        ScoreVector {
            name: "Walgreens, morning",
            receipt_json: r#"{
                "retailer": "Walgreens",
                "purchaseDate": "2022-01-02",
                "purchaseTime": "08:13",
                "total": "2.65",
                "items": [
                    {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                    {"shortDescription": "Dasani", "price": "1.40"}
                ]
            }"#,
            expected_points: 15,
        },
        ScoreVector {
            name: "Exactly 14:00",
            receipt_json: r#"{
                "retailer": "Shop",
                "purchaseDate": "2022-03-20",
                "purchaseTime": "14:00",
                "total": "1.01",
                "items": [{"shortDescription": "ab", "price": "1.01"}]
            }"#,
            expected_points: 4,
        },
        ScoreVector {
            name: "15:59",
            receipt_json: r#"{
                "retailer": "Shop",
                "purchaseDate": "2022-03-20",
                "purchaseTime": "15:59",
                "total": "1.01",
                "items": [{"shortDescription": "ab", "price": "1.01"}]
            }"#,
            expected_points: 14,
        },
        ScoreVector {
            name: "Exactly 16:00",
            receipt_json: r#"{
                "retailer": "Shop",
                "purchaseDate": "2022-03-20",
                "purchaseTime": "16:00",
                "total": "1.01",
                "items": [{"shortDescription": "ab", "price": "1.01"}]
            }"#,
            expected_points: 4,
        },
        ScoreVector {
            name: "Round hundred total",
            receipt_json: r#"{
                "retailer": "Shop",
                "purchaseDate": "2022-03-20",
                "purchaseTime": "13:00",
                "total": "100.00",
                "items": [{"shortDescription": "ab", "price": "100.00"}]
            }"#,
            // round dollar bonus only, no quarter bonus on top
            expected_points: 79,
        },
    ]
}

/// Parse and validate the receipt a vector describes.
pub fn receipt_from_vector(vector: &ScoreVector) -> Result<Receipt, ValidationError> {
    parse_receipt(vector.receipt_json)
}

/// Score every vector.
///
/// Returns `(name, matches, points)` per vector; `points` is `None` when the
/// vector's receipt failed to parse.
pub fn verify_all_vectors() -> Vec<(String, bool, Option<u64>)> {
    all_vectors()
        .iter()
        .map(|v| {
            let points = receipt_from_vector(v).ok().map(|r| compute_points(&r));
            (v.name.to_string(), points == Some(v.expected_points), points)
        })
        .collect()
}
