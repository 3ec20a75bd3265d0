//! Canonical text encoding for receipt identifiers.
//!
//! A receipt is rendered as compact JSON with these rules:
//! - Object keys sorted lexicographically
//! - Amounts, dates and times in their normalized string form
//! - Items in submission order
//! - `score` always present and `null` (receipts are identified before scoring)
//!
//! **CRITICAL**: This encoding is FROZEN. Changing it re-keys every receipt.

use serde_json::{json, Map, Value};

use crate::receipt::Receipt;

/// Domain separation prefix for receipt IDs.
pub const ID_DOMAIN: &str = "receipt-points/receipt-id/v1\n";

/// Render the canonical text of a receipt.
pub fn canonical_text(receipt: &Receipt) -> String {
    let items: Vec<Value> = receipt
        .items
        .iter()
        .map(|item| {
            json!({
                "price": item.price.to_string(),
                "shortDescription": item.short_description,
            })
        })
        .collect();

    let mut fields = Map::new();
    fields.insert("items".into(), Value::Array(items));
    fields.insert("purchaseDate".into(), receipt.purchase_date.to_string().into());
    fields.insert("purchaseTime".into(), receipt.purchase_time.to_string().into());
    fields.insert("retailer".into(), receipt.retailer.clone().into());
    fields.insert("score".into(), Value::Null);
    fields.insert("total".into(), receipt.total.to_string().into());

    Value::Object(fields).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::{Amount, LineItem};

    fn sample() -> Receipt {
        Receipt {
            retailer: "Walgreens".into(),
            purchase_date: "2022-01-02".parse().unwrap(),
            purchase_time: "08:13".parse().unwrap(),
            total: "2.65".parse().unwrap(),
            items: vec![
                LineItem::new("Pepsi - 12-oz", Amount::from_cents(125)),
                LineItem::new("Dasani", Amount::from_cents(140)),
            ],
        }
    }

    #[test]
    fn test_canonical_text_layout() {
        let text = canonical_text(&sample());
        assert_eq!(
            text,
            concat!(
                r#"{"items":[{"price":"1.25","shortDescription":"Pepsi - 12-oz"},"#,
                r#"{"price":"1.40","shortDescription":"Dasani"}],"#,
                r#""purchaseDate":"2022-01-02","purchaseTime":"08:13","#,
                r#""retailer":"Walgreens","score":null,"total":"2.65"}"#
            )
        );
    }

    #[test]
    fn test_item_order_matters() {
        let receipt = sample();
        let mut swapped = receipt.clone();
        swapped.items.reverse();

        assert_ne!(canonical_text(&receipt), canonical_text(&swapped));
        assert_ne!(receipt.compute_id(), swapped.compute_id());
    }

    #[test]
    fn test_canonical_text_is_valid_json() {
        let text = canonical_text(&sample());
        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(value["score"].is_null());
    }
}
