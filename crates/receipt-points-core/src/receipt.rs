//! Receipt: a submitted purchase record.
//!
//! The wire format carries every field as a string. Fields with a grammar
//! (amounts, dates, times) are parsed into newtypes at deserialization time,
//! so a `Receipt` that exists is one whose fields are well-formed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::{canonical_text, ID_DOMAIN};
use crate::error::ValidationError;
use crate::types::ReceiptId;

/// A non-negative monetary amount with exactly two fractional digits.
///
/// Stored as integer cents; displayed as `<dollars>.<cc>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount {
    cents: u64,
}

impl Amount {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// The fractional (cents) part, `0..=99`.
    pub const fn fraction(&self) -> u64 {
        self.cents % 100
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ValidationError::InvalidAmount {
            value: s.to_string(),
            reason,
        };

        let (whole, frac) = s
            .split_once('.')
            .ok_or_else(|| invalid("missing decimal point"))?;

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("whole part must be decimal digits"));
        }
        if frac.len() != 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected exactly two fractional digits"));
        }

        let whole: u64 = whole.parse().map_err(|_| invalid("out of range"))?;
        let frac: u64 = frac.parse().map_err(|_| invalid("out of range"))?;

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Self::from_cents)
            .ok_or_else(|| invalid("out of range"))
    }
}

impl TryFrom<String> for Amount {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// A purchase date in `YYYY-MM-DD` form.
///
/// Only the shape is checked: four, two and two digits separated by `-`.
/// Calendar validity (e.g. February 30th) is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PurchaseDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl FromStr for PurchaseDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidDate(s.to_string());

        let mut parts = s.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        Ok(Self {
            year: digits(year, 4).ok_or_else(invalid)?,
            month: digits(month, 2).ok_or_else(invalid)?,
            day: digits(day, 2).ok_or_else(invalid)?,
        })
    }
}

impl TryFrom<String> for PurchaseDate {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PurchaseDate> for String {
    fn from(date: PurchaseDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for PurchaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A purchase time in 24-hour `HH:MM` form.
///
/// Only the shape is checked, not the hour or minute range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PurchaseTime {
    pub hour: u8,
    pub minute: u8,
}

impl FromStr for PurchaseTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTime(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            hour: digits(hour, 2).ok_or_else(invalid)?,
            minute: digits(minute, 2).ok_or_else(invalid)?,
        })
    }
}

impl TryFrom<String> for PurchaseTime {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PurchaseTime> for String {
    fn from(time: PurchaseTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for PurchaseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse a fixed-width run of ASCII digits.
fn digits<T: FromStr>(s: &str, width: usize) -> Option<T> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// One purchased product entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub short_description: String,
    pub price: Amount,
}

impl LineItem {
    pub fn new(short_description: impl Into<String>, price: Amount) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }
}

/// A submitted purchase receipt.
///
/// Immutable once submitted. The score is not part of the receipt; it lives
/// on the [`ScoredReceipt`] record the store keeps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: PurchaseDate,
    pub purchase_time: PurchaseTime,
    pub total: Amount,
    pub items: Vec<LineItem>,
}

impl Receipt {
    /// Compute the content-derived identifier of this receipt.
    ///
    /// SHA-256 over the domain prefix followed by the canonical text.
    pub fn compute_id(&self) -> ReceiptId {
        let mut hasher = Sha256::new();
        hasher.update(ID_DOMAIN.as_bytes());
        hasher.update(canonical_text(self).as_bytes());
        ReceiptId::from_bytes(hasher.finalize().into())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A stored record: the receipt and the points computed at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parse() {
        let amount: Amount = "35.35".parse().unwrap();
        assert_eq!(amount.cents(), 3535);
        assert_eq!(amount.fraction(), 35);
        assert_eq!(amount.to_string(), "35.35");

        let zero: Amount = "0.00".parse().unwrap();
        assert_eq!(zero.cents(), 0);
    }

    #[test]
    fn test_amount_rejects_bad_shapes() {
        for bad in ["", "12", "12.", "12.5", "12.345", ".50", "-1.00", "1,00", "a.bc", "1.0a"] {
            assert!(
                matches!(bad.parse::<Amount>(), Err(ValidationError::InvalidAmount { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_amount_overflow_is_rejected() {
        let huge = format!("{}.00", u64::MAX);
        assert!(huge.parse::<Amount>().is_err());

        let max: Amount = "184467440737095516.15".parse().unwrap();
        assert_eq!(max.cents(), u64::MAX);
        assert!("184467440737095516.16".parse::<Amount>().is_err());
    }

    #[test]
    fn test_date_parse() {
        let date: PurchaseDate = "2022-01-01".parse().unwrap();
        assert_eq!((date.year, date.month, date.day), (2022, 1, 1));
        assert_eq!(date.to_string(), "2022-01-01");
    }

    #[test]
    fn test_date_shape_only() {
        let date: PurchaseDate = "2022-02-30".parse().unwrap();
        assert_eq!(date.day, 30);

        for bad in ["2022-1-01", "22-01-01", "2022/01/01", "2022-01-01-01", "2022-01", "2022-0a-01"] {
            assert!(bad.parse::<PurchaseDate>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_time_parse() {
        let time: PurchaseTime = "14:33".parse().unwrap();
        assert_eq!((time.hour, time.minute), (14, 33));
        assert_eq!(time.to_string(), "14:33");

        for bad in ["1433", "1:33", "14:3", "14:33:00", "ab:cd"] {
            assert!(bad.parse::<PurchaseTime>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_receipt_deserializes_wire_format() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Walgreens");
        assert_eq!(receipt.total.cents(), 265);
        assert_eq!(receipt.item_count(), 2);
        assert_eq!(receipt.items[1].short_description, "Dasani");
    }

    #[test]
    fn test_receipt_serializes_back_to_strings() {
        let receipt = Receipt {
            retailer: "Target".into(),
            purchase_date: "2022-01-01".parse().unwrap(),
            purchase_time: "13:01".parse().unwrap(),
            total: "1.25".parse().unwrap(),
            items: vec![LineItem::new("Pepsi", Amount::from_cents(125))],
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["purchaseDate"], "2022-01-01");
        assert_eq!(value["purchaseTime"], "13:01");
        assert_eq!(value["total"], "1.25");
        assert_eq!(value["items"][0]["price"], "1.25");
    }

    #[test]
    fn test_compute_id_is_content_derived() {
        let receipt = Receipt {
            retailer: "Target".into(),
            purchase_date: "2022-01-01".parse().unwrap(),
            purchase_time: "13:01".parse().unwrap(),
            total: "1.25".parse().unwrap(),
            items: vec![LineItem::new("Pepsi", Amount::from_cents(125))],
        };

        let same = receipt.clone();
        assert_eq!(receipt.compute_id(), same.compute_id());

        let mut other = receipt.clone();
        other.retailer = "Walmart".into();
        assert_ne!(receipt.compute_id(), other.compute_id());
    }
}
