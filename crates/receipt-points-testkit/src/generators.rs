//! Proptest generators for property-based testing.

use proptest::prelude::*;

use receipt_points_core::{Amount, LineItem, PurchaseDate, PurchaseTime, Receipt};

/// Generate a retailer name that starts with an alphanumeric character.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9&' -]{0,23}".prop_map(String::from)
}

/// Generate a non-empty item description, possibly padded with spaces.
pub fn short_description() -> impl Strategy<Value = String> {
    " {0,2}[A-Za-z0-9][A-Za-z0-9 -]{0,30}".prop_map(String::from)
}

/// Generate an amount up to 1000.00.
pub fn amount() -> impl Strategy<Value = Amount> {
    (0u64..=100_000).prop_map(Amount::from_cents)
}

/// Generate a calendar-plausible date.
pub fn purchase_date() -> impl Strategy<Value = PurchaseDate> {
    (1970u16..=2099, 1u8..=12, 1u8..=31).prop_map(|(year, month, day)| PurchaseDate {
        year,
        month,
        day,
    })
}

/// Generate a 24-hour time.
pub fn purchase_time() -> impl Strategy<Value = PurchaseTime> {
    (0u8..24, 0u8..60).prop_map(|(hour, minute)| PurchaseTime { hour, minute })
}

/// Generate a line item.
pub fn line_item() -> impl Strategy<Value = LineItem> {
    (short_description(), amount()).prop_map(|(desc, price)| LineItem::new(desc, price))
}

/// Parameters for generating a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub purchase_date: PurchaseDate,
    pub purchase_time: PurchaseTime,
    pub total: Amount,
    pub items: Vec<LineItem>,
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            retailer(),
            purchase_date(),
            purchase_time(),
            amount(),
            prop::collection::vec(line_item(), 1..=12),
        )
            .prop_map(|(retailer, purchase_date, purchase_time, total, items)| ReceiptParams {
                retailer,
                purchase_date,
                purchase_time,
                total,
                items,
            })
            .boxed()
    }
}

/// Generate a receipt from parameters.
pub fn receipt_from_params(params: &ReceiptParams) -> Receipt {
    Receipt {
        retailer: params.retailer.clone(),
        purchase_date: params.purchase_date,
        purchase_time: params.purchase_time,
        total: params.total,
        items: params.items.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::{canonical_text, validate_receipt};

    proptest! {
        #[test]
        fn test_generated_receipts_are_valid(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            prop_assert!(validate_receipt(&receipt).is_ok());
        }

        #[test]
        fn test_canonical_text_deterministic(params: ReceiptParams) {
            let r1 = receipt_from_params(&params);
            let r2 = receipt_from_params(&params);

            prop_assert_eq!(canonical_text(&r1), canonical_text(&r2));
        }

        #[test]
        fn test_receipt_id_unique_with_different_retailer(
            params: ReceiptParams,
            other in retailer(),
        ) {
            prop_assume!(params.retailer != other);

            let r1 = receipt_from_params(&params);
            let mut r2 = r1.clone();
            r2.retailer = other;

            prop_assert_ne!(r1.compute_id(), r2.compute_id());
        }
    }
}
