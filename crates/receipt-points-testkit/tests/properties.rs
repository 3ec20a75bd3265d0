//! Property tests over generated receipts.

use proptest::prelude::*;

use receipt_points::store::MemoryStore;
use receipt_points::{compute_points, score_breakdown, PointsError, Processor, ReceiptId};
use receipt_points_testkit::generators::{receipt_from_params, ReceiptParams};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #[test]
    fn points_are_deterministic(params: ReceiptParams) {
        let receipt = receipt_from_params(&params);
        prop_assert_eq!(compute_points(&receipt), compute_points(&receipt.clone()));
    }

    #[test]
    fn points_are_bounded_by_rules(params: ReceiptParams) {
        let receipt = receipt_from_params(&params);
        let breakdown = score_breakdown(&receipt);

        prop_assert!(breakdown.retailer <= receipt.retailer.chars().count() as u64);
        prop_assert!([0, 25, 75].contains(&breakdown.round_total));
        prop_assert_eq!(breakdown.item_pairs, 5 * (receipt.items.len() as u64 / 2));
        prop_assert!([0, 6].contains(&breakdown.odd_day));
        prop_assert!([0, 10].contains(&breakdown.afternoon));
        prop_assert_eq!(breakdown.total(), compute_points(&receipt));
    }

    #[test]
    fn submit_then_lookup_returns_computed_points(params: ReceiptParams) {
        let receipt = receipt_from_params(&params);
        let expected = compute_points(&receipt);

        let points = block_on(async {
            let processor = Processor::new(MemoryStore::new());
            let id = processor.submit(receipt).await.unwrap();
            processor.lookup(&id).await.unwrap()
        });

        prop_assert_eq!(points, expected);
    }

    #[test]
    fn identical_receipts_share_an_id(params: ReceiptParams) {
        let (id1, id2, len) = block_on(async {
            let processor = Processor::new(MemoryStore::new());
            let id1 = processor.submit(receipt_from_params(&params)).await.unwrap();
            let id2 = processor.submit(receipt_from_params(&params)).await.unwrap();
            (id1, id2, processor.len().await.unwrap())
        });

        prop_assert_eq!(id1, id2);
        prop_assert_eq!(len, 1);
    }

    #[test]
    fn unissued_ids_are_not_found(bytes in any::<[u8; 32]>()) {
        let result = block_on(async {
            let processor = Processor::new(MemoryStore::new());
            processor.lookup(&ReceiptId::from_bytes(bytes)).await
        });

        prop_assert!(matches!(result, Err(PointsError::NotFound(_))));
    }
}
