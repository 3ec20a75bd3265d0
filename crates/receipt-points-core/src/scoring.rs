//! The scoring engine: six independent rules summed into a point total.
//!
//! Every rule is a pure function of one part of a validated [`Receipt`] and
//! contributes a non-negative addend. None of them can fail: sums saturate at
//! `u64::MAX`, and validation rejects receipts whose exact score would not
//! fit (see [`checked_points`]).

use serde::Serialize;

use crate::receipt::{Amount, LineItem, PurchaseDate, PurchaseTime, Receipt};

/// Points for a total with no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 75;

/// Points for a total that is a multiple of 0.25 but not a round dollar.
pub const QUARTER_POINTS: u64 = 25;

/// Points for every two items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Points for an odd purchase day.
pub const ODD_DAY_POINTS: u64 = 6;

/// Points for a purchase inside the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.addends().into_iter().fold(0, u64::saturating_add)
    }

    /// Sum of all rule contributions, or `None` if it exceeds `u64::MAX`.
    pub fn checked_total(&self) -> Option<u64> {
        self.addends()
            .into_iter()
            .try_fold(0u64, |acc, points| acc.checked_add(points))
    }

    fn addends(&self) -> [u64; 6] {
        [
            self.retailer,
            self.round_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
    }
}

/// Compute the points a receipt earns.
pub fn compute_points(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

/// Compute the exact points, or `None` when they do not fit in a `u64`.
pub fn checked_points(receipt: &Receipt) -> Option<u64> {
    let descriptions = qualifying_items(&receipt.items)
        .try_fold(0u64, |acc, item| acc.checked_add(fifth_rounded_up(&item.price)))?;

    PointsBreakdown {
        descriptions,
        ..score_breakdown(receipt)
    }
    .checked_total()
}

/// Evaluate every rule and keep the individual contributions.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: round_total_points(&receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        descriptions: description_points(&receipt.items),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

/// One point per alphanumeric character in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// Round dollar totals earn 75; quarter totals earn 25. Never both.
pub fn round_total_points(total: &Amount) -> u64 {
    match total.fraction() {
        0 => ROUND_DOLLAR_POINTS,
        25 | 50 | 75 => QUARTER_POINTS,
        _ => 0,
    }
}

/// Five points for every complete pair of items.
pub fn item_pair_points(item_count: usize) -> u64 {
    ITEM_PAIR_POINTS * (item_count / 2) as u64
}

/// For each item whose description length is a multiple of three, the price
/// times 0.2 rounded up to the next whole point.
///
/// Length counts characters of the description as submitted, whitespace
/// included.
pub fn description_points(items: &[LineItem]) -> u64 {
    qualifying_items(items)
        .map(|item| fifth_rounded_up(&item.price))
        .fold(0, u64::saturating_add)
}

fn qualifying_items(items: &[LineItem]) -> impl Iterator<Item = &LineItem> {
    items
        .iter()
        .filter(|item| item.short_description.chars().count() % 3 == 0)
}

/// `ceil(price * 0.2)` in exact integer arithmetic: one point per started 5.00.
fn fifth_rounded_up(price: &Amount) -> u64 {
    price.cents().div_ceil(500)
}

/// Six points when the day of the month is odd.
pub fn odd_day_points(date: &PurchaseDate) -> u64 {
    if date.day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Ten points for purchases after 14:00 and before 16:00.
///
/// 14:00 itself earns nothing; all of hour 15 does.
pub fn afternoon_points(time: &PurchaseTime) -> u64 {
    match (time.hour, time.minute) {
        (15, _) => AFTERNOON_POINTS,
        (14, m) if m != 0 => AFTERNOON_POINTS,
        _ => 0,
    }
}
