//! Crossing predicate.
//!
//! Shared by the matching loop and the rest-time re-check in `submit`, so
//! the two can never disagree about what "crosses" means.

use crate::types::{Order, Side};

/// Can `taker` trade against the best opposite price?
///
/// - Empty opposite side: never
/// - Market: always
/// - Limit Buy: best ask <= limit
/// - Limit Sell: best bid >= limit
#[inline]
pub fn crosses(taker: &Order, best_opposite: Option<u64>) -> bool {
    let Some(best) = best_opposite else {
        return false;
    };
    if taker.is_market() {
        return true;
    }
    limit_crosses(taker.side(), taker.price, best)
}

/// Price-only test for a limit order on `side` against a resting price.
#[inline]
pub fn limit_crosses(side: Side, limit: u64, resting_price: u64) -> bool {
    match side {
        Side::Buy => limit >= resting_price,
        Side::Sell => limit <= resting_price,
    }
}
