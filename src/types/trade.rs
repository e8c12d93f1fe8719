//! Trade type representing a fill between a resting and an incoming order.

use ssz_rs::prelude::*;

/// A single fill between a maker and a taker.
///
/// ## Terminology
///
/// - **Maker**: The resting order that was already in the book
/// - **Taker**: The incoming order that triggered the match
///
/// The trade always executes at the maker's price, never the taker's
/// limit and never a derived mid price.
///
/// ## Example
///
/// ```
/// use ob_engine::types::Trade;
///
/// let trade = Trade::new(1, 10, 12, 105, 5);
/// assert_eq!(trade.notional(), 525);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Trade {
    /// Per-book trade sequence number, starting at 1
    pub id: u64,

    /// Maker order ID (the resting order)
    pub maker_id: u64,

    /// Taker order ID (the incoming order)
    pub taker_id: u64,

    /// Execution price in ticks, always the maker's price
    pub price: u64,

    /// Executed quantity
    pub quantity: u64,
}

impl Trade {
    pub fn new(id: u64, maker_id: u64, taker_id: u64, price: u64, quantity: u64) -> Self {
        Self {
            id,
            maker_id,
            taker_id,
            price,
            quantity,
        }
    }

    /// Price times quantity, widened so it cannot overflow
    pub fn notional(&self) -> u128 {
        (self.price as u128) * (self.quantity as u128)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
