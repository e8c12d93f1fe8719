//! Error types.
//!
//! The hot path has almost no errors: a cancel miss is a `bool`, and
//! policy discards (IOC/Market leftovers) are silent. What remains:
//!
//! - [`OrderError`]: an order that breaks the caller contract, rejected
//!   before it touches the book
//! - [`InvariantViolation`]: reported only by
//!   [`OrderBook::check_invariants`](crate::OrderBook::check_invariants)

use thiserror::Error;

use crate::types::Side;

/// Reasons an incoming order is rejected without matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("order {order_id}: quantity must be positive")]
    ZeroQuantity { order_id: u64 },

    #[error("order {order_id}: market orders must be immediate-or-cancel")]
    MarketOrderNotIoc { order_id: u64 },

    #[error("order {order_id}: id is already resting on the book")]
    DuplicateOrderId { order_id: u64 },

    #[error("order {order_id}: sequence {sequence} does not follow {last}")]
    StaleSequence { order_id: u64, sequence: u64, last: u64 },

    #[error("order {order_id}: submission sequence exhausted")]
    SequenceExhausted { order_id: u64 },

    #[error("invalid {field} value {value}")]
    InvalidField { field: &'static str, value: u8 },
}

/// A broken book invariant. Any of these is an engine bug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{side:?} level {price} is empty but still mapped")]
    EmptyLevel { side: Side, price: u64 },

    #[error("order {order_id} rests with zero quantity")]
    ZeroQuantityResting { order_id: u64 },

    #[error("book is crossed: best bid {bid} >= best ask {ask}")]
    CrossedBook { bid: u64, ask: u64 },

    #[error("order {order_id} sits at {side:?} {price} but belongs elsewhere")]
    MisplacedOrder { order_id: u64, side: Side, price: u64 },

    #[error("order {order_id} is resting but has no index entry")]
    MissingIndexEntry { order_id: u64 },

    #[error("index entry for order {order_id} does not resolve to a resting order")]
    StaleIndexEntry { order_id: u64 },

    #[error("{side:?} level {price}: {detail}")]
    LevelMismatch { side: Side, price: u64, detail: String },

    #[error("{side:?} level {price}: order {later} precedes older order {earlier}")]
    FifoViolation { side: Side, price: u64, earlier: u64, later: u64 },
}
