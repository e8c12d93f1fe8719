//! Limit order book.
//!
//! ## Architecture
//!
//! - **Slab**: arena holding every resting order; keys stay valid while
//!   the order rests, whatever happens to its neighbours
//! - **BookSide** (x2): priority-ordered price levels, each a doubly
//!   linked FIFO through the slab
//! - **HashMap**: order id to [`OrderLocation`] for O(1) cancel
//! - **Vec<Trade>**: outgoing trade log, drained by the caller
//!
//! The levels and the index are only ever changed together, inside
//! `insert_resting` and `remove_resting`.
//!
//! ## Example
//!
//! ```
//! use ob_engine::OrderBook;
//! use ob_engine::types::{Order, Side};
//!
//! let mut book = OrderBook::new();
//!
//! book.submit(Order::limit(1, Side::Buy, 100, 10));
//! book.submit(Order::limit(2, Side::Sell, 99, 6));
//!
//! assert_eq!(book.trades().len(), 1);
//! assert_eq!(book.trades()[0].price, 100);
//! assert_eq!(book.total_qty_at(Side::Buy, 100), 4);
//! ```

use std::collections::HashMap;

use slab::Slab;
use tracing::{debug, warn};

use crate::config::BookConfig;
use crate::engine::{crossing, matcher};
use crate::error::{InvariantViolation, OrderError};
use crate::orderbook::{BookSide, OrderNode};
use crate::types::{BookReceipt, Order, Side, Trade};

/// Where a resting order lives: its side, its level, and its slab key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLocation {
    pub side: Side,
    pub price: u64,
    pub key: usize,
}

/// Aggregate view of one price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDepth {
    pub price: u64,
    pub quantity: u64,
    pub order_count: usize,
}

/// Single-instrument limit order book with price-time priority.
///
/// Not thread-safe by contract: every mutation takes `&mut self`, and
/// callers that share a book must serialize access themselves.
#[derive(Debug)]
pub struct OrderBook {
    /// Resting orders
    pub(crate) orders: Slab<OrderNode>,

    /// Buy levels, highest price first
    bids: BookSide,

    /// Sell levels, lowest price first
    asks: BookSide,

    /// Order id to location, for O(1) cancel
    index: HashMap<u64, OrderLocation>,

    /// Trades not yet drained by the caller
    trades: Vec<Trade>,

    next_trade_id: u64,
    next_sequence: u64,
    orders_submitted: u64,
    trades_executed: u64,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self::with_config(BookConfig::default())
    }

    /// Book with `order_capacity` resting slots pre-allocated
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self::with_config(BookConfig::default().with_order_capacity(order_capacity))
    }

    pub fn with_config(config: BookConfig) -> Self {
        Self {
            orders: Slab::with_capacity(config.order_capacity),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            index: HashMap::with_capacity(config.order_capacity),
            trades: Vec::with_capacity(config.trade_log_capacity),
            next_trade_id: 1,
            next_sequence: 0,
            orders_submitted: 0,
            trades_executed: 0,
        }
    }

    // ========================================================================
    // Submit / Cancel
    // ========================================================================

    /// Match an order against the book, then rest whatever the rules allow.
    ///
    /// Orders that break the caller contract (see [`OrderBook::try_submit`])
    /// are logged and dropped without touching the book.
    pub fn submit(&mut self, order: Order) {
        if let Err(err) = self.try_submit(order) {
            warn!(%err, "order rejected");
        }
    }

    /// Like [`OrderBook::submit`] but reports why an order was rejected.
    ///
    /// # Errors
    ///
    /// - [`OrderError::ZeroQuantity`], [`OrderError::MarketOrderNotIoc`],
    ///   [`OrderError::InvalidField`] from [`Order::validate`]
    /// - [`OrderError::DuplicateOrderId`] if the id is already resting
    /// - [`OrderError::StaleSequence`] if a caller-supplied sequence is not
    ///   greater than the last one the book has seen
    /// - [`OrderError::SequenceExhausted`] if the counter cannot be stamped
    ///
    /// A rejected order produces no trades and does not rest. Leftover
    /// quantity that may not rest (Market, IOC) is discarded silently; that
    /// is a normal outcome, not an error.
    pub fn try_submit(&mut self, mut order: Order) -> Result<(), OrderError> {
        order.validate()?;
        if self.index.contains_key(&order.id) {
            return Err(OrderError::DuplicateOrderId { order_id: order.id });
        }

        if order.sequence == 0 {
            order.sequence = self
                .next_sequence
                .checked_add(1)
                .ok_or(OrderError::SequenceExhausted { order_id: order.id })?;
        } else if order.sequence <= self.next_sequence {
            return Err(OrderError::StaleSequence {
                order_id: order.id,
                sequence: order.sequence,
                last: self.next_sequence,
            });
        }
        self.next_sequence = order.sequence;
        self.orders_submitted += 1;

        let remaining = matcher::match_incoming(self, &mut order);
        if remaining == 0 {
            return Ok(());
        }

        if !order.may_rest() {
            debug!(order_id = order.id, remaining, "discarding unfilled immediate order");
            return Ok(());
        }

        // Unreachable after an exhaustive match; kept as a guard.
        let best_opposite = self.side(order.side().opposite()).best_price();
        if crossing::crosses(&order, best_opposite) {
            debug!(order_id = order.id, remaining, "discarding order that still crosses");
            return Ok(());
        }

        self.insert_resting(order);
        Ok(())
    }

    /// Withdraw a resting order.
    ///
    /// Returns `false` if the id is not resting (unknown, filled, or
    /// already cancelled).
    ///
    /// ```
    /// use ob_engine::OrderBook;
    /// use ob_engine::types::{Order, Side};
    ///
    /// let mut book = OrderBook::new();
    /// book.submit(Order::limit(42, Side::Buy, 100, 7));
    ///
    /// assert!(book.cancel(42));
    /// assert!(!book.cancel(42));
    /// ```
    pub fn cancel(&mut self, order_id: u64) -> bool {
        self.cancel_order(order_id).is_some()
    }

    /// Withdraw a resting order and hand it back with its open quantity.
    pub fn cancel_order(&mut self, order_id: u64) -> Option<Order> {
        let Some(location) = self.index.get(&order_id).copied() else {
            debug!(order_id, "cancel miss");
            return None;
        };
        let order = self.remove_resting(location)?;
        debug!(order_id, price = location.price, quantity = order.quantity, "cancelled");
        Some(order)
    }

    // ========================================================================
    // Resting helpers (the only writers of levels + index)
    // ========================================================================

    /// Append an order to the tail of its level and index it.
    fn insert_resting(&mut self, order: Order) -> OrderLocation {
        let side = order.side();
        let price = order.price;
        let order_id = order.id;
        let quantity = order.quantity;

        let key = self.orders.insert(OrderNode::new(order));
        let (book_side, orders) = self.side_and_arena(side);
        book_side.push_back(price, key, orders);

        let location = OrderLocation { side, price, key };
        self.index.insert(order_id, location);
        debug!(order_id, ?side, price, quantity, "resting");
        location
    }

    /// Unlink a resting order from its level, drop the level if it is now
    /// empty, erase its index entry and free its slot.
    pub(crate) fn remove_resting(&mut self, location: OrderLocation) -> Option<Order> {
        if !self.orders.contains(location.key) {
            return None;
        }
        let (book_side, orders) = self.side_and_arena(location.side);
        book_side.remove(location.price, location.key, orders)?;

        let node = self.orders.remove(location.key);
        self.index.remove(&node.order_id());
        Some(node.order)
    }

    pub(crate) fn record_trade(&mut self, maker_id: u64, taker_id: u64, price: u64, quantity: u64) {
        let id = self.next_trade_id;
        self.next_trade_id += 1;
        self.trades_executed += 1;
        self.trades.push(Trade::new(id, maker_id, taker_id, price, quantity));
    }

    pub(crate) fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    fn side_and_arena(&mut self, side: Side) -> (&mut BookSide, &mut Slab<OrderNode>) {
        let book_side = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        (book_side, &mut self.orders)
    }

    // ========================================================================
    // Trade log
    // ========================================================================

    /// Trades since the last clear, in match order
    #[inline]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn clear_trades(&mut self) {
        self.trades.clear();
    }

    /// Take the trade log, leaving it empty
    pub fn drain_trades(&mut self) -> Vec<Trade> {
        self.trades.drain(..).collect()
    }

    // ========================================================================
    // Best Bid/Ask
    // ========================================================================

    #[inline]
    pub fn has_best_bid(&self) -> bool {
        !self.bids.is_empty()
    }

    #[inline]
    pub fn has_best_ask(&self) -> bool {
        !self.asks.is_empty()
    }

    /// Highest resting buy price
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.best_price()
    }

    /// Lowest resting sell price
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.best_price()
    }

    /// best_ask - best_bid, None unless both sides are populated
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    // ========================================================================
    // Depth and order lookup
    // ========================================================================

    /// Resting quantity at `price` on `side`, 0 if there is no such level
    pub fn total_qty_at(&self, side: Side, price: u64) -> u64 {
        self.side(side)
            .level(price)
            .map_or(0, |level| level.total_quantity)
    }

    /// Up to `max_levels` levels of `side`, best first
    pub fn depth(&self, side: Side, max_levels: usize) -> Vec<LevelDepth> {
        self.side(side)
            .levels()
            .take(max_levels)
            .map(|level| LevelDepth {
                price: level.price,
                quantity: level.total_quantity,
                order_count: level.order_count,
            })
            .collect()
    }

    /// Orders resting at one level, oldest first
    pub fn level_orders(&self, side: Side, price: u64) -> Vec<&Order> {
        match self.side(side).level(price) {
            Some(level) => level.iter(&self.orders).map(|(_, node)| &node.order).collect(),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn has_order(&self, order_id: u64) -> bool {
        self.index.contains_key(&order_id)
    }

    /// A resting order by id
    pub fn get_order(&self, order_id: u64) -> Option<&Order> {
        let location = self.index.get(&order_id)?;
        self.orders.get(location.key).map(|node| &node.order)
    }

    pub fn location(&self, order_id: u64) -> Option<OrderLocation> {
        self.index.get(&order_id).copied()
    }

    #[inline]
    pub fn num_bid_levels(&self) -> usize {
        self.bids.len()
    }

    #[inline]
    pub fn num_ask_levels(&self) -> usize {
        self.asks.len()
    }

    /// Number of resting orders
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.order_count()
    }

    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.order_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Drop every resting order and the trade log.
    ///
    /// Counters (trade ids, sequences, receipt totals) keep running.
    pub fn clear(&mut self) {
        self.orders.clear();
        self.bids.clear();
        self.asks.clear();
        self.index.clear();
        self.trades.clear();
    }

    // ========================================================================
    // Receipt / audit
    // ========================================================================

    /// Activity totals plus a SHA-256 root over the SSZ encoding of every
    /// resting order, bids best-to-worst then asks best-to-worst, FIFO
    /// within a level.
    pub fn receipt(&self) -> Result<BookReceipt, ssz_rs::SerializeError> {
        let mut encoded = Vec::with_capacity(self.orders.len() * 35);
        for book_side in [&self.bids, &self.asks] {
            for level in book_side.levels() {
                for (_, node) in level.iter(&self.orders) {
                    encoded.extend(ssz_rs::serialize(&node.order)?);
                }
            }
        }

        Ok(BookReceipt::new(
            self.orders_submitted,
            self.trades_executed,
            self.orders.len() as u64,
            BookReceipt::compute_hash(&encoded),
        ))
    }

    /// Walk the whole book and verify its structural invariants.
    ///
    /// O(n) in resting orders; meant for tests and offline audits.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = 0usize;

        for book_side in [&self.bids, &self.asks] {
            let side = book_side.side();
            let mut side_orders = 0usize;

            for level in book_side.levels() {
                let price = level.price;
                if level.is_empty() || level.head.is_none() {
                    return Err(InvariantViolation::EmptyLevel { side, price });
                }

                let mut count = 0usize;
                let mut total = 0u64;
                let mut prev: Option<(usize, &Order)> = None;

                for (key, node) in level.iter(&self.orders) {
                    let order = &node.order;
                    if order.quantity == 0 {
                        return Err(InvariantViolation::ZeroQuantityResting { order_id: order.id });
                    }
                    if order.side() != side || order.price != price {
                        return Err(InvariantViolation::MisplacedOrder {
                            order_id: order.id,
                            side,
                            price,
                        });
                    }
                    if self.index.get(&order.id) != Some(&OrderLocation { side, price, key }) {
                        return Err(InvariantViolation::MissingIndexEntry { order_id: order.id });
                    }
                    if node.prev != prev.map(|(prev_key, _)| prev_key) {
                        return Err(InvariantViolation::LevelMismatch {
                            side,
                            price,
                            detail: format!("broken back link at order {}", order.id),
                        });
                    }
                    if let Some((_, earlier)) = prev {
                        if earlier.sequence >= order.sequence {
                            return Err(InvariantViolation::FifoViolation {
                                side,
                                price,
                                earlier: earlier.id,
                                later: order.id,
                            });
                        }
                    }

                    count += 1;
                    total += order.quantity;
                    prev = Some((key, order));
                }

                if level.tail != prev.map(|(key, _)| key) {
                    return Err(InvariantViolation::LevelMismatch {
                        side,
                        price,
                        detail: "tail does not point at the last order".to_string(),
                    });
                }
                if count != level.order_count || total != level.total_quantity {
                    return Err(InvariantViolation::LevelMismatch {
                        side,
                        price,
                        detail: format!(
                            "recorded {} orders / {} qty, found {} / {}",
                            level.order_count, level.total_quantity, count, total
                        ),
                    });
                }
                side_orders += count;
            }

            if side_orders != book_side.order_count() {
                return Err(InvariantViolation::LevelMismatch {
                    side,
                    price: 0,
                    detail: format!(
                        "side records {} orders, levels hold {}",
                        book_side.order_count(),
                        side_orders
                    ),
                });
            }
            seen += side_orders;
        }

        for (&order_id, location) in &self.index {
            match self.orders.get(location.key) {
                Some(node) if node.order_id() == order_id => {}
                _ => return Err(InvariantViolation::StaleIndexEntry { order_id }),
            }
        }
        if seen != self.index.len() || seen != self.orders.len() {
            return Err(InvariantViolation::LevelMismatch {
                side: Side::Buy,
                price: 0,
                detail: format!(
                    "{} orders linked, {} indexed, {} allocated",
                    seen,
                    self.index.len(),
                    self.orders.len()
                ),
            });
        }

        if let (Some(bid), Some(ask)) = (self.best_bid(), self.best_ask()) {
            if bid >= ask {
                return Err(InvariantViolation::CrossedBook { bid, ask });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
