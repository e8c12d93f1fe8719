//! One side of the book: price levels ordered best-first.
//!
//! Both sides share one map type. The key carries the ordering:
//!
//! - **Bids**: `LevelKey::Bid(Reverse(price))`, high-to-low
//! - **Asks**: `LevelKey::Ask(price)`, low-to-high
//!
//! so the first entry of the map is always the best level and iteration
//! is always in priority order. A map only ever holds one variant.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use slab::Slab;

use crate::orderbook::{OrderNode, PriceLevel};
use crate::types::Side;

/// Priority-ordered key of a price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelKey {
    Bid(Reverse<u64>),
    Ask(u64),
}

impl LevelKey {
    #[inline]
    pub fn new(side: Side, price: u64) -> Self {
        match side {
            Side::Buy => LevelKey::Bid(Reverse(price)),
            Side::Sell => LevelKey::Ask(price),
        }
    }

    #[inline]
    pub fn price(self) -> u64 {
        match self {
            LevelKey::Bid(Reverse(price)) | LevelKey::Ask(price) => price,
        }
    }
}

/// Price levels of one side of the book.
///
/// Invariant: a level is present iff it holds at least one order.
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    levels: BTreeMap<LevelKey, PriceLevel>,
    order_count: usize,
}

impl BookSide {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            order_count: 0,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    fn key(&self, price: u64) -> LevelKey {
        LevelKey::new(self.side, price)
    }

    /// Number of price levels
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of resting orders across all levels
    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    /// Best price: highest bid or lowest ask
    #[inline]
    pub fn best_price(&self) -> Option<u64> {
        self.levels.keys().next().map(|key| key.price())
    }

    #[inline]
    pub fn best_level(&self) -> Option<&PriceLevel> {
        self.levels.values().next()
    }

    #[inline]
    pub fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        self.levels.values_mut().next()
    }

    pub fn level(&self, price: u64) -> Option<&PriceLevel> {
        self.levels.get(&self.key(price))
    }

    /// Levels in priority order (best first)
    pub fn levels(&self) -> impl Iterator<Item = &PriceLevel> + '_ {
        self.levels.values()
    }

    /// Append a slab entry to the tail of its level, creating the level
    /// if needed.
    pub fn push_back(&mut self, price: u64, key: usize, slab: &mut Slab<OrderNode>) {
        let level_key = self.key(price);
        self.levels
            .entry(level_key)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(key, slab);
        self.order_count += 1;
    }

    /// Unlink a slab entry from its level, dropping the level once empty.
    ///
    /// Returns the unlinked order's open quantity, or None if there is no
    /// level at `price`.
    pub fn remove(&mut self, price: u64, key: usize, slab: &mut Slab<OrderNode>) -> Option<u64> {
        let level_key = self.key(price);
        let level = self.levels.get_mut(&level_key)?;
        let quantity = level.remove(key, slab);
        if level.is_empty() {
            self.levels.remove(&level_key);
        }
        self.order_count -= 1;
        Some(quantity)
    }

    pub fn clear(&mut self) {
        self.levels.clear();
        self.order_count = 0;
    }
}
