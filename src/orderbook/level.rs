//! Price level: the FIFO queue of resting orders at one price.
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Matching consumes orders from the head
//! - Any order can be unlinked in O(1) using its slab key, and unlinking
//!   never moves the other nodes
//!
//! The order data lives in the slab; this struct only holds the queue
//! metadata.

use slab::Slab;

use crate::orderbook::OrderNode;

/// Queue metadata for all resting orders at a single price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    /// Price for this level in ticks
    pub price: u64,

    /// Sum of open quantity of the queued orders
    pub total_quantity: u64,

    /// Oldest order (slab key), first to be matched
    pub head: Option<usize>,

    /// Newest order (slab key)
    pub tail: Option<usize>,

    /// Number of orders at this price level
    pub order_count: usize,
}

impl PriceLevel {
    pub fn new(price: u64) -> Self {
        Self {
            price,
            total_quantity: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Append an order at the tail of the queue.
    ///
    /// # Panics
    ///
    /// Panics if `key` or the current tail is not in the slab.
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let node = &mut slab[key];
        let quantity = node.quantity();
        node.prev = self.tail;
        node.next = None;

        match self.tail {
            Some(tail_key) => slab[tail_key].next = Some(key),
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.order_count += 1;
        self.total_quantity = self.total_quantity.saturating_add(quantity);
    }

    /// Unlink an order from anywhere in the queue.
    ///
    /// The node stays in the slab with cleared pointers; freeing the slot
    /// is the caller's job.
    ///
    /// # Returns
    ///
    /// The open quantity of the unlinked order
    ///
    /// # Panics
    ///
    /// Panics if `key` or one of its neighbours is not in the slab.
    pub fn remove(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> u64 {
        let node = &mut slab[key];
        let quantity = node.quantity();
        let prev_key = node.prev.take();
        let next_key = node.next.take();

        match prev_key {
            Some(prev) => slab[prev].next = next_key,
            None => self.head = next_key,
        }

        match next_key {
            Some(next) => slab[next].prev = prev_key,
            None => self.tail = prev_key,
        }

        self.order_count -= 1;
        self.total_quantity = self.total_quantity.saturating_sub(quantity);

        quantity
    }

    /// Slab key of the oldest order
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Account for a partial fill of one of the queued orders
    pub fn reduce_quantity(&mut self, filled_quantity: u64) {
        self.total_quantity = self.total_quantity.saturating_sub(filled_quantity);
    }

    /// Walk the queue oldest-first.
    pub fn iter<'a>(&self, slab: &'a Slab<OrderNode>) -> LevelIter<'a> {
        LevelIter {
            slab,
            cursor: self.head,
        }
    }
}

/// FIFO iterator over a level, yielding `(slab key, node)`.
pub struct LevelIter<'a> {
    slab: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for LevelIter<'a> {
    type Item = (usize, &'a OrderNode);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = self.slab.get(key)?;
        self.cursor = node.next;
        Some((key, node))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
