//! Arena node for a resting order.
//!
//! `OrderNode` wraps an `Order` with doubly-linked list pointers so a
//! resting order can be unlinked from its price level in O(1) given its
//! slab key.
//!
//! Per the slab docs (https://docs.rs/slab/0.4.11), a key stays valid
//! until that entry is removed, no matter what happens to other entries.
//! Keys may be reused after removal, so the cancel index must be cleared
//! in the same step that frees the slot.
//!
//! Within a level:
//! - `prev`: the older neighbour (towards the head)
//! - `next`: the newer neighbour (towards the tail)

use crate::types::Order;

/// Resting order plus its position in the level queue.
///
/// The pointers are slab keys (`usize`), not references.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The resting order
    pub order: Order,

    /// Newer neighbour, None if this is the tail
    pub next: Option<usize>,

    /// Older neighbour, None if this is the head
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create an unlinked node
    ///
    /// ```
    /// use ob_engine::orderbook::OrderNode;
    /// use ob_engine::types::{Order, Side};
    ///
    /// let node = OrderNode::new(Order::limit(1, Side::Buy, 100, 10));
    /// assert!(node.is_unlinked());
    /// ```
    #[inline]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            next: None,
            prev: None,
        }
    }

    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    #[inline]
    pub fn order_id(&self) -> u64 {
        self.order.id
    }

    #[inline]
    pub fn price(&self) -> u64 {
        self.order.price
    }

    /// Open quantity of the wrapped order
    #[inline]
    pub fn quantity(&self) -> u64 {
        self.order.quantity
    }

    /// Fill a portion of this order, returns the quantity actually filled
    #[inline]
    pub fn fill(&mut self, quantity: u64) -> u64 {
        self.order.fill(quantity)
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.order.is_filled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn test_order_node_accessors() {
        let node = OrderNode::new(Order::limit(42, Side::Sell, 105, 7));

        assert_eq!(node.order_id(), 42);
        assert_eq!(node.price(), 105);
        assert_eq!(node.quantity(), 7);
        assert!(!node.is_filled());
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_order_node_fill() {
        let mut node = OrderNode::new(Order::limit(1, Side::Buy, 100, 10));

        assert_eq!(node.fill(6), 6);
        assert_eq!(node.quantity(), 4);

        assert_eq!(node.fill(6), 4);
        assert!(node.is_filled());
    }

    #[test]
    fn test_order_node_linking() {
        let mut node = OrderNode::new(Order::limit(1, Side::Buy, 100, 10));

        node.next = Some(2);
        assert!(!node.is_unlinked());

        node.next = None;
        node.prev = Some(0);
        assert!(!node.is_unlinked());
    }
}
