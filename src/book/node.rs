//! Order node for slab-based storage.
//!
//! ## Design
//!
//! `OrderNode` wraps an [`Order`] with doubly-linked list pointers so an
//! order can be unlinked from its price level in O(1) given its slab key.
//! Cancellations hit arbitrary queue positions far more often than the
//! newest order, which is why the level queue is a linked list rather than
//! a plain vector.
//!
//! ## Slab Integration
//!
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! ## Linked List
//!
//! Orders at the same price level form a doubly-linked list:
//! - `next`: Points to the next order (newer) in the price level
//! - `prev`: Points to the previous order (older) in the price level

use crate::types::Order;

/// Order node stored in the slab.
///
/// Contains the order data plus linked-list pointers for the price level
/// queue. The pointers are slab keys (`usize`), not direct references.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The actual order data
    pub order: Order,

    /// Next order in the price level queue (slab key)
    /// None if this is the tail (newest order)
    pub next: Option<usize>,

    /// Previous order in the price level queue (slab key)
    /// None if this is the head (oldest order)
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    #[inline]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (not part of any price level)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Get the order ID
    #[inline]
    pub fn order_id(&self) -> u64 {
        self.order.id
    }

    /// Get the order price
    #[inline]
    pub fn price(&self) -> u64 {
        self.order.price
    }

    /// Get the resting volume
    #[inline]
    pub fn volume(&self) -> u64 {
        self.order.volume
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn create_test_order(id: u64, price: u64, volume: u64) -> Order {
        Order::new(id, Side::Buy, price, volume, 0)
    }

    #[test]
    fn test_order_node_new() {
        let order = create_test_order(1, 10_000_000_000, 100_000_000);
        let node = OrderNode::new(order.clone());

        assert_eq!(node.order, order);
        assert!(node.next.is_none());
        assert!(node.prev.is_none());
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_order_node_accessors() {
        let order = create_test_order(42, 10_000_000_000, 100_000_000);
        let node = OrderNode::new(order);

        assert_eq!(node.order_id(), 42);
        assert_eq!(node.price(), 10_000_000_000);
        assert_eq!(node.volume(), 100_000_000);
    }

    #[test]
    fn test_order_node_linking() {
        let order = create_test_order(1, 10_000_000_000, 100_000_000);
        let mut node = OrderNode::new(order);

        assert!(node.is_unlinked());

        node.next = Some(2);
        assert!(!node.is_unlinked());

        node.prev = Some(0);
        assert!(!node.is_unlinked());

        // Only one link
        node.next = None;
        assert!(!node.is_unlinked());
    }
}
