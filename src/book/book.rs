//! Single-instrument resting-order book.
//!
//! ## Architecture
//!
//! The book uses a hybrid data structure:
//!
//! - **Slab**: Pre-allocated storage for O(1) order node operations
//! - **SideBook (BTreeMap)**: Sorted price levels per side for O(log n)
//!   level lookup and O(1) best bid/ask
//! - **HashMap**: Order ID to slab key mapping for O(1) amend/cancel
//!
//! ## Semantics
//!
//! This is a pure resting-order ledger: it never matches a marketable
//! order against the opposite side and never rejects a crossed insert.
//! Inserts, amends, and cancels are atomic - a failed call leaves the
//! book observably unchanged.
//!
//! ## Example
//!
//! ```
//! use lobcore::book::OrderBook;
//! use lobcore::types::Side;
//!
//! let mut book = OrderBook::with_capacity(10_000);
//!
//! book.add_order(1, Side::Buy, 10_000_000_000, 100_000_000).unwrap();
//! book.add_order(2, Side::Sell, 10_200_000_000, 50_000_000).unwrap();
//!
//! assert_eq!(book.best_bid(), Some(10_000_000_000));
//! assert_eq!(book.best_ask(), Some(10_200_000_000));
//! ```

use std::collections::HashMap;

use slab::Slab;

use crate::book::{OrderNode, SideBook};
use crate::error::BookError;
use crate::types::{BookSnapshot, Order, OrderRequest, Side};

/// Depth-of-book snapshot: up to N best levels per side.
///
/// Bid entries are strictly decreasing in price, ask entries strictly
/// increasing. Each entry is `(price, total_volume)` for one distinct
/// price level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Depth {
    /// Bid levels, best (highest) price first
    pub bids: Vec<(u64, u64)>,
    /// Ask levels, best (lowest) price first
    pub asks: Vec<(u64, u64)>,
}

/// Single-instrument limit order book.
///
/// Owns the slab arena of order nodes, one [`SideBook`] per side, and the
/// order-id index. Not internally synchronized; wrap in
/// [`SharedBook`](crate::book::SharedBook) for concurrent access.
#[derive(Debug)]
pub struct OrderBook {
    /// Pre-allocated order storage
    orders: Slab<OrderNode>,

    /// Bid price levels (best = highest)
    bids: SideBook,

    /// Ask price levels (best = lowest)
    asks: SideBook,

    /// Order ID to slab key mapping (for O(1) amend/cancel)
    order_index: HashMap<u64, usize>,

    /// Next sequence number to assign at insertion
    /// Monotonic for the lifetime of the book; `clear` does not reset it
    next_sequence: u64,

    /// Total number of bid orders
    bid_count: usize,

    /// Total number of ask orders
    ask_count: usize,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self {
            orders: Slab::new(),
            bids: SideBook::new(Side::Buy),
            asks: SideBook::new(Side::Sell),
            order_index: HashMap::new(),
            next_sequence: 1,
            bid_count: 0,
            ask_count: 0,
        }
    }

    /// Create a book with pre-allocated order capacity
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(order_capacity),
            bids: SideBook::new(Side::Buy),
            asks: SideBook::new(Side::Sell),
            order_index: HashMap::with_capacity(order_capacity),
            next_sequence: 1,
            bid_count: 0,
            ask_count: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Get the total number of resting orders
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Get the number of bid orders
    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bid_count
    }

    /// Get the number of ask orders
    #[inline]
    pub fn ask_count(&self) -> usize {
        self.ask_count
    }

    /// Check if the book is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the number of bid price levels
    #[inline]
    pub fn bid_levels(&self) -> usize {
        self.bids.len()
    }

    /// Get the number of ask price levels
    #[inline]
    pub fn ask_levels(&self) -> usize {
        self.asks.len()
    }

    /// The next sequence number the book will assign
    #[inline]
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Check if an order is resting
    #[inline]
    pub fn contains_order(&self, order_id: u64) -> bool {
        self.order_index.contains_key(&order_id)
    }

    /// Get a reference to a resting order by its id
    pub fn get_order(&self, order_id: u64) -> Option<&Order> {
        let key = *self.order_index.get(&order_id)?;
        self.orders.get(key).map(|node| &node.order)
    }

    #[inline]
    fn side_book_mut(&mut self, side: Side) -> &mut SideBook {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Insert a new resting order.
    ///
    /// Creates the price level if absent, appends the order at the level
    /// tail (lowest time priority at that price), and indexes the id.
    /// The book assigns the order its sequence number.
    ///
    /// # Returns
    ///
    /// The assigned sequence number.
    ///
    /// # Errors
    ///
    /// - [`BookError::DuplicateOrderId`] if `order_id` is already resting
    /// - [`BookError::InvalidArgument`] if `price` or `volume` is zero
    ///
    /// Validation happens before any mutation, so a failed insert leaves
    /// the book untouched.
    pub fn add_order(
        &mut self,
        order_id: u64,
        side: Side,
        price: u64,
        volume: u64,
    ) -> Result<u64, BookError> {
        if price == 0 {
            return Err(BookError::invalid("price"));
        }
        if volume == 0 {
            return Err(BookError::invalid("volume"));
        }
        if self.order_index.contains_key(&order_id) {
            return Err(BookError::DuplicateOrderId(order_id));
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let order = Order::new(order_id, side, price, volume, sequence);
        let key = self.orders.insert(OrderNode::new(order));
        self.order_index.insert(order_id, key);

        {
            let Self {
                orders, bids, asks, ..
            } = self;
            let side_book = match side {
                Side::Buy => bids,
                Side::Sell => asks,
            };
            side_book.level_or_insert(price).push_back(key, orders);
        }

        match side {
            Side::Buy => self.bid_count += 1,
            Side::Sell => self.ask_count += 1,
        }

        Ok(sequence)
    }

    /// Insert from an [`OrderRequest`]
    pub fn add_request(&mut self, request: &OrderRequest) -> Result<u64, BookError> {
        self.add_order(
            request.order_id,
            request.side,
            request.price,
            request.volume,
        )
    }

    /// Amend a resting order's volume in place.
    ///
    /// The order keeps its sequence number and queue position - an amend
    /// never requeues, whether the volume shrinks or grows. The owning
    /// level's aggregate is adjusted by the delta.
    ///
    /// # Errors
    ///
    /// - [`BookError::OrderNotFound`] if `order_id` is unknown
    /// - [`BookError::InvalidArgument`] if `new_volume` is zero
    pub fn modify_order(&mut self, order_id: u64, new_volume: u64) -> Result<(), BookError> {
        if new_volume == 0 {
            return Err(BookError::invalid("volume"));
        }
        let key = *self
            .order_index
            .get(&order_id)
            .ok_or(BookError::OrderNotFound(order_id))?;

        let node = self.orders.get_mut(key).expect("indexed order in slab");
        let old_volume = node.order.volume;
        let price = node.order.price;
        let side = node.order.side();
        node.order.volume = new_volume;

        let level = self
            .side_book_mut(side)
            .level_mut(price)
            .expect("level for resting order");
        level.adjust_volume(old_volume, new_volume);

        Ok(())
    }

    /// Cancel a resting order.
    ///
    /// Unlinks the order from its level queue, drops the level if it
    /// becomes empty, and removes the id from the index.
    ///
    /// # Returns
    ///
    /// The removed order.
    ///
    /// # Errors
    ///
    /// [`BookError::OrderNotFound`] if `order_id` is unknown.
    pub fn delete_order(&mut self, order_id: u64) -> Result<Order, BookError> {
        let key = *self
            .order_index
            .get(&order_id)
            .ok_or(BookError::OrderNotFound(order_id))?;

        let node = self.orders.get(key).expect("indexed order in slab");
        let price = node.order.price;
        let side = node.order.side();

        {
            let Self {
                orders, bids, asks, ..
            } = self;
            let side_book = match side {
                Side::Buy => bids,
                Side::Sell => asks,
            };
            let level = side_book.level_mut(price).expect("level for resting order");
            level.remove(key, orders);
            side_book.remove_if_empty(price);
        }

        match side {
            Side::Buy => self.bid_count -= 1,
            Side::Sell => self.ask_count -= 1,
        }

        self.order_index.remove(&order_id);
        Ok(self.orders.remove(key).order)
    }

    /// Reset the book to empty.
    ///
    /// Drops all orders, levels, and index entries. The sequence counter
    /// is NOT reset: monotonicity is a lifetime property of the book
    /// instance, not of its visible content.
    pub fn clear(&mut self) {
        self.orders.clear();
        self.bids.clear();
        self.asks.clear();
        self.order_index.clear();
        self.bid_count = 0;
        self.ask_count = 0;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get the best bid price (highest resting buy price)
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.best_price()
    }

    /// Get the best ask price (lowest resting sell price)
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.best_price()
    }

    /// Get the spread (best_ask - best_bid)
    ///
    /// Returns None if either side is empty or the book is crossed.
    /// A crossed book is legal here - this engine never matches.
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    /// Depth-of-book: up to `levels` best `(price, total_volume)` pairs
    /// per side, bids descending and asks ascending.
    ///
    /// # Errors
    ///
    /// [`BookError::InvalidArgument`] if `levels` is zero.
    pub fn depth(&self, levels: usize) -> Result<Depth, BookError> {
        if levels == 0 {
            return Err(BookError::invalid("levels"));
        }
        Ok(Depth {
            bids: self.bids.depth(levels),
            asks: self.asks.depth(levels),
        })
    }

    // ========================================================================
    // Snapshot Export
    // ========================================================================

    /// All resting orders in canonical order: bids best-to-worst, then
    /// asks best-to-worst, FIFO within each level.
    fn canonical_orders(&self) -> Vec<Order> {
        let mut out = Vec::with_capacity(self.orders.len());
        for side_book in [&self.bids, &self.asks] {
            for level in side_book.iter_best_first() {
                let mut cursor = level.peek_head();
                while let Some(key) = cursor {
                    let node = self.orders.get(key).expect("linked order in slab");
                    out.push(node.order.clone());
                    cursor = node.next;
                }
            }
        }
        out
    }

    /// Export a deterministic snapshot of the resting book.
    ///
    /// This is the surface the persistence layer consumes periodically.
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot::new(self.next_sequence, self.canonical_orders())
    }

    /// SHA-256 digest of the canonical order stream.
    ///
    /// Two books with identical resting state and priority order produce
    /// identical digests.
    pub fn state_digest(&self) -> [u8; 32] {
        crate::types::digest_orders(&self.canonical_orders())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
