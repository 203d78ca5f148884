//! Thread-safe handle around an [`OrderBook`].
//!
//! ## Design
//!
//! All four mutating operations (insert, amend, cancel, batch) are
//! critical sections serialized behind one `parking_lot::RwLock`. The
//! write lock is what makes price-time priority deterministic: sequence
//! assignment and queue position are defined by the order in which
//! submitters win the lock, so every committed history is some valid
//! total ordering of the mutations.
//!
//! Best bid and best ask are additionally published to lock-free atomic
//! cells on every mutation, before the write lock is released. The
//! hot read path (`best_bid`/`best_ask`) therefore never contends with
//! writers; only multi-level queries (`depth`, `snapshot`) take the
//! brief shared read lock.
//!
//! Logging lives only in this layer. The inner book stays log-free so
//! the structural hot path does no I/O.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::book::{BatchPolicy, BatchReport, Depth, OrderBook};
use crate::error::BookError;
use crate::types::{BookSnapshot, Order, OrderRequest, Side};

/// Sentinel for an empty side in the published best-price cells.
/// Prices are strictly positive, so zero is never a real price.
const NO_PRICE: u64 = 0;

#[derive(Debug)]
struct Inner {
    book: RwLock<OrderBook>,
    best_bid: AtomicU64,
    best_ask: AtomicU64,
}

/// Clone-able, thread-safe handle to a single order book.
///
/// Cloning the handle shares the underlying book (`Arc` semantics).
///
/// # Example
///
/// ```
/// use lobcore::book::SharedBook;
/// use lobcore::types::Side;
///
/// let book = SharedBook::new();
/// let reader = book.clone();
///
/// book.add_order(1, Side::Buy, 10_000_000_000, 100_000_000).unwrap();
/// assert_eq!(reader.best_bid(), Some(10_000_000_000));
/// ```
#[derive(Debug, Clone)]
pub struct SharedBook {
    inner: Arc<Inner>,
}

impl Default for SharedBook {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedBook {
    /// Create a handle to a new empty book
    pub fn new() -> Self {
        Self::from_book(OrderBook::new())
    }

    /// Create a handle with pre-allocated order capacity
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self::from_book(OrderBook::with_capacity(order_capacity))
    }

    fn from_book(book: OrderBook) -> Self {
        Self {
            inner: Arc::new(Inner {
                book: RwLock::new(book),
                best_bid: AtomicU64::new(NO_PRICE),
                best_ask: AtomicU64::new(NO_PRICE),
            }),
        }
    }

    /// Publish best prices while still holding the write lock, so readers
    /// only ever observe a committed state.
    fn publish(&self, book: &OrderBook) {
        self.inner
            .best_bid
            .store(book.best_bid().unwrap_or(NO_PRICE), Ordering::Release);
        self.inner
            .best_ask
            .store(book.best_ask().unwrap_or(NO_PRICE), Ordering::Release);
    }

    // ========================================================================
    // Commands (serialized behind the write lock)
    // ========================================================================

    /// Insert a new resting order. See [`OrderBook::add_order`].
    pub fn add_order(
        &self,
        order_id: u64,
        side: Side,
        price: u64,
        volume: u64,
    ) -> Result<u64, BookError> {
        let mut book = self.inner.book.write();
        let sequence = book.add_order(order_id, side, price, volume)?;
        self.publish(&book);
        debug!(order_id, ?side, price, volume, sequence, "order added");
        Ok(sequence)
    }

    /// Amend a resting order's volume. See [`OrderBook::modify_order`].
    pub fn modify_order(&self, order_id: u64, new_volume: u64) -> Result<(), BookError> {
        let mut book = self.inner.book.write();
        book.modify_order(order_id, new_volume)?;
        // An amend cannot move a level, but republishing keeps the
        // published cells current after every mutation
        self.publish(&book);
        debug!(order_id, new_volume, "order amended");
        Ok(())
    }

    /// Cancel a resting order. See [`OrderBook::delete_order`].
    pub fn delete_order(&self, order_id: u64) -> Result<Order, BookError> {
        let mut book = self.inner.book.write();
        let order = book.delete_order(order_id)?;
        self.publish(&book);
        debug!(order_id, "order cancelled");
        Ok(order)
    }

    /// Insert a batch of orders as one critical section, preserving
    /// input-order time priority. See [`OrderBook::batch_add`].
    pub fn batch_add(
        &self,
        requests: &[OrderRequest],
        policy: BatchPolicy,
    ) -> Result<BatchReport, BookError> {
        let mut book = self.inner.book.write();
        let report = book.batch_add(requests, policy)?;
        self.publish(&book);
        debug!(
            accepted = report.accepted,
            rejected = report.rejected.len(),
            "batch applied"
        );
        Ok(report)
    }

    /// Reset the book to empty (sequence counter survives)
    pub fn clear(&self) {
        let mut book = self.inner.book.write();
        book.clear();
        self.publish(&book);
        debug!("book cleared");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Best bid price, read from the lock-free published cell
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        match self.inner.best_bid.load(Ordering::Acquire) {
            NO_PRICE => None,
            price => Some(price),
        }
    }

    /// Best ask price, read from the lock-free published cell
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        match self.inner.best_ask.load(Ordering::Acquire) {
            NO_PRICE => None,
            price => Some(price),
        }
    }

    /// Depth-of-book under the shared read lock
    pub fn depth(&self, levels: usize) -> Result<Depth, BookError> {
        self.inner.book.read().depth(levels)
    }

    /// Deterministic snapshot export under the shared read lock
    pub fn snapshot(&self) -> BookSnapshot {
        self.inner.book.read().snapshot()
    }

    /// SHA-256 digest of the resting state
    pub fn state_digest(&self) -> [u8; 32] {
        self.inner.book.read().state_digest()
    }

    /// Total number of resting orders
    pub fn order_count(&self) -> usize {
        self.inner.book.read().order_count()
    }

    /// Check if an order is resting
    pub fn contains_order(&self, order_id: u64) -> bool {
        self.inner.book.read().contains_order(order_id)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
