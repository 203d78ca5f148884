//! Deterministic snapshot export of the resting book.
//!
//! A [`BookSnapshot`] is the surface the persistence layer consumes: every
//! resting order in canonical iteration order (bids best-to-worst, then asks
//! best-to-worst, FIFO within each level) plus a SHA-256 digest over the SSZ
//! encodings of those orders. Two books holding the same resting orders in
//! the same priority order always produce the same digest.

use sha2::{Digest, Sha256};

use crate::types::Order;

/// A point-in-time export of all resting orders.
///
/// ## Digest
///
/// The 32-byte digest is SHA-256 over the concatenated SSZ encodings of the
/// orders, in canonical order. It can be compared across processes without
/// shipping the orders themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSnapshot {
    /// Value of the book's sequence counter when the snapshot was taken
    pub taken_at_sequence: u64,

    /// All resting orders in canonical order
    /// (bids best-to-worst then asks best-to-worst, FIFO within a level)
    pub orders: Vec<Order>,

    /// SHA-256 digest of the SSZ-encoded orders
    pub digest: [u8; 32],
}

impl BookSnapshot {
    /// Build a snapshot from orders already in canonical order
    pub fn new(taken_at_sequence: u64, orders: Vec<Order>) -> Self {
        let digest = digest_orders(&orders);
        Self {
            taken_at_sequence,
            orders,
            digest,
        }
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Check if the snapshot holds no resting orders
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Compute the SHA-256 digest of a sequence of orders.
///
/// Each order is SSZ-serialized (33 fixed bytes) and fed to the hasher in
/// slice order, so the digest commits to both content and priority order.
pub fn digest_orders(orders: &[Order]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for order in orders {
        // Fixed-size container of uints - serialization cannot fail
        let bytes = ssz_rs::serialize(order).expect("fixed-size SSZ serialization");
        hasher.update(&bytes);
    }
    let result = hasher.finalize();

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

// ============================================================================
// Unit Tests
// ============================================================================
