//! Order types for the lobcore resting-order book.
//!
//! ## SSZ Serialization
//!
//! `Order` derives `SimpleSerialize` from ssz_rs so that snapshot exports
//! have a deterministic byte encoding:
//! - Basic types (u64, u8): Direct little-endian encoding
//! - Fixed-size composites: Concatenated little-endian fields
//!
//! ## Fixed-Point Representation
//!
//! Prices and volumes are stored as u64 scaled by 10^8 (SCALE constant).
//! This provides 8 decimal places of precision without floating-point errors.

use ssz_rs::prelude::*;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Represented as u8 for SSZ compatibility:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid) - resting interest to purchase
    #[default]
    Buy,
    /// Sell order (ask) - resting interest to sell
    Sell,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order in the book.
///
/// ## Fields
///
/// All price/volume fields use fixed-point representation (scaled by 10^8).
/// `id` is supplied by the caller and unique across both sides; `sequence`
/// is assigned by the book at insertion and is the FIFO tie-break within a
/// price level. Side and price never change after insertion; volume changes
/// only through an amend.
///
/// ## Example
///
/// ```
/// use lobcore::types::{Order, Side};
///
/// // A bid for 1.0 at 100.00, third insertion into its book
/// let order = Order::new(7, Side::Buy, 10_000_000_000, 100_000_000, 3);
/// assert_eq!(order.side(), Side::Buy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Caller-supplied unique order identifier
    pub id: u64,

    /// Order side as u8 (0=Buy, 1=Sell)
    /// Stored as u8 for SSZ compatibility
    pub side_raw: u8,

    /// Price in fixed-point (scaled by 10^8)
    /// Example: 100.00000000 = 10_000_000_000u64
    pub price: u64,

    /// Remaining volume in fixed-point (scaled by 10^8)
    /// The only field an amend may change
    pub volume: u64,

    /// Insertion sequence number assigned by the book
    /// Monotonic per book instance, never reused, never reset
    pub sequence: u64,
}

impl Order {
    /// Create a new resting order
    ///
    /// # Arguments
    ///
    /// * `id` - Caller-supplied unique order identifier
    /// * `side` - Buy or Sell
    /// * `price` - Price in fixed-point (scaled by 10^8)
    /// * `volume` - Volume in fixed-point (scaled by 10^8)
    /// * `sequence` - Insertion sequence assigned by the book
    pub fn new(id: u64, side: Side, price: u64, volume: u64, sequence: u64) -> Self {
        Self {
            id,
            side_raw: side.to_u8(),
            price,
            volume,
            sequence,
        }
    }

    /// Get the order side
    pub fn side(&self) -> Side {
        Side::from_u8(self.side_raw).unwrap_or(Side::Buy)
    }
}

// ============================================================================
// OrderRequest struct
// ============================================================================

/// An insert request as submitted by a caller, before the book has
/// assigned a sequence number.
///
/// Used by single inserts at the API boundary and by batch submission,
/// where relative position in the request slice defines time priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRequest {
    /// Caller-supplied unique order identifier
    pub order_id: u64,
    /// Buy or Sell
    pub side: Side,
    /// Price in fixed-point (scaled by 10^8)
    pub price: u64,
    /// Volume in fixed-point (scaled by 10^8)
    pub volume: u64,
}

impl OrderRequest {
    /// Create a new insert request
    pub fn new(order_id: u64, side: Side, price: u64, volume: u64) -> Self {
        Self {
            order_id,
            side,
            price,
            volume,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
