//! Core data types for lobcore
//!
//! All prices and volumes use fixed-point representation (scaled by 10^8).
//! `Order` implements SSZ serialization for deterministic snapshot export.
//!
//! ## Types
//!
//! - [`Order`]: A resting limit order in the book
//! - [`OrderRequest`]: A caller-submitted insert, before sequence assignment
//! - [`Side`]: Buy or Sell
//! - [`BookSnapshot`]: Deterministic export of all resting orders
//!
//! ## Fixed-Point Arithmetic
//!
//! All prices and volumes are stored as `u64` scaled by 10^8.
//! Example: 100.12345678 is stored as 10_012_345_678u64

mod order;
mod snapshot;
pub mod price;

// Re-export all types at module level
pub use order::{Order, OrderRequest, Side};
pub use snapshot::{digest_orders, BookSnapshot};
