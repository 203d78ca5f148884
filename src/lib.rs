//! # lobcore
//!
//! Single-instrument limit order book engine: an in-memory resting-order
//! ledger with price-time priority, O(1)-class amend/cancel, and
//! deterministic snapshot export.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Side, BookSnapshot)
//! - **Book**: Slab-backed book with per-side price indexes and a
//!   thread-safe shared handle
//! - **Error**: The three caller-visible failure kinds
//!
//! ## Design Principles
//!
//! 1. **Resting ledger only**: No matching - a crossed book is legal
//! 2. **No Floating Point**: All values are fixed-point u64 (10^8 scaling)
//! 3. **Pre-allocated Memory**: Slab allocation for O(1) node operations
//! 4. **Atomic operations**: A failed call leaves the book unchanged
//! 5. **Serialized mutations**: Price-time priority is defined by the
//!    order in which submitters win the book's write lock

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, BookSnapshot, fixed-point helpers
pub mod types;

/// The order book: levels, side indexes, the book, the shared handle
pub mod book;

/// Caller-visible error kinds
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use book::{BatchPolicy, BatchReport, Depth, OrderBook, PriceLevel, SharedBook};
pub use error::BookError;
pub use types::{BookSnapshot, Order, OrderRequest, Side};
