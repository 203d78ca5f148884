//! Order book module for the lobcore engine.
//!
//! ## Architecture
//!
//! The book is a resting-order ledger (no matching) built from:
//!
//! - **Slab-based storage**: O(1) order node insertion, removal, lookup
//! - **Side indexes**: price levels per side in a BTreeMap, ordering
//!   direction configured by the side
//! - **Order index**: order id to slab key for O(1) amend/cancel
//! - **Price-time priority**: FIFO ordering at each price level
//!
//! ## Components
//!
//! - [`OrderNode`]: Wrapper around `Order` with linked-list pointers
//! - [`PriceLevel`]: FIFO queue of orders at a single price point
//! - [`SideBook`]: Price-ordered index of one side's levels
//! - [`OrderBook`]: The single-instrument book and its command/query API
//! - [`SharedBook`]: Thread-safe handle serializing mutations
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert order | O(log #levels) |
//! | Amend by id | O(1) after index hit |
//! | Cancel by id | O(1) after index hit |
//! | Best bid/ask | O(1) |
//! | Depth(n) | O(n) |
//!
//! ## Example
//!
//! ```
//! use lobcore::book::OrderBook;
//! use lobcore::types::Side;
//!
//! let mut book = OrderBook::with_capacity(10_000);
//! book.add_order(1, Side::Buy, 10_000_000_000, 100_000_000).unwrap();
//!
//! assert_eq!(book.best_bid(), Some(10_000_000_000));
//! ```

pub mod batch;
pub mod book;
pub mod level;
pub mod node;
pub mod shared;
pub mod side;

pub use batch::{BatchPolicy, BatchReport};
pub use book::{Depth, OrderBook};
pub use level::PriceLevel;
pub use node::OrderNode;
pub use shared::SharedBook;
pub use side::SideBook;
