//! Price-ordered index of the levels on one side of the book.
//!
//! ## Design
//!
//! A `SideBook` keys its price levels in a single ascending `BTreeMap` and
//! encodes the ordering direction as configuration rather than duplicated
//! logic: bids take their best from `last_key_value` and iterate in
//! reverse, asks take their best from `first_key_value` and iterate
//! forward. Level lookup, insertion, and removal are O(log #levels);
//! the best price is O(1) off the tree's end.

use std::collections::BTreeMap;

use crate::book::PriceLevel;
use crate::types::Side;

/// The price levels of one side (bids or asks), best-price-ordered.
#[derive(Debug, Clone)]
pub struct SideBook {
    /// Which side this index serves; fixes the ordering direction
    side: Side,

    /// Price levels keyed by price, ascending
    levels: BTreeMap<u64, PriceLevel>,
}

impl SideBook {
    /// Create an empty index for the given side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// The side this index serves
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of distinct price levels
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if the side holds no levels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the best price (highest for bids, lowest for asks)
    #[inline]
    pub fn best_price(&self) -> Option<u64> {
        match self.side {
            Side::Buy => self.levels.last_key_value().map(|(&p, _)| p),
            Side::Sell => self.levels.first_key_value().map(|(&p, _)| p),
        }
    }

    /// Get the level at a price, if present
    #[inline]
    pub fn level(&self, price: u64) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    /// Get the level at a price (mutable), if present
    #[inline]
    pub fn level_mut(&mut self, price: u64) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Get the level at a price, creating an empty one in sorted position
    /// if absent
    pub fn level_or_insert(&mut self, price: u64) -> &mut PriceLevel {
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
    }

    /// Remove the level at a price if it has no resting orders
    ///
    /// No-op when the level is absent or still populated - callers never
    /// delete a non-empty level directly.
    pub fn remove_if_empty(&mut self, price: u64) {
        if let Some(level) = self.levels.get(&price) {
            if level.is_empty() {
                self.levels.remove(&price);
            }
        }
    }

    /// Iterate levels best-to-worst
    pub fn iter_best_first(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// Collect up to `n` `(price, total_volume)` pairs, best-to-worst
    pub fn depth(&self, n: usize) -> Vec<(u64, u64)> {
        self.iter_best_first()
            .take(n)
            .map(|level| (level.price, level.total_volume))
            .collect()
    }

    /// Drop all levels
    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
