//! Ordered batch insertion.
//!
//! A batch applies each [`OrderRequest`] with the same semantics as a
//! single insert, in slice order, so relative time priority within the
//! batch matches input order.
//!
//! Two failure policies are supported:
//!
//! - [`BatchPolicy::FailSoft`] (default): a failing element is reported
//!   and skipped; elements already applied stay applied.
//! - [`BatchPolicy::AllOrNothing`]: the whole batch is validated up front
//!   (including duplicate ids within the batch itself) and nothing is
//!   applied if any element would fail.

use std::collections::HashSet;

use crate::book::OrderBook;
use crate::error::BookError;
use crate::types::OrderRequest;

/// What a batch does when one of its elements would fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Report per-element failures, keep already-applied elements
    #[default]
    FailSoft,
    /// Apply nothing unless every element would succeed
    AllOrNothing,
}

/// Outcome of a batch insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    /// Number of orders inserted
    pub accepted: usize,
    /// Rejected elements as `(index into the request slice, error)`
    pub rejected: Vec<(usize, BookError)>,
}

impl BatchReport {
    /// Check if every element was accepted
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl OrderBook {
    /// Insert a sequence of orders as one logical unit.
    ///
    /// Elements are applied in slice order; sequence numbers within the
    /// batch therefore follow input order exactly.
    ///
    /// # Errors
    ///
    /// Under [`BatchPolicy::AllOrNothing`], returns the first element's
    /// error and applies nothing. Under [`BatchPolicy::FailSoft`] the call
    /// itself always succeeds; failures are listed in the report.
    pub fn batch_add(
        &mut self,
        requests: &[OrderRequest],
        policy: BatchPolicy,
    ) -> Result<BatchReport, BookError> {
        if policy == BatchPolicy::AllOrNothing {
            self.validate_batch(requests)?;
        }

        let mut report = BatchReport::default();
        for (index, request) in requests.iter().enumerate() {
            match self.add_request(request) {
                Ok(_) => report.accepted += 1,
                Err(err) => report.rejected.push((index, err)),
            }
        }
        Ok(report)
    }

    /// Check that every element of a batch would insert cleanly, without
    /// mutating the book. Catches invalid values, ids already resting,
    /// and ids duplicated inside the batch itself.
    fn validate_batch(&self, requests: &[OrderRequest]) -> Result<(), BookError> {
        let mut seen = HashSet::with_capacity(requests.len());
        for request in requests {
            if request.price == 0 {
                return Err(BookError::invalid("price"));
            }
            if request.volume == 0 {
                return Err(BookError::invalid("volume"));
            }
            if self.contains_order(request.order_id) || !seen.insert(request.order_id) {
                return Err(BookError::DuplicateOrderId(request.order_id));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn req(id: u64, side: Side, price: u64, volume: u64) -> OrderRequest {
        OrderRequest::new(id, side, price, volume)
    }

    #[test]
    fn test_batch_clean() {
        let mut book = OrderBook::new();

        let report = book
            .batch_add(
                &[
                    req(1, Side::Buy, 10_000_000_000, 100_000_000),
                    req(2, Side::Buy, 10_000_000_000, 200_000_000),
                    req(3, Side::Sell, 10_200_000_000, 50_000_000),
                ],
                BatchPolicy::FailSoft,
            )
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(report.accepted, 3);
        assert_eq!(book.order_count(), 3);
    }

    #[test]
    fn test_batch_preserves_input_order_priority() {
        let mut book = OrderBook::new();

        book.batch_add(
            &[
                req(10, Side::Buy, 10_000_000_000, 100_000_000),
                req(11, Side::Buy, 10_000_000_000, 100_000_000),
                req(12, Side::Buy, 10_000_000_000, 100_000_000),
            ],
            BatchPolicy::FailSoft,
        )
        .unwrap();

        // FIFO within the level follows batch input order
        let ids: Vec<u64> = book.snapshot().orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);

        let s10 = book.get_order(10).unwrap().sequence;
        let s12 = book.get_order(12).unwrap().sequence;
        assert!(s10 < s12);
    }

    #[test]
    fn test_batch_fail_soft() {
        let mut book = OrderBook::new();
        book.add_order(2, Side::Sell, 10_200_000_000, 50_000_000)
            .unwrap();

        let report = book
            .batch_add(
                &[
                    req(1, Side::Buy, 10_000_000_000, 100_000_000),
                    req(2, Side::Buy, 10_000_000_000, 100_000_000), // already resting
                    req(3, Side::Buy, 10_000_000_000, 0),           // invalid volume
                    req(4, Side::Buy, 9_900_000_000, 100_000_000),
                ],
                BatchPolicy::FailSoft,
            )
            .unwrap();

        assert_eq!(report.accepted, 2);
        assert_eq!(
            report.rejected,
            vec![
                (1, BookError::DuplicateOrderId(2)),
                (2, BookError::invalid("volume")),
            ]
        );

        // Applied elements stay applied
        assert!(book.contains_order(1));
        assert!(book.contains_order(4));
        assert_eq!(book.order_count(), 3);
    }

    #[test]
    fn test_batch_all_or_nothing_rolls_back_nothing() {
        let mut book = OrderBook::new();
        let digest = book.state_digest();
        let next = book.next_sequence();

        let err = book
            .batch_add(
                &[
                    req(1, Side::Buy, 10_000_000_000, 100_000_000),
                    req(1, Side::Buy, 9_900_000_000, 100_000_000), // dup within batch
                ],
                BatchPolicy::AllOrNothing,
            )
            .unwrap_err();

        assert_eq!(err, BookError::DuplicateOrderId(1));
        assert!(book.is_empty());
        assert_eq!(book.state_digest(), digest);
        // Pre-validation never burns sequence numbers
        assert_eq!(book.next_sequence(), next);
    }

    #[test]
    fn test_batch_all_or_nothing_checks_resting_ids() {
        let mut book = OrderBook::new();
        book.add_order(7, Side::Sell, 10_200_000_000, 50_000_000)
            .unwrap();

        let err = book
            .batch_add(
                &[
                    req(8, Side::Buy, 10_000_000_000, 100_000_000),
                    req(7, Side::Buy, 10_000_000_000, 100_000_000),
                ],
                BatchPolicy::AllOrNothing,
            )
            .unwrap_err();

        assert_eq!(err, BookError::DuplicateOrderId(7));
        assert_eq!(book.order_count(), 1);
        assert!(!book.contains_order(8));
    }

    #[test]
    fn test_batch_all_or_nothing_clean() {
        let mut book = OrderBook::new();

        let report = book
            .batch_add(
                &[
                    req(1, Side::Buy, 10_000_000_000, 100_000_000),
                    req(2, Side::Sell, 10_200_000_000, 50_000_000),
                ],
                BatchPolicy::AllOrNothing,
            )
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(report.accepted, 2);
        assert_eq!(book.order_count(), 2);
    }

    #[test]
    fn test_empty_batch() {
        let mut book = OrderBook::new();
        let report = book.batch_add(&[], BatchPolicy::AllOrNothing).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.accepted, 0);
    }
}
