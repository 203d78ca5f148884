//! Error types for the lobcore crate.
//!
//! Every failure the engine can raise is local, synchronous, and caller
//! visible. A failed call never leaves the book partially mutated, and no
//! error is fatal: the book remains usable after any failure. Recovery
//! (e.g. retrying with a fresh order id) is entirely the caller's concern.

use thiserror::Error;

/// Errors raised by order book operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookError {
    /// An insert supplied an order id that already resolves to a resting order
    #[error("order {0} already exists")]
    DuplicateOrderId(u64),

    /// An amend or cancel named an order id unknown to the book
    #[error("order {0} not found")]
    OrderNotFound(u64),

    /// A non-positive price, volume, or depth bound was supplied
    #[error("invalid {field}: must be strictly positive")]
    InvalidArgument {
        /// Which argument failed validation
        field: &'static str,
    },
}

impl BookError {
    /// Shorthand for the invalid-argument variant
    pub(crate) fn invalid(field: &'static str) -> Self {
        BookError::InvalidArgument { field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let err = BookError::DuplicateOrderId(42);
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_not_found_display() {
        let err = BookError::OrderNotFound(7);
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = BookError::invalid("volume");
        assert!(err.to_string().contains("volume"));
        assert!(err.to_string().contains("strictly positive"));
    }
}
