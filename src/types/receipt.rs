//! Book receipt: a summary of engine activity plus a state root.
//!
//! The state root is a SHA-256 hash over the SSZ encoding of every resting
//! order in book priority order. Two books fed the same input sequence
//! produce the same root.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

/// Summary of an order book at a point in time.
///
/// ## Example
///
/// ```
/// use ob_engine::types::BookReceipt;
///
/// let receipt = BookReceipt::new(10, 4, 3, BookReceipt::compute_hash(b"state"));
/// assert_eq!(receipt.state_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct BookReceipt {
    /// Orders accepted by `submit` since the book was created
    pub orders_submitted: u64,

    /// Trades executed since the book was created (not reset by clearing the log)
    pub trades_executed: u64,

    /// Orders currently resting
    pub resting_orders: u64,

    /// SHA-256 over the encoded resting orders
    pub state_root: [u8; 32],
}

impl BookReceipt {
    pub fn new(
        orders_submitted: u64,
        trades_executed: u64,
        resting_orders: u64,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            orders_submitted,
            trades_executed,
            resting_orders,
            state_root,
        }
    }

    /// Compute SHA-256 hash of the given data
    pub fn compute_hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Average number of trades per submitted order. A sweep across several
    /// makers counts once per fill, so this can exceed 1.0.
    ///
    /// Returns None if no orders were submitted.
    pub fn trades_per_order(&self) -> Option<f64> {
        if self.orders_submitted == 0 {
            None
        } else {
            Some(self.trades_executed as f64 / self.orders_submitted as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
