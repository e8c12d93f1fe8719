//! Book configuration.
//!
//! Only sizing knobs: the engine has no tunable matching behavior.
//! The embedding service is expected to deserialize this from its own
//! config file.

use serde::{Deserialize, Serialize};

/// Pre-allocation sizes for an [`OrderBook`](crate::OrderBook).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Resting order slots reserved in the arena and the cancel index
    pub order_capacity: usize,

    /// Trades reserved in the outgoing trade log
    pub trade_log_capacity: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            order_capacity: 1024,
            trade_log_capacity: 256,
        }
    }
}

impl BookConfig {
    pub fn with_order_capacity(mut self, order_capacity: usize) -> Self {
        self.order_capacity = order_capacity;
        self
    }

    pub fn with_trade_log_capacity(mut self, trade_log_capacity: usize) -> Self {
        self.trade_log_capacity = trade_log_capacity;
        self
    }
}
