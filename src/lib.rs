//! # ob-engine
//!
//! Limit order book matching engine for a single instrument.
//!
//! ## Architecture
//!
//! - **Types**: Order, Trade, BookReceipt
//! - **OrderBook**: price levels in a slab arena plus an O(1) cancel index
//! - **Engine**: the matching loop and its crossing predicate
//!
//! ## Rules
//!
//! 1. **Price-time priority**: best price first, oldest order first within
//!    a price
//! 2. **Maker price**: trades print at the resting order's price
//! 3. **Time in force**: GFD limit leftovers rest, IOC and Market
//!    leftovers are discarded
//! 4. **Synchronous**: no async, no locks; callers serialize access
//!
//! ## Example
//!
//! ```
//! use ob_engine::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new();
//! book.submit(Order::limit(10, Side::Sell, 105, 5));
//! book.submit(Order::limit(11, Side::Sell, 105, 7));
//! book.submit(Order::limit(12, Side::Buy, 105, 8));
//!
//! let makers: Vec<u64> = book.trades().iter().map(|t| t.maker_id).collect();
//! assert_eq!(makers, vec![10, 11]);
//! assert_eq!(book.total_qty_at(Side::Sell, 105), 4);
//! ```

pub mod config;
pub mod error;

/// Core data types: Order, Trade, BookReceipt
pub mod types;

/// Order book: levels, arena, cancel index
pub mod orderbook;

/// Matching loop and crossing rules
pub mod engine;

pub use config::BookConfig;
pub use error::{InvariantViolation, OrderError};
pub use orderbook::{LevelDepth, OrderBook, OrderLocation};
pub use types::{BookReceipt, Order, OrderType, Side, TimeInForce, Trade};
