//! Core data types for the order book
//!
//! All types implement SSZ serialization for deterministic encoding.
//! Prices are integer ticks, quantities integer lots, both `u64`.
//!
//! ## Types
//!
//! - [`Order`]: An order submitted to the book
//! - [`Side`], [`OrderType`], [`TimeInForce`]: Order attributes
//! - [`Trade`]: A fill between a maker and a taker
//! - [`BookReceipt`]: Activity summary with a state root

mod order;
mod trade;
mod receipt;

pub use order::{Order, OrderType, Side, TimeInForce};
pub use trade::Trade;
pub use receipt::BookReceipt;
