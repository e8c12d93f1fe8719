//! Matching rules.
//!
//! ## Design Principles
//!
//! 1. **Price-Time Priority**: Best price first, then FIFO within a level
//! 2. **Maker Price**: Every trade prints at the resting order's price
//! 3. **Synchronous Execution**: A match runs to completion, bounded by the
//!    resting quantity it can consume
//!
//! ## Matching Rules
//!
//! - **Buy orders** match against asks (lowest price first)
//! - **Sell orders** match against bids (highest price first)
//! - **Market orders** cross any non-empty opposite side
//! - **Partial fills** leave the maker at the head of its level
//! - **Leftovers** rest only for GFD limit orders
//!
//! The entry points live on [`OrderBook`](crate::OrderBook); this module
//! holds the loop and the crossing predicate it shares with the rest
//! decision.

pub mod crossing;
pub(crate) mod matcher;
