//! Order book storage.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: O(1) insertion and removal of resting orders
//! - **Price levels**: FIFO queues kept in a BTreeMap per side
//! - **Cancel index**: order id to (side, price, slab key)
//!
//! ## Components
//!
//! - [`OrderNode`]: `Order` plus linked-list pointers
//! - [`PriceLevel`]: queue metadata for one price
//! - [`BookSide`]: priority-ordered levels of one side
//! - [`OrderBook`]: the book itself
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Rest order | O(log L) |
//! | Cancel by ID | O(1) avg + O(log L) to find the level |
//! | Best bid/ask | O(log L) |
//! | Match | O(k + m log L) for k fills across m levels |
//!
//! L = number of price levels on the side.

pub mod node;
pub mod level;
pub mod side;
pub mod book;

pub use node::OrderNode;
pub use level::{LevelIter, PriceLevel};
pub use side::{BookSide, LevelKey};
pub use book::{LevelDepth, OrderBook, OrderLocation};
