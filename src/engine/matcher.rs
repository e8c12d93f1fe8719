//! The matching loop.
//!
//! Drains the best opposite level from the head until the taker is
//! exhausted or no longer crosses. Emptied levels are dropped by
//! `remove_resting`, so the next pass sees the next best price.

use tracing::trace;

use crate::engine::crossing;
use crate::orderbook::{OrderBook, OrderLocation};
use crate::types::Order;

/// Match `taker` against the opposite side of `book`.
///
/// Appends one trade per fill to the book's trade log and reduces
/// `taker.quantity` in place.
///
/// # Returns
///
/// The taker's open quantity after matching
pub(crate) fn match_incoming(book: &mut OrderBook, taker: &mut Order) -> u64 {
    let opposite = taker.side().opposite();

    while taker.quantity > 0 {
        let side = book.side(opposite);
        if !crossing::crosses(taker, side.best_price()) {
            break;
        }
        let Some(maker_key) = side.best_level().and_then(|level| level.peek_head()) else {
            break;
        };

        let maker = &mut book.orders[maker_key];
        let fill = taker.quantity.min(maker.quantity());
        maker.fill(fill);
        taker.fill(fill);

        let maker_id = maker.order_id();
        let price = maker.price();
        let maker_done = maker.is_filled();

        trace!(maker_id, taker_id = taker.id, price, quantity = fill, "fill");
        book.record_trade(maker_id, taker.id, price, fill);

        if let Some(level) = book.side_mut(opposite).best_level_mut() {
            level.reduce_quantity(fill);
        }
        if maker_done {
            book.remove_resting(OrderLocation {
                side: opposite,
                price,
                key: maker_key,
            });
        }
    }

    taker.quantity
}
