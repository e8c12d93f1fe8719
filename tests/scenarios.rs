//! End-to-end matching scenarios through the public `OrderBook` API.

use ob_engine::{Order, OrderBook, Side, Trade};

fn maker_taker_px_qty(trade: &Trade) -> (u64, u64, u64, u64) {
    (trade.maker_id, trade.taker_id, trade.price, trade.quantity)
}

#[test]
fn rest_then_cross_trades_at_maker_price() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(1, Side::Buy, 100, 10));
    assert!(book.trades().is_empty());
    assert_eq!(book.best_bid(), Some(100));

    book.submit(Order::limit(2, Side::Sell, 99, 6));

    assert_eq!(book.trades().len(), 1);
    assert_eq!(maker_taker_px_qty(&book.trades()[0]), (1, 2, 100, 6));
    assert_eq!(book.total_qty_at(Side::Buy, 100), 4);
    assert!(book.has_best_bid());
    assert_eq!(book.best_bid(), Some(100));
    assert!(!book.has_best_ask());
    assert!(book.check_invariants().is_ok());
}

#[test]
fn fifo_within_price_level() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(10, Side::Sell, 105, 5));
    book.submit(Order::limit(11, Side::Sell, 105, 7));
    book.clear_trades();

    book.submit(Order::limit(12, Side::Buy, 105, 8));

    let trades: Vec<_> = book.trades().iter().map(maker_taker_px_qty).collect();
    assert_eq!(trades, vec![(10, 12, 105, 5), (11, 12, 105, 3)]);
    assert_eq!(book.total_qty_at(Side::Sell, 105), 4);
    assert!(!book.has_order(10));
    assert_eq!(book.get_order(11).map(|o| o.quantity), Some(4));
    assert!(book.check_invariants().is_ok());
}

#[test]
fn ioc_does_not_rest() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(20, Side::Sell, 101, 5));
    book.clear_trades();

    book.submit(Order::limit_ioc(21, Side::Buy, 101, 10));

    assert_eq!(book.trades().len(), 1);
    assert_eq!(book.trades()[0].quantity, 5);
    assert_eq!(book.num_ask_levels(), 0);
    assert!(!book.has_best_ask());
    assert!(!book.has_best_bid());
    assert!(!book.has_order(21));
    assert!(book.is_empty());
}

#[test]
fn ioc_without_liquidity_is_discarded() {
    let mut book = OrderBook::new();

    book.submit(Order::limit_ioc(1, Side::Buy, 100, 10));

    assert!(book.trades().is_empty());
    assert!(book.is_empty());
}

#[test]
fn market_sweeps_multiple_levels() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(30, Side::Buy, 100, 6));
    book.submit(Order::limit(31, Side::Buy, 99, 7));
    book.clear_trades();

    book.submit(Order::market(32, Side::Sell, 10));

    let trades: Vec<_> = book.trades().iter().map(maker_taker_px_qty).collect();
    assert_eq!(trades, vec![(30, 32, 100, 6), (31, 32, 99, 4)]);
    assert_eq!(book.total_qty_at(Side::Buy, 99), 3);
    assert_eq!(book.total_qty_at(Side::Buy, 100), 0);
    assert_eq!(book.num_bid_levels(), 1);
    assert!(book.check_invariants().is_ok());
}

#[test]
fn market_leftover_is_discarded() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(1, Side::Sell, 100, 3));
    book.submit(Order::market(2, Side::Buy, 10));

    assert_eq!(book.trades().len(), 1);
    assert_eq!(book.trades()[0].quantity, 3);
    assert!(book.is_empty());
}

#[test]
fn cancel_removes_exactly_one_order() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(40, Side::Buy, 100, 7));
    book.submit(Order::limit(41, Side::Buy, 99, 2));

    assert!(book.has_order(40));
    assert!(book.cancel(40));
    assert!(!book.has_order(40));
    assert!(book.has_order(41));
    assert_eq!(book.best_bid(), Some(99));
    assert_eq!(book.total_qty_at(Side::Buy, 99), 2);

    assert!(!book.cancel(9999));
    assert!(book.check_invariants().is_ok());
}

#[test]
fn cancel_twice_returns_true_then_false() {
    let mut book = OrderBook::new();
    book.submit(Order::limit(1, Side::Sell, 110, 3));

    assert!(book.cancel(1));
    assert!(!book.cancel(1));
}

#[test]
fn cancel_of_filled_order_misses() {
    let mut book = OrderBook::new();
    book.submit(Order::limit(1, Side::Sell, 110, 3));
    book.submit(Order::limit(2, Side::Buy, 110, 3));

    assert!(!book.cancel(1));
    assert!(!book.cancel(2));
}

#[test]
fn non_crossing_gfd_adds_exactly_its_quantity() {
    let mut book = OrderBook::new();
    book.submit(Order::limit(1, Side::Sell, 105, 4));
    book.submit(Order::limit(2, Side::Sell, 106, 1));

    let before = book.total_qty_at(Side::Sell, 105);
    book.submit(Order::limit(3, Side::Sell, 105, 9));

    assert_eq!(book.total_qty_at(Side::Sell, 105), before + 9);
    assert!(book.trades().is_empty());
}

#[test]
fn leftover_rests_after_sweep_then_trades_at_resting_price() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(50, Side::Sell, 100, 5));
    book.clear_trades();

    // Sweeps the only ask, the rest no longer crosses and rests at 105
    book.submit(Order::limit(51, Side::Buy, 105, 10));
    assert_eq!(book.total_qty_at(Side::Buy, 105), 5);
    assert_eq!(book.best_bid(), Some(105));
    assert!(!book.has_best_ask());

    book.clear_trades();
    book.submit(Order::limit(52, Side::Sell, 104, 3));

    assert_eq!(book.trades().len(), 1);
    assert_eq!(book.trades()[0].price, 105);
    assert_eq!(book.total_qty_at(Side::Buy, 105), 2);
    assert!(book.check_invariants().is_ok());
}

#[test]
fn partially_filled_maker_keeps_priority() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(1, Side::Sell, 100, 10));
    book.submit(Order::limit(2, Side::Sell, 100, 10));

    book.submit(Order::limit(3, Side::Buy, 100, 4));
    book.submit(Order::limit(4, Side::Buy, 100, 8));

    let makers: Vec<(u64, u64)> =
        book.trades().iter().map(|t| (t.maker_id, t.quantity)).collect();
    assert_eq!(makers, vec![(1, 4), (1, 6), (2, 2)]);
    assert_eq!(book.total_qty_at(Side::Sell, 100), 8);
}

#[test]
fn limit_never_trades_through_its_price() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(1, Side::Sell, 100, 2));
    book.submit(Order::limit(2, Side::Sell, 101, 2));
    book.submit(Order::limit(3, Side::Sell, 102, 2));

    book.submit(Order::limit(4, Side::Buy, 101, 10));

    let prices: Vec<u64> = book.trades().iter().map(|t| t.price).collect();
    assert_eq!(prices, vec![100, 101]);
    assert_eq!(book.total_qty_at(Side::Buy, 101), 6);
    assert_eq!(book.best_ask(), Some(102));
    assert_eq!(book.spread(), Some(1));
    assert!(book.check_invariants().is_ok());
}

#[test]
fn depth_reflects_latest_state() {
    let mut book = OrderBook::new();

    book.submit(Order::limit(1, Side::Buy, 100, 3));
    book.submit(Order::limit(2, Side::Buy, 100, 4));
    book.submit(Order::limit(3, Side::Buy, 98, 1));

    let depth = book.depth(Side::Buy, 10);
    assert_eq!(depth.len(), 2);
    assert_eq!((depth[0].price, depth[0].quantity, depth[0].order_count), (100, 7, 2));
    assert_eq!((depth[1].price, depth[1].quantity, depth[1].order_count), (98, 1, 1));

    assert!(book.cancel(1));
    let depth = book.depth(Side::Buy, 1);
    assert_eq!((depth[0].price, depth[0].quantity, depth[0].order_count), (100, 4, 1));
}
