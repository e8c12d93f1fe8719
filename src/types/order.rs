//! Order types for the order book.
//!
//! ## SSZ Serialization
//!
//! `Order` derives `SimpleSerialize` from ssz_rs so resting orders have a
//! deterministic byte encoding (used for the book state root).
//! Enumerations are stored as raw `u8` fields with typed accessors.
//!
//! ## Units
//!
//! Prices are integer ticks and quantities integer lots, both `u64`.
//! A quantity can therefore never go negative.

use ssz_rs::prelude::*;

use crate::error::OrderError;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Represented as u8 for SSZ compatibility:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid)
    #[default]
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// OrderType enum
// ============================================================================

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    /// Executes at the limit price or better
    #[default]
    Limit,
    /// Executes against any available liquidity; price is ignored
    Market,
}

impl OrderType {
    pub fn to_u8(self) -> u8 {
        match self {
            OrderType::Limit => 0,
            OrderType::Market => 1,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(OrderType::Limit),
            1 => Some(OrderType::Market),
            _ => None,
        }
    }
}

// ============================================================================
// TimeInForce enum
// ============================================================================

/// How long an order may stay on the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeInForce {
    /// Good-for-day: rests until filled or cancelled
    #[default]
    Gfd,
    /// Immediate-or-cancel: fills what it can, never rests
    Ioc,
}

impl TimeInForce {
    pub fn to_u8(self) -> u8 {
        match self {
            TimeInForce::Gfd => 0,
            TimeInForce::Ioc => 1,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(TimeInForce::Gfd),
            1 => Some(TimeInForce::Ioc),
            _ => None,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// An order submitted to the book.
///
/// Everything except `quantity` is fixed once the order is created.
/// `quantity` is the open quantity and only ever decreases as the order
/// is matched.
///
/// ## SSZ Layout
///
/// Fixed-size container: 8+1+1+1+8+8+8 = 35 bytes.
///
/// ## Example
///
/// ```
/// use ob_engine::types::{Order, Side, OrderType, TimeInForce};
///
/// let order = Order::limit(1, Side::Buy, 100, 10);
/// assert_eq!(order.order_type(), OrderType::Limit);
/// assert_eq!(order.time_in_force(), TimeInForce::Gfd);
///
/// let sweep = Order::market(2, Side::Sell, 25);
/// assert_eq!(sweep.time_in_force(), TimeInForce::Ioc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Caller-assigned order identifier
    pub id: u64,

    /// Order side as u8 (0=Buy, 1=Sell)
    pub side_raw: u8,

    /// Order type as u8 (0=Limit, 1=Market)
    pub order_type_raw: u8,

    /// Time in force as u8 (0=GFD, 1=IOC)
    pub tif_raw: u8,

    /// Limit price in ticks (ignored for Market orders)
    pub price: u64,

    /// Open quantity, decremented as the order is matched
    pub quantity: u64,

    /// Submission sequence, breaks ties within a price level
    pub sequence: u64,
}

impl Order {
    /// Create an order with every attribute spelled out.
    ///
    /// `sequence` may be left at zero; the book stamps it on submit.
    pub fn new(
        id: u64,
        side: Side,
        order_type: OrderType,
        time_in_force: TimeInForce,
        price: u64,
        quantity: u64,
    ) -> Self {
        Self {
            id,
            side_raw: side.to_u8(),
            order_type_raw: order_type.to_u8(),
            tif_raw: time_in_force.to_u8(),
            price,
            quantity,
            sequence: 0,
        }
    }

    /// Good-for-day limit order
    pub fn limit(id: u64, side: Side, price: u64, quantity: u64) -> Self {
        Self::new(id, side, OrderType::Limit, TimeInForce::Gfd, price, quantity)
    }

    /// Immediate-or-cancel limit order
    pub fn limit_ioc(id: u64, side: Side, price: u64, quantity: u64) -> Self {
        Self::new(id, side, OrderType::Limit, TimeInForce::Ioc, price, quantity)
    }

    /// Market order (always IOC, price is zero)
    pub fn market(id: u64, side: Side, quantity: u64) -> Self {
        Self::new(id, side, OrderType::Market, TimeInForce::Ioc, 0, quantity)
    }

    /// Set an explicit submission sequence
    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Get the order side
    pub fn side(&self) -> Side {
        Side::from_u8(self.side_raw).unwrap_or(Side::Buy)
    }

    /// Get the order type
    pub fn order_type(&self) -> OrderType {
        OrderType::from_u8(self.order_type_raw).unwrap_or(OrderType::Limit)
    }

    /// Get the time in force
    pub fn time_in_force(&self) -> TimeInForce {
        TimeInForce::from_u8(self.tif_raw).unwrap_or(TimeInForce::Gfd)
    }

    #[inline]
    pub fn is_market(&self) -> bool {
        self.order_type() == OrderType::Market
    }

    /// Whether leftover quantity may rest on the book after matching.
    #[inline]
    pub fn may_rest(&self) -> bool {
        !self.is_market() && self.time_in_force() == TimeInForce::Gfd
    }

    /// Check if the order is fully filled
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The actual quantity filled (capped at the open quantity)
    pub fn fill(&mut self, fill_qty: u64) -> u64 {
        let actual_fill = fill_qty.min(self.quantity);
        self.quantity -= actual_fill;
        actual_fill
    }

    /// Check the caller contract for a new order.
    ///
    /// Rejects zero quantity, unknown raw enum values and Market orders
    /// that are not IOC.
    pub fn validate(&self) -> Result<(), OrderError> {
        if Side::from_u8(self.side_raw).is_none() {
            return Err(OrderError::InvalidField { field: "side", value: self.side_raw });
        }
        if OrderType::from_u8(self.order_type_raw).is_none() {
            return Err(OrderError::InvalidField {
                field: "order_type",
                value: self.order_type_raw,
            });
        }
        if TimeInForce::from_u8(self.tif_raw).is_none() {
            return Err(OrderError::InvalidField { field: "time_in_force", value: self.tif_raw });
        }
        if self.quantity == 0 {
            return Err(OrderError::ZeroQuantity { order_id: self.id });
        }
        if self.is_market() && self.time_in_force() != TimeInForce::Ioc {
            return Err(OrderError::MarketOrderNotIoc { order_id: self.id });
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
