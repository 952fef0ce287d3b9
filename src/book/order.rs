//! Order record types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Buy-side order (bid)
    Long,
    /// Sell-side order (ask)
    Short,
}

/// A single resting order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Trade side
    pub side: Side,
    /// Order price, must be positive
    pub price: Decimal,
    /// Order amount, must be positive
    pub amount: Decimal,
}

impl Order {
    /// Notional value of the order (price x amount)
    pub fn total(&self) -> Decimal {
        self.price * self.amount
    }
}
