//! Display state for the order book view

use crate::book::Order;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rendered order book state
///
/// Recomputed in full on every transition to connected; never updated
/// incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookView {
    /// Ask rows, sorted best (lowest) first
    pub asks: Vec<Order>,
    /// Bid rows, sorted best (highest) first
    pub bids: Vec<Order>,
    /// Best ask minus best bid, 2 dp; None until both sides are populated
    pub spread: Option<Decimal>,
    /// User-visible error; when set, the ladder is suppressed
    pub error: Option<String>,
    /// Last recompute timestamp
    pub updated_at: DateTime<Utc>,
}

impl BookView {
    /// Create the idle (pre-connection) state
    pub fn idle() -> Self {
        Self {
            asks: vec![],
            bids: vec![],
            spread: None,
            error: None,
            updated_at: Utc::now(),
        }
    }

    /// Create a failed state holding only the error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            asks: vec![],
            bids: vec![],
            spread: None,
            error: Some(message.into()),
            updated_at: Utc::now(),
        }
    }

    /// Get best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|o| o.price)
    }

    /// Get best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|o| o.price)
    }

    /// Whether the last recompute failed
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for BookView {
    fn default() -> Self {
        Self::idle()
    }
}
