//! Pure reducer from the connected flag to display state

use super::{BookView, ViewError};
use crate::book::{Order, OrderSource, Side};
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};

/// Hard cap on rendered rows per side
pub const MAX_DEPTH: usize = 10;

/// Derive the next display state from the previous one and the connected flag
///
/// While disconnected nothing runs and the previous state is kept as-is, stale
/// rows included. Each observation of `connected == true` recomputes the view
/// from scratch: fetch, partition by side, sort, truncate to `depth`, compute
/// the spread. Any fault is caught here and surfaced as the error state; it is
/// never propagated to the caller.
pub fn reduce(prev: &BookView, connected: bool, source: &dyn OrderSource, depth: usize) -> BookView {
    if !connected {
        return prev.clone();
    }

    match prepare(source, depth.min(MAX_DEPTH)) {
        Ok(view) => view,
        Err(e) => {
            tracing::error!(error = %e, "Failed to prepare orderbook view");
            BookView::failed(e.to_string())
        }
    }
}

fn prepare(source: &dyn OrderSource, depth: usize) -> Result<BookView, ViewError> {
    let orders = source.fetch().map_err(|e| {
        tracing::debug!(error = %e, "Order source fetch failed");
        ViewError::DataPreparation
    })?;

    if orders.iter().any(|o| o.price <= Decimal::ZERO || o.amount <= Decimal::ZERO) {
        return Err(ViewError::DataPreparation);
    }

    let (mut asks, mut bids): (Vec<Order>, Vec<Order>) =
        orders.into_iter().partition(|o| o.side == Side::Short);

    asks.sort_by(|a, b| a.price.cmp(&b.price));
    bids.sort_by(|a, b| b.price.cmp(&a.price));
    asks.truncate(depth);
    bids.truncate(depth);

    let spread = match (asks.first(), bids.first()) {
        (Some(ask), Some(bid)) => Some(
            (ask.price - bid.price).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        ),
        _ => None,
    };

    Ok(BookView {
        asks,
        bids,
        spread,
        error: None,
        updated_at: Utc::now(),
    })
}
