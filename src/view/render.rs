//! Plain-text renderer for the order book view

use super::BookView;
use crate::book::Order;
use rust_decimal::RoundingStrategy;
use std::fmt::Write;

/// Render the view as a text ladder
///
/// An error state replaces the whole output with a single `Error:` line; there
/// is no partial rendering.
pub fn render(view: &BookView) -> String {
    if let Some(ref message) = view.error {
        return format!("Error: {message}\n");
    }

    let mut out = String::new();
    out.push_str("Order Book\n\n");
    let _ = writeln!(out, "{:>10} {:>10} {:>10}", "Price", "Amount", "Total");

    for order in &view.asks {
        push_row(&mut out, order);
    }

    let spread = view
        .spread
        .map(|s| format!("{s:.2}"))
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(out, "\n{:>10} {:>10}\n", "Spread", spread);

    for order in &view.bids {
        push_row(&mut out, order);
    }

    out
}

fn push_row(out: &mut String, order: &Order) {
    let total = order
        .total()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let _ = writeln!(
        out,
        "{:>10.2} {:>10.4} {:>10.2}",
        order.price, order.amount, total
    );
}
