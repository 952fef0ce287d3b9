//! Integration tests for the orderbook view

use bookview::book::{Order, OrderSource, SampleSource, Side};
use bookview::connection::{run_view_loop, ConnectionSignal, ViewLoopConfig};
use bookview::view::{reduce, render, BookView, MAX_DEPTH};
use rust_decimal_macros::dec;
use tokio::sync::mpsc;

struct FailingSource;

impl OrderSource for FailingSource {
    fn fetch(&self) -> anyhow::Result<Vec<Order>> {
        anyhow::bail!("simulated fault")
    }
}

#[test]
fn test_connect_transition_populates_ladder() {
    let idle = BookView::idle();
    let view = reduce(&idle, true, &SampleSource, MAX_DEPTH);

    let ask_prices: Vec<_> = view.asks.iter().map(|o| o.price).collect();
    let bid_prices: Vec<_> = view.bids.iter().map(|o| o.price).collect();
    assert_eq!(ask_prices, vec![dec!(101.25), dec!(102.10), dec!(103.50)]);
    assert_eq!(bid_prices, vec![dec!(100.20), dec!(99.80), dec!(98.30)]);
    assert_eq!(view.spread, Some(dec!(1.05)));
    assert!(view.error.is_none());
}

#[test]
fn test_disconnected_runs_no_computation() {
    let idle = BookView::idle();
    let view = reduce(&idle, false, &FailingSource, MAX_DEPTH);

    // The failing source was never consulted.
    assert!(view.error.is_none());
    assert!(view.asks.is_empty());
}

#[test]
fn test_rendered_totals() {
    let view = reduce(&BookView::idle(), true, &SampleSource, MAX_DEPTH);
    let text = render(&view);

    assert!(text.starts_with("Order Book\n"));
    assert!(text.contains("45.56"));
    assert!(text.contains("1.05"));
}

#[test]
fn test_fault_renders_error_line_only() {
    let view = reduce(&BookView::idle(), true, &FailingSource, MAX_DEPTH);
    let text = render(&view);

    assert_eq!(text, "Error: Failed to load dummy orderbook data\n");
}

#[test]
fn test_sides_stay_partitioned() {
    let view = reduce(&BookView::idle(), true, &SampleSource, MAX_DEPTH);
    assert!(view.asks.iter().all(|o| o.side == Side::Short));
    assert!(view.bids.iter().all(|o| o.side == Side::Long));
}

#[tokio::test]
async fn test_signal_drives_view_loop() {
    let signal = ConnectionSignal::new();
    let (view_tx, mut view_rx) = mpsc::channel(4);

    let handle = tokio::spawn(run_view_loop(
        signal.subscribe(),
        ViewLoopConfig::default(),
        view_tx,
    ));

    signal.set_connected(true);
    let view = view_rx.recv().await.expect("view emitted on connect");
    assert_eq!(view.spread, Some(dec!(1.05)));
    assert_eq!(render(&view).lines().next(), Some("Order Book"));

    drop(signal);
    handle.await.unwrap().unwrap();
}
