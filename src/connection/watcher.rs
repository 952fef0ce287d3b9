//! View loop driven by the connection signal

use crate::book::SampleSource;
use crate::view::{reduce, BookView, MAX_DEPTH};
use tokio::sync::{mpsc, watch};

/// Configuration for the view loop
#[derive(Debug, Clone)]
pub struct ViewLoopConfig {
    /// Rows per side, capped at the view's hard limit
    pub depth: usize,
    /// Channel buffer size for emitted views
    pub buffer_size: usize,
}

impl Default for ViewLoopConfig {
    fn default() -> Self {
        Self {
            depth: MAX_DEPTH,
            buffer_size: 16,
        }
    }
}

/// Drive the reducer from the connected flag
///
/// Emits a fresh `BookView` each time the flag is observed true. While the
/// flag is false nothing runs and the prior view stays current (and stale).
/// Returns when either the signal sender or the view receiver goes away.
pub async fn run_view_loop(
    mut rx: watch::Receiver<bool>,
    config: ViewLoopConfig,
    tx: mpsc::Sender<BookView>,
) -> anyhow::Result<()> {
    let source = SampleSource;
    let mut view = BookView::idle();

    loop {
        if rx.changed().await.is_err() {
            tracing::info!("Connection signal dropped, stopping view loop");
            return Ok(());
        }

        let connected = *rx.borrow_and_update();
        if !connected {
            tracing::info!("Wallet disconnected, keeping prior view");
            continue;
        }

        tracing::info!("Wallet connected, recomputing orderbook view");
        view = reduce(&view, true, &source, config.depth);

        if view.is_failed() {
            tracing::warn!(error = ?view.error, "Orderbook view in failed state");
        }

        if tx.send(view.clone()).await.is_err() {
            tracing::debug!("View receiver dropped");
            return Ok(());
        }
    }
}
