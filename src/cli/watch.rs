//! Watch command implementation
//!
//! Stands in for the wallet widget: type `connect`, `disconnect` or `quit`.

use crate::config::ViewConfig;
use crate::connection::{run_view_loop, ConnectionSignal, ViewLoopConfig};
use crate::view::render;
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Args, Debug)]
pub struct WatchArgs {}

impl WatchArgs {
    pub async fn execute(&self, config: &ViewConfig) -> anyhow::Result<()> {
        let signal = ConnectionSignal::new();
        let loop_config = ViewLoopConfig {
            depth: config.depth,
            ..ViewLoopConfig::default()
        };
        let (view_tx, mut view_rx) = mpsc::channel(loop_config.buffer_size);

        let loop_handle = tokio::spawn(run_view_loop(signal.subscribe(), loop_config, view_tx));

        println!("Commands: connect | disconnect | quit");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                view = view_rx.recv() => {
                    match view {
                        Some(view) => print!("\n{}", render(&view)),
                        None => break,
                    }
                }
                line = lines.next_line() => {
                    match line?.as_deref().map(str::trim) {
                        Some("connect") => signal.set_connected(true),
                        Some("disconnect") => signal.set_connected(false),
                        Some("quit") | None => break,
                        Some(other) => {
                            tracing::warn!(input = other, "Unknown command, ignoring");
                        }
                    }
                }
            }
        }

        drop(signal);
        loop_handle.await??;
        Ok(())
    }
}
