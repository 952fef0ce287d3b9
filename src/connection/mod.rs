//! Wallet connection signal
//!
//! The view only reads a boolean connected flag; where that flag comes from
//! (wallet handshake, session restore) is the provider's business.

mod signal;
mod watcher;

pub use signal::ConnectionSignal;
pub use watcher::{run_view_loop, ViewLoopConfig};
