//! bookview: order book ladder viewer gated behind a wallet-connection flag
//!
//! This library provides the core components for:
//! - Domain types and the fixed sample order set
//! - A pure reducer deriving display state from the connected flag
//! - A text renderer for the ask/bid ladder and spread
//! - A watch-channel connection signal and view loop
//! - CLI, configuration, and logging around them

pub mod book;
pub mod cli;
pub mod config;
pub mod connection;
pub mod telemetry;
pub mod view;
