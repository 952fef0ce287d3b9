//! CLI interface for bookview
//!
//! Provides subcommands for:
//! - `show`: Render the ladder once as if connected
//! - `watch`: Drive the view interactively from stdin connect/disconnect lines
//! - `config`: Show current configuration

mod show;
mod watch;

pub use show::ShowArgs;
pub use watch::WatchArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bookview")]
#[command(about = "Order book ladder viewer gated behind a wallet-connection flag")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the ladder once as if connected
    Show(ShowArgs),
    /// Drive the view interactively from stdin
    Watch(WatchArgs),
    /// Show current configuration
    Config,
}
