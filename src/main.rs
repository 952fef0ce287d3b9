use bookview::cli::{Cli, Commands};
use bookview::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = bookview::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Show(args) => {
            args.execute(&config.view)?;
        }
        Commands::Watch(args) => {
            tracing::info!("Starting interactive view");
            args.execute(&config.view).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  View depth: {}", config.view.depth);
            println!("  Log level: {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
