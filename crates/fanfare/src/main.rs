//! Fanfare CLI binary.
//!
//! This binary provides command-line access to Fanfare's functionality:
//! - Generate a campaign in one shot and save the thumbnails
//! - Launch the interactive campaign studio TUI

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, FanfareConfig, launch_tui, run_generate};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load .env so GEMINI_API_KEY can sit next to the project
    dotenvy::dotenv().ok();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = FanfareConfig::load(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            concept,
            platforms,
            out,
            format,
        } => {
            run_generate(&config, &concept, platforms, out, format).await?;
        }

        Commands::Tui { out } => {
            launch_tui(&config, out).await?;
        }
    }

    Ok(())
}
