//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use fanfare::Platform;
use std::path::PathBuf;
use std::str::FromStr;

/// Fanfare - AI campaign studio for per-platform social copy and thumbnails
#[derive(Parser, Debug)]
#[command(name = "fanfare")]
#[command(
    about = "Generate platform-tuned social copy and thumbnails from a video concept",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a fanfare.toml configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a campaign in one shot and save the thumbnails
    Generate {
        /// Video concept to build the campaign around
        #[arg(long)]
        concept: String,

        /// Target platform; repeat for several (defaults to youtube,
        /// instagram, tiktok)
        #[arg(long = "platform", value_parser = parse_platform)]
        platforms: Vec<Platform>,

        /// Directory thumbnails are saved into (defaults to the configured
        /// output directory)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Launch the interactive campaign studio
    Tui {
        /// Directory thumbnails are saved into (defaults to the configured
        /// output directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Parse a platform name, case-insensitively.
fn parse_platform(value: &str) -> Result<Platform, String> {
    Platform::from_str(value).map_err(|_| {
        format!("unknown platform '{value}' (expected youtube, instagram, tiktok, facebook, or reddit)")
    })
}
