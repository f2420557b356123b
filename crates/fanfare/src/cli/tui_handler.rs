//! TUI launch command handler.

use super::config::FanfareConfig;
use fanfare::FanfareResult;
use std::path::PathBuf;

/// Launch the interactive campaign studio.
///
/// The studio opens without an API key; generation stays gated behind the
/// credential modal until one is available.
#[cfg(all(feature = "gemini", feature = "tui"))]
pub async fn launch_tui(config: &FanfareConfig, out: Option<PathBuf>) -> FanfareResult<()> {
    use fanfare::{ContentClient, EnvKeyHost, GeminiClient, run_tui};

    tracing::info!("Launching campaign studio");

    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    let driver = GeminiClient::with_api_key(
        api_key,
        config.models().text_model().clone(),
        *config.models().requests_per_minute(),
    );
    let client = ContentClient::new(driver).with_models(
        config.models().text_model().clone(),
        config.models().image_model().clone(),
    );
    let client = match config.models().temperature() {
        Some(temperature) => client.with_temperature(*temperature),
        None => client,
    };

    let directory = out.unwrap_or_else(|| config.output().directory().clone());
    run_tui(client, Box::new(EnvKeyHost), directory).await?;

    Ok(())
}

#[cfg(not(all(feature = "gemini", feature = "tui")))]
pub async fn launch_tui(_config: &FanfareConfig, _out: Option<PathBuf>) -> FanfareResult<()> {
    eprintln!("Error: TUI and gemini features not enabled. Rebuild with --features tui,gemini");
    std::process::exit(1);
}
