//! One-shot campaign generation command handler.

use super::commands::OutputFormat;
use super::config::FanfareConfig;
#[cfg(feature = "gemini")]
use fanfare::{
    CampaignError, CampaignErrorKind, CampaignRunner, CampaignState, ContentClient, CyclePhase,
    FanfareError, GeminiClient, JsonError, save_thumbnail,
};
use fanfare::{FanfareResult, Platform};
#[cfg(feature = "gemini")]
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Generate a campaign from the command line and save the thumbnails.
///
/// Runs the full cycle to completion: copy first, then every thumbnail,
/// then prints the campaign and exits. A failed copy request is fatal; a
/// failed thumbnail is reported per platform.
#[cfg(feature = "gemini")]
pub async fn run_generate(
    config: &FanfareConfig,
    concept: &str,
    platforms: Vec<Platform>,
    out: Option<PathBuf>,
    format: OutputFormat,
) -> FanfareResult<()> {
    let platforms = resolve_platforms(platforms);

    let driver = GeminiClient::with_model_and_limit(
        config.models().text_model().clone(),
        *config.models().requests_per_minute(),
    )?;
    let client = ContentClient::new(driver).with_models(
        config.models().text_model().clone(),
        config.models().image_model().clone(),
    );
    let client = match config.models().temperature() {
        Some(temperature) => client.with_temperature(*temperature),
        None => client,
    };

    let mut state = CampaignState::default();
    state.ensure_can_start(concept, &platforms, true)?;
    state.begin_cycle();

    tracing::info!(platforms = platforms.len(), "Generating campaign");

    let (runner, mut events) = CampaignRunner::new(client);
    runner.spawn_cycle(concept.to_string(), platforms);

    while let Some(event) = events.recv().await {
        state.apply_event(event);
        if state.is_settled() {
            break;
        }
    }

    if let CyclePhase::Failed(message) = state.phase() {
        return Err(CampaignError::new(CampaignErrorKind::Cycle(message.clone())).into());
    }

    let directory = out.unwrap_or_else(|| config.output().directory().clone());
    let mut saved = BTreeMap::new();
    for (platform, result) in state.results() {
        if let Some(image) = result.image() {
            let path = save_thumbnail(&directory, &platform.thumbnail_filename(), image).await?;
            tracing::info!(%platform, path = %path.display(), "Thumbnail saved");
            saved.insert(*platform, path);
        }
    }

    match format {
        OutputFormat::Json => print_json(&state, &saved)?,
        OutputFormat::Human => print_human(&state, &saved),
    }

    Ok(())
}

#[cfg(not(feature = "gemini"))]
pub async fn run_generate(
    _config: &FanfareConfig,
    _concept: &str,
    _platforms: Vec<Platform>,
    _out: Option<PathBuf>,
    _format: OutputFormat,
) -> FanfareResult<()> {
    eprintln!("Error: Gemini feature not enabled. Rebuild with --features gemini");
    std::process::exit(1);
}

/// Fall back to the default platform trio and drop duplicates.
#[cfg(feature = "gemini")]
fn resolve_platforms(platforms: Vec<Platform>) -> Vec<Platform> {
    if platforms.is_empty() {
        return Platform::default_selection();
    }
    let unique: BTreeSet<Platform> = platforms.into_iter().collect();
    unique.into_iter().collect()
}

/// Print the campaign in a readable form.
#[cfg(feature = "gemini")]
fn print_human(state: &CampaignState, saved: &BTreeMap<Platform, PathBuf>) {
    if state.results().is_empty() {
        println!("The model returned no campaign items.");
        return;
    }

    for (platform, result) in state.results() {
        let content = result.content();
        println!("{platform}");
        println!("{:-<80}", "");
        println!("Title: {}", content.title());
        println!();
        println!("{}", content.description());
        if !content.hashtags().is_empty() {
            println!();
            println!("{}", content.hashtags().join(" "));
        }
        println!();
        match (saved.get(platform), result.image_error()) {
            (Some(path), _) => println!("Thumbnail: {}", path.display()),
            (None, Some(message)) => println!("Thumbnail failed: {message}"),
            (None, None) => println!("Thumbnail: none"),
        }
        println!();
    }
}

/// Print the campaign as a JSON array, one object per platform.
#[cfg(feature = "gemini")]
fn print_json(state: &CampaignState, saved: &BTreeMap<Platform, PathBuf>) -> FanfareResult<()> {
    use serde_json::json;

    let mut items = Vec::new();
    for (platform, result) in state.results() {
        let mut value = serde_json::to_value(result.content())
            .map_err(|e| FanfareError::from(JsonError::new(e.to_string())))?;
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "thumbnailPath".to_string(),
                json!(saved.get(platform).map(|path| path.display().to_string())),
            );
            object.insert("imageError".to_string(), json!(result.image_error()));
        }
        items.push(value);
    }

    let output = serde_json::to_string_pretty(&items)
        .map_err(|e| FanfareError::from(JsonError::new(e.to_string())))?;
    println!("{}", output);
    Ok(())
}
