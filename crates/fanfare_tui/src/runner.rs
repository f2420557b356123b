//! TUI runner - terminal lifecycle and the async event loop.
//!
//! The loop waits on three sources at once: terminal input, a periodic
//! animation tick, and the campaign event channel feeding results back
//! from the generation tasks.

use crate::app::{App, Focus};
use crate::events::{Event, EventHandler};
use crate::{clipboard, ui};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fanfare_campaign::{
    CampaignErrorKind, CampaignEvent, CampaignRunner, ContentClient, CredentialGate, KeyHost,
};
use fanfare_error::{TuiError, TuiErrorKind, TuiResult};
use fanfare_interface::{ImageGeneration, JsonMode};
use fanfare_storage::save_thumbnail;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Which card field a copy action targets.
enum CopyField {
    Title,
    Description,
}

/// Run the campaign TUI until the user quits.
///
/// # Arguments
///
/// * `client` - Content client used for copy and thumbnail generation
/// * `host` - Credential host that reports and selects API keys
/// * `download_dir` - Directory thumbnails are saved into
pub async fn run_tui<D>(
    client: ContentClient<D>,
    host: Box<dyn KeyHost>,
    download_dir: PathBuf,
) -> TuiResult<()>
where
    D: JsonMode + ImageGeneration + 'static,
{
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    // Wire the campaign pipeline to the UI event channel
    let (runner, mut campaign_rx) = CampaignRunner::new(client);
    let gate = CredentialGate::new(host).with_notify(runner.events());
    gate.refresh().await;

    let mut app = App::new(gate.ready(), download_dir);
    let events = EventHandler::new(10);

    let result = run_event_loop(
        &mut terminal,
        &mut app,
        &events,
        &runner,
        &gate,
        &mut campaign_rx,
    )
    .await;

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;

    result
}

/// Drive rendering, input, animation, and campaign events.
async fn run_event_loop<D>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    runner: &CampaignRunner<D>,
    gate: &CredentialGate,
    campaign_rx: &mut mpsc::Receiver<CampaignEvent>,
) -> TuiResult<()>
where
    D: JsonMode + ImageGeneration + 'static,
{
    let mut tick_interval = tokio::time::interval(Duration::from_millis(120));

    loop {
        terminal.draw(|f| ui::draw(f, app)).map_err(|e| {
            TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e)))
        })?;

        tokio::select! {
            // Keyboard input
            input = async { events.next() } => {
                if let Some(Event::Key(key)) = input? {
                    handle_key(app, runner, gate, key).await?;
                }
            }

            // Periodic tick for the spinner animation
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Results flowing back from the generation tasks
            Some(event) = campaign_rx.recv() => {
                app.apply_campaign_event(event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input.
///
/// Layered dispatch: overlays first, then global keys, then the focused
/// pane.
async fn handle_key<D>(
    app: &mut App,
    runner: &CampaignRunner<D>,
    gate: &CredentialGate,
    key: KeyEvent,
) -> TuiResult<()>
where
    D: JsonMode + ImageGeneration + 'static,
{
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // The credential modal captures all input while visible
    if app.show_credential_modal {
        match key.code {
            KeyCode::Enter => {
                if gate.refresh().await || gate.request_key().await {
                    app.key_ready = true;
                    app.show_credential_modal = false;
                    app.status = "API key ready".to_string();
                } else {
                    app.status = "Still no API key available".to_string();
                }
            }
            KeyCode::Esc => app.show_credential_modal = false,
            _ => {}
        }
        return Ok(());
    }

    // The help overlay swallows everything except its own toggle
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return Ok(());
    }

    match app.focus {
        Focus::Concept => handle_concept_key(app, runner, gate, key),
        Focus::Platforms => handle_platforms_key(app, runner, gate, key),
        Focus::Cards => handle_cards_key(app, runner, gate, key).await,
    }

    Ok(())
}

/// Keys for the concept input field.
fn handle_concept_key<D>(
    app: &mut App,
    runner: &CampaignRunner<D>,
    gate: &CredentialGate,
    key: KeyEvent,
) where
    D: JsonMode + ImageGeneration + 'static,
{
    match key.code {
        KeyCode::Enter => start_cycle(app, runner, gate),
        KeyCode::Tab | KeyCode::Esc => app.cycle_focus(),
        KeyCode::Backspace => app.pop_concept_char(),
        KeyCode::Char(c) => app.push_concept_char(c),
        _ => {}
    }
}

/// Keys for the platform selector.
fn handle_platforms_key<D>(
    app: &mut App,
    runner: &CampaignRunner<D>,
    gate: &CredentialGate,
    key: KeyEvent,
) where
    D: JsonMode + ImageGeneration + 'static,
{
    match key.code {
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Char(' ') => app.toggle_platform(),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
            app.platform_cursor_up()
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
            app.platform_cursor_down()
        }
        KeyCode::Enter | KeyCode::Char('g') => start_cycle(app, runner, gate),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Keys for the result cards.
async fn handle_cards_key<D>(
    app: &mut App,
    runner: &CampaignRunner<D>,
    gate: &CredentialGate,
    key: KeyEvent,
) where
    D: JsonMode + ImageGeneration + 'static,
{
    match key.code {
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.select_previous_card()
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.select_next_card()
        }
        KeyCode::Char('g') => start_cycle(app, runner, gate),
        KeyCode::Char('r') => regenerate_selected(app, runner),
        KeyCode::Char('t') => copy_selected(app, CopyField::Title),
        KeyCode::Char('d') => copy_selected(app, CopyField::Description),
        KeyCode::Char('s') => save_selected(app).await,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Try to start a generation cycle from the current inputs.
fn start_cycle<D>(app: &mut App, runner: &CampaignRunner<D>, gate: &CredentialGate)
where
    D: JsonMode + ImageGeneration + 'static,
{
    let platforms = app.selection();
    match app
        .state
        .ensure_can_start(&app.concept, &platforms, gate.ready())
    {
        Ok(()) => {
            app.state.begin_cycle();
            app.selected_card = 0;
            runner.spawn_cycle(app.concept.clone(), platforms);
            app.status = "Generating campaign copy...".to_string();
        }
        Err(e) => {
            if matches!(e.kind, CampaignErrorKind::CredentialNotReady) {
                app.show_credential_modal = true;
            }
            app.status = format!("Cannot generate: {}", e.kind);
        }
    }
}

/// Regenerate the selected card's thumbnail.
fn regenerate_selected<D>(app: &mut App, runner: &CampaignRunner<D>)
where
    D: JsonMode + ImageGeneration + 'static,
{
    let Some(platform) = app.selected_platform() else {
        app.status = "No card selected".to_string();
        return;
    };
    let Some(result) = app.state.get(platform) else {
        return;
    };
    if *result.image_loading() {
        app.status = format!("{platform} thumbnail is already rendering");
        return;
    }

    let prompt = result.content().image_prompt_or_title().to_string();
    if let Some(generation) = app.state.begin_regenerate(platform) {
        runner.spawn_regenerate(platform, prompt, generation);
        app.status = format!("Regenerating the {platform} thumbnail");
    }
}

/// Copy the selected card's title or description to the clipboard.
fn copy_selected(app: &mut App, field: CopyField) {
    let Some(platform) = app.selected_platform() else {
        app.status = "No card selected".to_string();
        return;
    };
    let Some(result) = app.state.get(platform) else {
        return;
    };

    let (label, text) = match field {
        CopyField::Title => ("title", result.content().title().clone()),
        CopyField::Description => ("description", result.content().description().clone()),
    };
    match clipboard::copy_to_clipboard(&text) {
        Ok(()) => app.status = format!("Copied the {platform} {label}"),
        Err(e) => app.status = format!("{}", e.kind),
    }
}

/// Save the selected card's thumbnail into the download directory.
async fn save_selected(app: &mut App) {
    let Some(platform) = app.selected_platform() else {
        app.status = "No card selected".to_string();
        return;
    };
    let Some(result) = app.state.get(platform) else {
        return;
    };
    let Some(image) = result.image().clone() else {
        app.status = format!("No {platform} thumbnail to save yet");
        return;
    };

    let filename = platform.thumbnail_filename();
    match save_thumbnail(&app.download_dir, &filename, &image).await {
        Ok(path) => app.status = format!("Saved {}", path.display()),
        Err(e) => app.status = format!("Save failed: {}", e.kind),
    }
}
