//! UI rendering for the campaign TUI.

use crate::app::{App, Focus};
use fanfare_campaign::{AspectRatio, CyclePhase, Platform, PostResult};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Concept input
            Constraint::Length(3), // Platform selector
            Constraint::Min(0),    // Result cards
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_concept(f, app, chunks[1]);
    draw_platforms(f, app, chunks[2]);
    draw_cards(f, app, chunks[3]);
    draw_status_bar(f, app, chunks[4]);

    // Overlays render last so they sit on top
    if app.show_help {
        draw_help_overlay(f);
    }
    if app.show_credential_modal {
        draw_credential_modal(f);
    }
}

/// Draw the header.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, area: ratatui::layout::Rect) {
    let header = Paragraph::new("Fanfare - Social Campaign Studio")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the concept input field.
#[tracing::instrument(skip_all)]
fn draw_concept(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let focused = app.focus == Focus::Concept;
    let text = if app.concept.is_empty() && !focused {
        "Type a video concept...".to_string()
    } else if focused {
        format!("{}█", app.concept)
    } else {
        app.concept.clone()
    };

    let style = if app.concept.is_empty() && !focused {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let concept = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Video Concept"))
        .style(style);
    f.render_widget(concept, area);
}

/// Draw the platform selector as a single row of checkboxes.
#[tracing::instrument(skip_all)]
fn draw_platforms(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let focused = app.focus == Focus::Platforms;
    let row = App::platform_rows()
        .iter()
        .enumerate()
        .map(|(i, platform)| {
            let marker = if app.selected_platforms.contains(platform) {
                "[x]"
            } else {
                "[ ]"
            };
            let cursor = if focused && i == app.platform_cursor {
                "▸"
            } else {
                " "
            };
            format!("{cursor}{marker} {platform}")
        })
        .collect::<Vec<_>>()
        .join("  ");

    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let platforms = Paragraph::new(row)
        .block(Block::default().borders(Borders::ALL).title("Platforms"))
        .style(style);
    f.render_widget(platforms, area);
}

/// Draw the results area according to the cycle phase.
#[tracing::instrument(skip_all)]
fn draw_cards(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    match app.state.phase() {
        CyclePhase::Idle => {
            let placeholder = Paragraph::new(
                "Enter a concept, pick platforms, then press g to generate a campaign.",
            )
            .block(Block::default().borders(Borders::ALL).title("Campaign"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
            f.render_widget(placeholder, area);
        }
        CyclePhase::TextPending => {
            let pending =
                Paragraph::new(format!("{} Generating campaign copy...", app.spinner()))
                    .block(Block::default().borders(Borders::ALL).title("Campaign"))
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center);
            f.render_widget(pending, area);
        }
        CyclePhase::Failed(message) => {
            let failed = Paragraph::new(format!("Generation failed: {message}"))
                .block(Block::default().borders(Borders::ALL).title("Campaign"))
                .style(Style::default().fg(Color::Red))
                .wrap(ratatui::widgets::Wrap { trim: true });
            f.render_widget(failed, area);
        }
        CyclePhase::TextReady => {
            let results: Vec<(&Platform, &PostResult)> = app.state.results().iter().collect();
            if results.is_empty() {
                let empty = Paragraph::new("The model returned no campaign items.")
                    .block(Block::default().borders(Borders::ALL).title("Campaign"))
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                f.render_widget(empty, area);
                return;
            }

            let constraints: Vec<Constraint> = results
                .iter()
                .map(|_| Constraint::Ratio(1, results.len() as u32))
                .collect();
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(area);

            for (i, ((platform, result), column)) in
                results.iter().zip(columns.iter()).enumerate()
            {
                draw_card(f, app, **platform, result, i == app.selected_card, *column);
            }
        }
    }
}

/// Draw one per-platform result card.
#[tracing::instrument(skip_all)]
fn draw_card(
    f: &mut Frame,
    app: &App,
    platform: Platform,
    result: &PostResult,
    selected: bool,
    area: ratatui::layout::Rect,
) {
    let border_style = if selected && app.focus == Focus::Cards {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            "{} · {}",
            platform,
            aspect_label(platform.aspect_ratio())
        ))
        .border_style(border_style);

    let content = result.content();
    let text = vec![
        Line::from(Span::styled(
            content.title().clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(content.description().clone()),
        Line::raw(""),
        Line::from(Span::styled(
            content.hashtags().join(" "),
            Style::default().fg(Color::Blue),
        )),
        Line::raw(""),
        thumbnail_line(app, platform, result),
    ];

    let card = Paragraph::new(text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(card, area);
}

/// Shape word shown in a card header.
fn aspect_label(aspect: AspectRatio) -> &'static str {
    match aspect {
        AspectRatio::Landscape => "landscape",
        AspectRatio::Square => "square",
        AspectRatio::Portrait => "portrait",
    }
}

/// One-line thumbnail status for a card.
fn thumbnail_line(app: &App, platform: Platform, result: &PostResult) -> Line<'static> {
    if *result.image_loading() {
        Line::from(Span::styled(
            format!("{} Rendering thumbnail...", app.spinner()),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(message) = result.image_error() {
        Line::from(Span::styled(
            format!("✗ {message} (r to retry)"),
            Style::default().fg(Color::Red),
        ))
    } else if result.image().is_some() {
        Line::from(Span::styled(
            format!("✓ {} thumbnail ready (s to save)", platform.aspect_ratio()),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            "No thumbnail".to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    }
}

/// Draw the status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let help_text = match app.focus {
        Focus::Concept => "Type your concept | Enter: Generate | Tab: Next pane | Ctrl+C: Quit",
        Focus::Platforms => "Space: Toggle | ↑↓: Move | g: Generate | ?: Help | Tab: Next pane",
        Focus::Cards => "←→: Card | t/d: Copy | s: Save | r: Regenerate | g: New | q: Quit",
    };

    let status_text = format!("{} | {}", app.status, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Draw the API key modal overlay.
#[tracing::instrument(skip_all)]
fn draw_credential_modal(f: &mut Frame) {
    let area = centered_rect(58, 7, f.area());
    f.render_widget(Clear, area);

    let lines = [
        "No Gemini API key is available.",
        "",
        "Set GEMINI_API_KEY (or pick a key), then press Enter",
        "to re-check. Esc dismisses this notice.",
    ];
    let modal = Paragraph::new(lines.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("API Key Required"),
        )
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(modal, area);
}

/// Draw the keymap overlay.
#[tracing::instrument(skip_all)]
fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(56, 16, f.area());
    f.render_widget(Clear, area);

    let lines = [
        "Tab        Cycle pane focus",
        "Enter      Generate (from the concept field)",
        "Space      Toggle the platform under the cursor",
        "↑/↓        Move the platform cursor",
        "←/→        Select a result card",
        "g          Generate a new campaign",
        "r          Regenerate the selected thumbnail",
        "t          Copy the selected title",
        "d          Copy the selected description",
        "s          Save the selected thumbnail",
        "?          Toggle this help",
        "q          Quit (Ctrl+C works anywhere)",
    ];
    let help = Paragraph::new(lines.join("\n"))
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(help, area);
}

/// Center a fixed-size rect within the given area.
fn centered_rect(
    width: u16,
    height: u16,
    area: ratatui::layout::Rect,
) -> ratatui::layout::Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    ratatui::layout::Rect::new(x, y, width.min(area.width), height.min(area.height))
}
