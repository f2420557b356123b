//! Application state for the campaign TUI.

use fanfare_campaign::{CampaignEvent, CampaignState, Platform};
use std::collections::BTreeSet;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Spinner frames for thumbnail loading animation.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Focus {
    /// Typing into the concept field
    Concept,
    /// Toggling the platform selection
    Platforms,
    /// Acting on result cards
    Cards,
}

/// Main application state.
pub struct App {
    /// Concept input buffer
    pub concept: String,
    /// Platforms selected for the next cycle
    pub selected_platforms: BTreeSet<Platform>,
    /// Highlighted row in the platform selector
    pub platform_cursor: usize,
    /// Which pane has focus
    pub focus: Focus,
    /// Index of the highlighted result card
    pub selected_card: usize,
    /// Campaign cycle state
    pub state: CampaignState,
    /// Whether the API key modal is showing
    pub show_credential_modal: bool,
    /// Whether the help overlay is showing
    pub show_help: bool,
    /// Whether a usable API key has been observed
    pub key_ready: bool,
    /// Directory thumbnails are saved into
    pub download_dir: PathBuf,
    /// Status message to display
    pub status: String,
    /// Current spinner animation frame
    pub spinner_frame: usize,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create the initial app state.
    ///
    /// The platform selection starts with the video-first trio and the
    /// credential modal shows until a key is known to exist.
    pub fn new(key_ready: bool, download_dir: PathBuf) -> Self {
        Self {
            concept: String::new(),
            selected_platforms: Platform::default_selection().into_iter().collect(),
            platform_cursor: 0,
            focus: Focus::Concept,
            selected_card: 0,
            state: CampaignState::default(),
            show_credential_modal: !key_ready,
            show_help: false,
            key_ready,
            download_dir,
            status: String::from("Press ? for help"),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// All platforms in selector order.
    pub fn platform_rows() -> Vec<Platform> {
        Platform::iter().collect()
    }

    /// The current selection as an ordered list for a cycle.
    pub fn selection(&self) -> Vec<Platform> {
        self.selected_platforms.iter().copied().collect()
    }

    /// Platform of the highlighted card, if any results exist.
    pub fn selected_platform(&self) -> Option<Platform> {
        self.state.results().keys().copied().nth(self.selected_card)
    }

    /// Move focus to the next pane.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Concept => Focus::Platforms,
            Focus::Platforms => Focus::Cards,
            Focus::Cards => Focus::Concept,
        };
    }

    /// Append a character to the concept field.
    pub fn push_concept_char(&mut self, c: char) {
        self.concept.push(c);
    }

    /// Delete the last character of the concept field.
    pub fn pop_concept_char(&mut self) {
        self.concept.pop();
    }

    /// Move the platform cursor up.
    pub fn platform_cursor_up(&mut self) {
        self.platform_cursor = self.platform_cursor.saturating_sub(1);
    }

    /// Move the platform cursor down.
    pub fn platform_cursor_down(&mut self) {
        if self.platform_cursor + 1 < Self::platform_rows().len() {
            self.platform_cursor += 1;
        }
    }

    /// Toggle the platform under the cursor in or out of the selection.
    pub fn toggle_platform(&mut self) {
        if let Some(platform) = Self::platform_rows().get(self.platform_cursor) {
            if !self.selected_platforms.remove(platform) {
                self.selected_platforms.insert(*platform);
            }
        }
    }

    /// Highlight the previous result card.
    pub fn select_previous_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    /// Highlight the next result card.
    pub fn select_next_card(&mut self) {
        if self.selected_card + 1 < self.state.results().len() {
            self.selected_card += 1;
        }
    }

    /// Advance the spinner animation one frame.
    pub fn tick_animation(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Current spinner glyph.
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Merge a campaign event into the UI and cycle state.
    pub fn apply_campaign_event(&mut self, event: CampaignEvent) {
        match &event {
            CampaignEvent::KeyReady => {
                self.key_ready = true;
                self.show_credential_modal = false;
                self.status = "API key ready".to_string();
            }
            CampaignEvent::TextReady(items) => {
                self.status = if items.is_empty() {
                    "The model returned no campaign items".to_string()
                } else {
                    format!(
                        "Copy ready for {} platforms; rendering thumbnails",
                        items.len()
                    )
                };
            }
            CampaignEvent::TextFailed { message } => {
                self.status = format!("Generation failed: {message}");
            }
            CampaignEvent::ImageReady { platform, .. } => {
                self.status = format!("{platform} thumbnail ready");
            }
            CampaignEvent::ImageFailed { platform, .. } => {
                self.status = format!("{platform} thumbnail failed; press r to retry");
            }
        }
        self.state.apply_event(event);

        let cards = self.state.results().len();
        if cards == 0 {
            self.selected_card = 0;
        } else if self.selected_card >= cards {
            self.selected_card = cards - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanfare_campaign::{CyclePhase, GeneratedContent, GeneratedContentBuilder};

    fn item(platform: Platform) -> GeneratedContent {
        GeneratedContentBuilder::default()
            .platform(platform)
            .title("title")
            .description("description")
            .build()
            .unwrap()
    }

    #[test]
    fn starts_with_default_selection_and_modal_state() {
        let app = App::new(false, PathBuf::from("."));
        assert!(app.show_credential_modal);
        assert_eq!(app.selection(), Platform::default_selection());
        assert_eq!(app.focus, Focus::Concept);

        let ready = App::new(true, PathBuf::from("."));
        assert!(!ready.show_credential_modal);
    }

    #[test]
    fn toggle_platform_round_trips() {
        let mut app = App::new(true, PathBuf::from("."));
        let rows = App::platform_rows();
        app.platform_cursor = rows
            .iter()
            .position(|p| *p == Platform::Reddit)
            .unwrap();

        app.toggle_platform();
        assert!(app.selected_platforms.contains(&Platform::Reddit));
        app.toggle_platform();
        assert!(!app.selected_platforms.contains(&Platform::Reddit));
    }

    #[test]
    fn focus_cycles_through_all_panes() {
        let mut app = App::new(true, PathBuf::from("."));
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Platforms);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Cards);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Concept);
    }

    #[test]
    fn concept_editing_appends_and_deletes() {
        let mut app = App::new(true, PathBuf::from("."));
        app.push_concept_char('h');
        app.push_concept_char('i');
        assert_eq!(app.concept, "hi");
        app.pop_concept_char();
        assert_eq!(app.concept, "h");
    }

    #[test]
    fn key_ready_event_dismisses_modal() {
        let mut app = App::new(false, PathBuf::from("."));
        app.apply_campaign_event(CampaignEvent::KeyReady);
        assert!(app.key_ready);
        assert!(!app.show_credential_modal);
    }

    #[test]
    fn text_ready_event_updates_state_and_status() {
        let mut app = App::new(true, PathBuf::from("."));
        app.state.begin_cycle();
        app.apply_campaign_event(CampaignEvent::TextReady(vec![
            item(Platform::YouTube),
            item(Platform::TikTok),
        ]));

        assert_eq!(*app.state.phase(), CyclePhase::TextReady);
        assert_eq!(app.state.results().len(), 2);
        assert!(app.status.contains("2 platforms"));
    }

    #[test]
    fn card_cursor_clamps_to_result_count() {
        let mut app = App::new(true, PathBuf::from("."));
        app.selected_card = 4;
        app.state.begin_cycle();
        app.apply_campaign_event(CampaignEvent::TextReady(vec![item(Platform::YouTube)]));
        assert_eq!(app.selected_card, 0);

        app.select_next_card();
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn selected_platform_follows_card_cursor() {
        let mut app = App::new(true, PathBuf::from("."));
        app.state.begin_cycle();
        app.apply_campaign_event(CampaignEvent::TextReady(vec![
            item(Platform::YouTube),
            item(Platform::TikTok),
        ]));

        assert_eq!(app.selected_platform(), Some(Platform::YouTube));
        app.select_next_card();
        assert_eq!(app.selected_platform(), Some(Platform::TikTok));
    }

    #[test]
    fn spinner_wraps_around() {
        let mut app = App::new(true, PathBuf::from("."));
        for _ in 0..SPINNER_FRAMES.len() {
            app.tick_animation();
        }
        assert_eq!(app.spinner_frame, 0);
    }
}
