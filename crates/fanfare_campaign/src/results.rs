//! Per-cycle campaign state and its merge rules.
//!
//! [`CampaignState`] owns the `Platform → PostResult` mapping for the current
//! generation cycle. The text phase replaces the mapping wholesale; image
//! completions merge in per platform. All transitions funnel through the
//! methods here so the invariants hold: result keys stay within the selected
//! platforms, a loading entry never carries an image, and text fields are
//! never touched after the text phase.

use crate::{CampaignEvent, GeneratedContent, Platform};
use fanfare_error::{CampaignError, CampaignErrorKind, CampaignResult};
use std::collections::BTreeMap;

/// Lifecycle phase of the current generation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CyclePhase {
    /// No cycle has run, or the last one settled.
    #[default]
    Idle,
    /// The text request is in flight.
    TextPending,
    /// Text arrived; per-platform image work may still be running.
    TextReady,
    /// The text phase failed. Not latched; a new cycle may start.
    Failed(String),
}

/// Presentation state for one platform's generated post.
///
/// Wraps the immutable [`GeneratedContent`] with the mutable image fields the
/// UI renders. The generation counter pairs image requests with their
/// completions so a superseded request can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct PostResult {
    /// The generated copy for this platform
    content: GeneratedContent,
    /// Thumbnail as a data URI, once one has arrived
    image: Option<String>,
    /// Whether an image request is in flight for this entry
    image_loading: bool,
    /// Message from the most recent failed image attempt
    image_error: Option<String>,
    /// Current image request generation for this entry
    generation: u64,
}

impl PostResult {
    fn new(content: GeneratedContent) -> Self {
        Self {
            content,
            image: None,
            image_loading: true,
            image_error: None,
            generation: 0,
        }
    }
}

/// State of the current generation cycle.
///
/// # Examples
///
/// ```
/// use fanfare_campaign::{CampaignState, CyclePhase, Platform};
///
/// let mut state = CampaignState::default();
/// assert_eq!(*state.phase(), CyclePhase::Idle);
/// assert!(state
///     .ensure_can_start("a cooking series", &[Platform::YouTube], true)
///     .is_ok());
///
/// state.begin_cycle();
/// assert_eq!(*state.phase(), CyclePhase::TextPending);
/// assert!(!state.is_settled());
/// ```
#[derive(Debug, Default, derive_getters::Getters)]
pub struct CampaignState {
    /// Results keyed by platform, ordered for stable rendering
    results: BTreeMap<Platform, PostResult>,
    /// Phase of the current cycle
    phase: CyclePhase,
}

impl CampaignState {
    /// One platform's result, if the cycle produced one.
    pub fn get(&self, platform: Platform) -> Option<&PostResult> {
        self.results.get(&platform)
    }

    /// Check the guards for starting a new cycle.
    ///
    /// A cycle needs a non-empty concept, at least one platform, no text
    /// request already in flight, and a ready credential gate.
    pub fn ensure_can_start(
        &self,
        concept: &str,
        platforms: &[Platform],
        credential_ready: bool,
    ) -> CampaignResult<()> {
        if concept.trim().is_empty() {
            return Err(CampaignError::new(CampaignErrorKind::EmptyConcept));
        }
        if platforms.is_empty() {
            return Err(CampaignError::new(CampaignErrorKind::NoPlatforms));
        }
        if matches!(self.phase, CyclePhase::TextPending) {
            return Err(CampaignError::new(CampaignErrorKind::CycleInFlight));
        }
        if !credential_ready {
            return Err(CampaignError::new(CampaignErrorKind::CredentialNotReady));
        }
        Ok(())
    }

    /// Enter the text phase, discarding all prior results.
    pub fn begin_cycle(&mut self) {
        self.results.clear();
        self.phase = CyclePhase::TextPending;
    }

    /// Apply a successful text response: bulk replace, one entry per item.
    ///
    /// Every entry starts with `image_loading = true`, no image, and
    /// generation zero. Applied before any image completion for the cycle
    /// can arrive, since events are delivered in send order.
    pub fn apply_text_ready(&mut self, items: Vec<GeneratedContent>) {
        self.results = items
            .into_iter()
            .map(|item| (*item.platform(), PostResult::new(item)))
            .collect();
        self.phase = CyclePhase::TextReady;
    }

    /// Apply a failed text phase. Results stay empty.
    pub fn apply_text_failed(&mut self, message: String) {
        self.phase = CyclePhase::Failed(message);
    }

    /// Merge a completed image into one platform's entry.
    ///
    /// Discards the completion when the entry is gone or its generation has
    /// moved on, so a regenerate that raced an in-flight request wins.
    pub fn apply_image_ready(&mut self, platform: Platform, generation: u64, image: String) {
        let Some(entry) = self.results.get_mut(&platform) else {
            tracing::debug!(%platform, "image completion for absent entry discarded");
            return;
        };
        if entry.generation != generation {
            tracing::debug!(
                %platform,
                stale = generation,
                current = entry.generation,
                "stale image completion discarded"
            );
            return;
        }
        entry.image = Some(image);
        entry.image_loading = false;
        entry.image_error = None;
    }

    /// Merge a failed image attempt into one platform's entry.
    ///
    /// Same staleness rules as [`CampaignState::apply_image_ready`]. The
    /// entry ends with no image and the failure message set.
    pub fn apply_image_failed(&mut self, platform: Platform, generation: u64, message: String) {
        let Some(entry) = self.results.get_mut(&platform) else {
            tracing::debug!(%platform, "image failure for absent entry discarded");
            return;
        };
        if entry.generation != generation {
            tracing::debug!(
                %platform,
                stale = generation,
                current = entry.generation,
                "stale image failure discarded"
            );
            return;
        }
        entry.image = None;
        entry.image_loading = false;
        entry.image_error = Some(message);
    }

    /// Re-enter the image phase for one platform.
    ///
    /// Bumps the entry's generation so any still-running request for it
    /// becomes stale, clears the image and error, and marks it loading.
    /// Returns the new generation to tag the replacement request with, or
    /// `None` when the platform has no entry this cycle.
    pub fn begin_regenerate(&mut self, platform: Platform) -> Option<u64> {
        let entry = self.results.get_mut(&platform)?;
        entry.generation += 1;
        entry.image = None;
        entry.image_loading = true;
        entry.image_error = None;
        Some(entry.generation)
    }

    /// Whether no request of any kind is outstanding.
    pub fn is_settled(&self) -> bool {
        !matches!(self.phase, CyclePhase::TextPending)
            && self.results.values().all(|entry| !entry.image_loading)
    }

    /// Apply one campaign event to the state.
    pub fn apply_event(&mut self, event: CampaignEvent) {
        match event {
            CampaignEvent::KeyReady => {}
            CampaignEvent::TextReady(items) => self.apply_text_ready(items),
            CampaignEvent::TextFailed { message } => self.apply_text_failed(message),
            CampaignEvent::ImageReady {
                platform,
                generation,
                image,
            } => self.apply_image_ready(platform, generation, image),
            CampaignEvent::ImageFailed {
                platform,
                generation,
                message,
            } => self.apply_image_failed(platform, generation, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeneratedContentBuilder;

    fn item(platform: Platform) -> GeneratedContent {
        GeneratedContentBuilder::default()
            .platform(platform)
            .title(format!("{platform} title"))
            .description(format!("{platform} description"))
            .hashtags(vec!["#tag".to_string()])
            .image_prompt(Some(format!("{platform} visual")))
            .build()
            .unwrap()
    }

    #[test]
    fn guards_reject_blank_concept() {
        let state = CampaignState::default();
        let err = state
            .ensure_can_start("   ", &[Platform::YouTube], true)
            .unwrap_err();
        assert_eq!(err.kind, CampaignErrorKind::EmptyConcept);
    }

    #[test]
    fn guards_reject_empty_platform_selection() {
        let state = CampaignState::default();
        let err = state.ensure_can_start("concept", &[], true).unwrap_err();
        assert_eq!(err.kind, CampaignErrorKind::NoPlatforms);
    }

    #[test]
    fn guards_reject_cycle_in_flight() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        let err = state
            .ensure_can_start("concept", &[Platform::YouTube], true)
            .unwrap_err();
        assert_eq!(err.kind, CampaignErrorKind::CycleInFlight);
    }

    #[test]
    fn guards_reject_missing_credential() {
        let state = CampaignState::default();
        let err = state
            .ensure_can_start("concept", &[Platform::YouTube], false)
            .unwrap_err();
        assert_eq!(err.kind, CampaignErrorKind::CredentialNotReady);
    }

    #[test]
    fn new_cycle_allowed_after_failure() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_failed("boom".to_string());
        assert!(state
            .ensure_can_start("concept", &[Platform::YouTube], true)
            .is_ok());
    }

    #[test]
    fn begin_cycle_discards_prior_results() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(vec![item(Platform::YouTube)]);
        assert_eq!(state.results().len(), 1);

        state.begin_cycle();
        assert!(state.results().is_empty());
        assert_eq!(*state.phase(), CyclePhase::TextPending);
    }

    #[test]
    fn text_ready_populates_loading_entries() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(vec![item(Platform::YouTube), item(Platform::TikTok)]);

        assert_eq!(*state.phase(), CyclePhase::TextReady);
        assert_eq!(state.results().len(), 2);
        for entry in state.results().values() {
            assert!(entry.image_loading());
            assert!(entry.image().is_none());
            assert!(entry.image_error().is_none());
            assert_eq!(*entry.generation(), 0);
        }
        assert!(!state.is_settled());
    }

    #[test]
    fn duplicate_platform_items_keep_last() {
        let mut state = CampaignState::default();
        state.begin_cycle();

        let second = GeneratedContentBuilder::default()
            .platform(Platform::YouTube)
            .title("second")
            .description("second description")
            .build()
            .unwrap();
        state.apply_text_ready(vec![item(Platform::YouTube), second]);

        assert_eq!(state.results().len(), 1);
        assert_eq!(state.get(Platform::YouTube).unwrap().content().title(), "second");
    }

    #[test]
    fn text_failure_settles_with_empty_results() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_failed("http 500".to_string());

        assert_eq!(*state.phase(), CyclePhase::Failed("http 500".to_string()));
        assert!(state.results().is_empty());
        assert!(state.is_settled());
    }

    #[test]
    fn image_ready_updates_only_its_platform() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(vec![item(Platform::YouTube), item(Platform::Instagram)]);

        state.apply_image_ready(Platform::YouTube, 0, "data:image/png;base64,AAAA".to_string());

        let done = state.get(Platform::YouTube).unwrap();
        assert!(!done.image_loading());
        assert_eq!(done.image().as_deref(), Some("data:image/png;base64,AAAA"));

        let pending = state.get(Platform::Instagram).unwrap();
        assert!(pending.image_loading());
        assert!(pending.image().is_none());
        assert!(!state.is_settled());

        state.apply_image_ready(Platform::Instagram, 0, "data:image/png;base64,BBBB".to_string());
        assert!(state.is_settled());
    }

    #[test]
    fn image_failure_clears_loading_and_sets_error() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(vec![item(Platform::TikTok)]);

        state.apply_image_failed(Platform::TikTok, 0, "no image generated".to_string());

        let entry = state.get(Platform::TikTok).unwrap();
        assert!(!entry.image_loading());
        assert!(entry.image().is_none());
        assert_eq!(entry.image_error().as_deref(), Some("no image generated"));
        assert!(state.is_settled());
    }

    #[test]
    fn completion_for_absent_platform_is_ignored() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(vec![item(Platform::YouTube)]);

        state.apply_image_ready(Platform::Reddit, 0, "data:image/png;base64,AAAA".to_string());
        assert!(state.get(Platform::Reddit).is_none());
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn regenerate_bumps_generation_and_resets_image_fields() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(vec![item(Platform::Instagram)]);
        state.apply_image_ready(Platform::Instagram, 0, "data:image/png;base64,AAAA".to_string());

        let generation = state.begin_regenerate(Platform::Instagram).unwrap();
        assert_eq!(generation, 1);

        let entry = state.get(Platform::Instagram).unwrap();
        assert!(entry.image_loading());
        assert!(entry.image().is_none());
        assert!(entry.image_error().is_none());
    }

    #[test]
    fn regenerate_without_entry_returns_none() {
        let mut state = CampaignState::default();
        assert!(state.begin_regenerate(Platform::YouTube).is_none());
    }

    #[test]
    fn stale_completion_is_discarded_after_regenerate() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(vec![item(Platform::YouTube)]);

        let generation = state.begin_regenerate(Platform::YouTube).unwrap();

        // Original request resolves late; must not clobber the regenerate.
        state.apply_image_ready(Platform::YouTube, 0, "data:image/png;base64,OLD".to_string());
        let entry = state.get(Platform::YouTube).unwrap();
        assert!(entry.image_loading());
        assert!(entry.image().is_none());

        state.apply_image_ready(
            Platform::YouTube,
            generation,
            "data:image/png;base64,NEW".to_string(),
        );
        let entry = state.get(Platform::YouTube).unwrap();
        assert!(!entry.image_loading());
        assert_eq!(entry.image().as_deref(), Some("data:image/png;base64,NEW"));
    }

    #[test]
    fn stale_failure_is_discarded_after_regenerate() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(vec![item(Platform::YouTube)]);

        state.begin_regenerate(Platform::YouTube);
        state.apply_image_failed(Platform::YouTube, 0, "timeout".to_string());

        let entry = state.get(Platform::YouTube).unwrap();
        assert!(entry.image_loading());
        assert!(entry.image_error().is_none());
    }

    #[test]
    fn empty_text_response_settles_immediately() {
        let mut state = CampaignState::default();
        state.begin_cycle();
        state.apply_text_ready(Vec::new());

        assert_eq!(*state.phase(), CyclePhase::TextReady);
        assert!(state.results().is_empty());
        assert!(state.is_settled());
    }

    #[test]
    fn apply_event_dispatches_to_transitions() {
        let mut state = CampaignState::default();
        state.begin_cycle();

        state.apply_event(CampaignEvent::KeyReady);
        assert_eq!(*state.phase(), CyclePhase::TextPending);

        state.apply_event(CampaignEvent::TextReady(vec![item(Platform::YouTube)]));
        assert_eq!(*state.phase(), CyclePhase::TextReady);

        state.apply_event(CampaignEvent::ImageReady {
            platform: Platform::YouTube,
            generation: 0,
            image: "data:image/png;base64,AAAA".to_string(),
        });
        assert!(state.is_settled());
    }
}
