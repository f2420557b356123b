//! Background execution of generation cycles.
//!
//! [`CampaignRunner`] owns the driver side of the state machine: it runs the
//! text call on a spawned task, fans out one image task per returned item,
//! and reports every completion as a [`CampaignEvent`] over an mpsc channel.
//! The consumer applies events to a [`crate::CampaignState`] as they drain.
//! There is no join barrier; image tasks finish in whatever order the
//! service answers.

use crate::{ContentClient, GeneratedContent, Platform};
use fanfare_interface::{ImageGeneration, JsonMode};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Progress report from a running cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignEvent {
    /// A credential became available on the host.
    KeyReady,
    /// Structured copy arrived; one item per platform.
    TextReady(Vec<GeneratedContent>),
    /// The text phase failed and the cycle is over.
    TextFailed {
        /// User-visible failure description
        message: String,
    },
    /// One platform's thumbnail arrived.
    ImageReady {
        /// Platform the thumbnail belongs to
        platform: Platform,
        /// Generation the request was spawned under
        generation: u64,
        /// Thumbnail as a data URI
        image: String,
    },
    /// One platform's thumbnail attempt failed.
    ImageFailed {
        /// Platform the attempt belonged to
        platform: Platform,
        /// Generation the request was spawned under
        generation: u64,
        /// User-visible failure description
        message: String,
    },
}

/// Spawns generation work and streams its progress.
///
/// # Examples
///
/// ```no_run
/// use fanfare_campaign::{CampaignRunner, CampaignState, ContentClient, Platform};
/// use fanfare_models::GeminiClient;
///
/// # async fn example() -> fanfare_error::FanfareResult<()> {
/// let client = ContentClient::new(GeminiClient::new()?);
/// let (runner, mut events) = CampaignRunner::new(client);
/// let mut state = CampaignState::default();
///
/// state.begin_cycle();
/// runner.spawn_cycle("a rooftop beekeeping series".to_string(), Platform::default_selection());
///
/// while let Some(event) = events.recv().await {
///     state.apply_event(event);
///     if state.is_settled() {
///         break;
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CampaignRunner<D> {
    client: Arc<ContentClient<D>>,
    events: mpsc::Sender<CampaignEvent>,
}

impl<D> Clone for CampaignRunner<D> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            events: self.events.clone(),
        }
    }
}

impl<D> CampaignRunner<D>
where
    D: JsonMode + ImageGeneration + 'static,
{
    /// Create a runner and the receiving end of its event channel.
    pub fn new(client: ContentClient<D>) -> (Self, mpsc::Receiver<CampaignEvent>) {
        let (events, receiver) = mpsc::channel(32);
        (
            Self {
                client: Arc::new(client),
                events,
            },
            receiver,
        )
    }

    /// A sender handle for feeding extra events into the same channel.
    pub fn events(&self) -> mpsc::Sender<CampaignEvent> {
        self.events.clone()
    }

    /// Start a full generation cycle on a background task.
    ///
    /// The caller must have passed the [`crate::CampaignState::ensure_can_start`]
    /// guards and entered the text phase before calling this.
    pub fn spawn_cycle(&self, concept: String, platforms: Vec<Platform>) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tokio::spawn(run_cycle(client, events, concept, platforms, Uuid::new_v4()));
    }

    /// Start one replacement image request on a background task.
    ///
    /// `generation` must be the value returned by
    /// [`crate::CampaignState::begin_regenerate`] so the completion matches
    /// the entry it belongs to.
    pub fn spawn_regenerate(&self, platform: Platform, prompt: String, generation: u64) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tokio::spawn(run_image(client, events, platform, prompt, generation));
    }
}

#[tracing::instrument(skip(client, events, concept, platforms), fields(%cycle, platforms = platforms.len()))]
async fn run_cycle<D>(
    client: Arc<ContentClient<D>>,
    events: mpsc::Sender<CampaignEvent>,
    concept: String,
    platforms: Vec<Platform>,
    cycle: Uuid,
) where
    D: JsonMode + ImageGeneration + 'static,
{
    match client.generate_text(&concept, &platforms).await {
        Ok(items) => {
            // Deliver text before spawning image work so the state has
            // entries for every completion that follows on this channel.
            if events
                .send(CampaignEvent::TextReady(items.clone()))
                .await
                .is_err()
            {
                tracing::debug!("event receiver dropped before text delivery");
                return;
            }
            for item in items {
                let platform = *item.platform();
                let prompt = item.image_prompt_or_title().to_string();
                tokio::spawn(run_image(
                    Arc::clone(&client),
                    events.clone(),
                    platform,
                    prompt,
                    0,
                ));
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "campaign text generation failed");
            let _ = events
                .send(CampaignEvent::TextFailed {
                    message: e.to_string(),
                })
                .await;
        }
    }
}

#[tracing::instrument(skip(client, events, prompt))]
async fn run_image<D>(
    client: Arc<ContentClient<D>>,
    events: mpsc::Sender<CampaignEvent>,
    platform: Platform,
    prompt: String,
    generation: u64,
) where
    D: ImageGeneration,
{
    match client.generate_image(&prompt, platform).await {
        Ok(image) => {
            let _ = events
                .send(CampaignEvent::ImageReady {
                    platform,
                    generation,
                    image,
                })
                .await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "thumbnail generation failed");
            let _ = events
                .send(CampaignEvent::ImageFailed {
                    platform,
                    generation,
                    message: e.to_string(),
                })
                .await;
        }
    }
}
