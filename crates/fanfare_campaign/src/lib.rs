//! Campaign orchestration for the Fanfare social campaign generator.
//!
//! This crate owns the domain core: the [`Platform`] vocabulary, prompt and
//! schema construction for the structured text call, the [`CampaignState`]
//! state machine with its per-platform image merges, the credential gate,
//! and the [`CampaignRunner`] that fans image work out across tokio tasks.
//!
//! A cycle runs in two phases. One text call returns a [`GeneratedContent`]
//! item per selected platform; then an independent image task per item
//! produces a thumbnail as a data URI. Completions stream back as
//! [`CampaignEvent`]s and merge into the state one platform at a time, so a
//! UI can render partial progress and a failed thumbnail never disturbs its
//! neighbors.
//!
//! # Quickstart
//!
//! ```no_run
//! use fanfare_campaign::{
//!     CampaignRunner, CampaignState, ContentClient, CredentialGate, EnvKeyHost, Platform,
//! };
//! use fanfare_models::GeminiClient;
//!
//! # async fn example() -> fanfare_error::FanfareResult<()> {
//! let client = ContentClient::new(GeminiClient::new()?);
//! let (runner, mut events) = CampaignRunner::new(client);
//!
//! let gate = CredentialGate::new(Box::new(EnvKeyHost));
//! gate.refresh().await;
//!
//! let mut state = CampaignState::default();
//! let platforms = Platform::default_selection();
//! state.ensure_can_start("a rooftop beekeeping series", &platforms, gate.ready())?;
//! state.begin_cycle();
//! runner.spawn_cycle("a rooftop beekeeping series".to_string(), platforms);
//!
//! while let Some(event) = events.recv().await {
//!     state.apply_event(event);
//!     if state.is_settled() {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod content;
mod credential;
mod platform;
mod prompts;
mod results;
mod runner;
mod schema;

pub use client::{ContentClient, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
pub use content::{GeneratedContent, GeneratedContentBuilder};
pub use credential::{CredentialGate, EnvKeyHost, KeyHost};
pub use platform::Platform;
pub use prompts::{campaign_instruction, enhance_image_prompt, CAMPAIGN_PERSONA};
pub use results::{CampaignState, CyclePhase, PostResult};
pub use runner::{CampaignEvent, CampaignRunner};
pub use schema::campaign_schema;

pub use fanfare_core::AspectRatio;
pub use fanfare_error::{CampaignError, CampaignErrorKind, CampaignResult};
