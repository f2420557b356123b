//! Credential readiness gating for generation cycles.

use crate::CampaignEvent;
use async_trait::async_trait;
use fanfare_error::{CampaignError, CampaignErrorKind, CampaignResult};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;

/// Host-side credential capability.
///
/// Implementations report whether a usable API key is currently selected and
/// can ask the surrounding environment to select one. Hosts without a
/// selection mechanism fail `open_select_key`, which leaves the gate
/// blocking until a key appears by other means.
#[async_trait]
pub trait KeyHost: Send + Sync {
    /// Whether a usable API key is currently available.
    async fn has_selected_key(&self) -> bool;

    /// Ask the host to select a key.
    async fn open_select_key(&self) -> CampaignResult<()>;
}

/// Key host backed by the `GEMINI_API_KEY` environment variable.
///
/// Has no selection mechanism; the variable either holds a non-empty value
/// or generation stays blocked.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvKeyHost;

#[async_trait]
impl KeyHost for EnvKeyHost {
    async fn has_selected_key(&self) -> bool {
        std::env::var("GEMINI_API_KEY")
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }

    async fn open_select_key(&self) -> CampaignResult<()> {
        Err(CampaignError::new(CampaignErrorKind::CredentialNotReady))
    }
}

/// Tracks whether generation may start, backed by a [`KeyHost`].
///
/// The cached readiness flag is what cycle guards consult; `refresh` and
/// `request_key` update it from the host. When a notify channel is attached,
/// a successful key selection emits [`CampaignEvent::KeyReady`] so an event
/// loop can unblock without polling.
pub struct CredentialGate {
    host: Box<dyn KeyHost>,
    ready: AtomicBool,
    notify: Option<mpsc::Sender<CampaignEvent>>,
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGate")
            .field("ready", &self.ready())
            .finish_non_exhaustive()
    }
}

impl CredentialGate {
    /// Create a gate over the given host. Starts blocked until refreshed.
    pub fn new(host: Box<dyn KeyHost>) -> Self {
        Self {
            host,
            ready: AtomicBool::new(false),
            notify: None,
        }
    }

    /// Attach an event channel notified when a key becomes ready.
    pub fn with_notify(mut self, events: mpsc::Sender<CampaignEvent>) -> Self {
        self.notify = Some(events);
        self
    }

    /// Re-query the host and cache the result.
    pub async fn refresh(&self) -> bool {
        let ready = self.host.has_selected_key().await;
        self.ready.store(ready, Ordering::SeqCst);
        ready
    }

    /// Last observed readiness.
    pub fn ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Ask the host to select a key.
    ///
    /// Reports ready as soon as the host claims selection succeeded, and
    /// reverts to blocking when it fails.
    pub async fn request_key(&self) -> bool {
        match self.host.open_select_key().await {
            Ok(()) => {
                self.ready.store(true, Ordering::SeqCst);
                if let Some(events) = &self.notify {
                    let _ = events.send(CampaignEvent::KeyReady).await;
                }
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "key selection failed");
                self.ready.store(false, Ordering::SeqCst);
                false
            }
        }
    }
}
