//! Campaign workflow error types.

/// Specific error conditions for campaign operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CampaignErrorKind {
    /// Concept text is empty or whitespace-only
    #[display("Concept cannot be empty")]
    EmptyConcept,
    /// No target platforms selected
    #[display("At least one platform must be selected")]
    NoPlatforms,
    /// A generation cycle is already waiting on text
    #[display("A generation cycle is already in flight")]
    CycleInFlight,
    /// Credential gate has not reported a usable key
    #[display("No API key available; select a key before generating")]
    CredentialNotReady,
    /// The cycle failed during text generation
    #[display("Generation cycle failed: {}", _0)]
    Cycle(String),
    /// Event channel closed before the cycle settled
    #[display("Campaign event channel closed: {}", _0)]
    EventChannel(String),
}

/// Error type for campaign operations.
///
/// # Examples
///
/// ```
/// use fanfare_error::{CampaignError, CampaignErrorKind};
///
/// let err = CampaignError::new(CampaignErrorKind::EmptyConcept);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Campaign Error: {} at line {} in {}", kind, line, file)]
pub struct CampaignError {
    /// The specific error condition
    pub kind: CampaignErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CampaignError {
    /// Create a new CampaignError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CampaignErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for campaign operations.
pub type CampaignResult<T> = Result<T, CampaignError>;
