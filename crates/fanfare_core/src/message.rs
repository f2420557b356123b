//! Message types for generation requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a generation request.
///
/// Fanfare prompts are text-only; generated media comes back through
/// [`crate::Output`], never in as input.
///
/// # Examples
///
/// ```
/// use fanfare_core::{Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: "Draft a caption for an autumn hiking reel".to_string(),
/// };
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}
