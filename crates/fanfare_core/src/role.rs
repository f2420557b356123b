//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message sender in a generation request.
///
/// Campaign prompts pair a [`Role::System`] instruction with a
/// [`Role::User`] concept; [`Role::Assistant`] marks model output when a
/// conversation is replayed.
///
/// # Examples
///
/// ```
/// use fanfare_core::Role;
///
/// assert_ne!(Role::System, Role::User);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the AI
    Assistant,
}
