//! Chat submissions received by the relay.

use crate::post::domain::MediaKind;
use serde::{Deserialize, Serialize};

/// The chat user who sent a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Numeric user identifier on the messaging platform.
    pub uid: i64,
    /// Public handle, when the user has one.
    #[serde(default)]
    pub handle: Option<String>,
}

impl Sender {
    /// Returns the name shown as the poster of the resulting post.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.handle
            .as_deref()
            .map(str::trim)
            .filter(|handle| !handle.is_empty())
            .map_or_else(|| format!("user{}", self.uid), str::to_owned)
    }
}

/// A message received from the messaging channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Message identifier within the originating chat.
    pub message_id: i64,
    /// Originating chat identifier.
    pub chat_id: i64,
    /// The submitting user.
    pub sender: Sender,
    /// Kind of content carried by the message.
    pub kind: MediaKind,
    /// Text or caption.
    #[serde(default)]
    pub text: Option<String>,
    /// First link found in the message.
    #[serde(default)]
    pub url: Option<String>,
}

/// Bot commands understood by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Greets the user and explains what to send.
    Start,
}

impl Submission {
    /// Returns the bot command carried by the message, if any.
    ///
    /// Commands may be addressed to a bot (`/start@relay_bot`).
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        let text = self.text.as_deref()?.trim_start();
        let word = text.split_whitespace().next()?;
        let name = word.split('@').next().unwrap_or(word);
        match name {
            "/start" => Some(Command::Start),
            _ => None,
        }
    }

    /// Returns the opaque code linking a post back to its original message.
    #[must_use]
    pub fn link_code(&self) -> String {
        format!("{}:{}", self.chat_id, self.message_id)
    }
}

/// Result of forwarding a submission to the destination channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardReceipt {
    /// Identifier of the forwarded copy within the destination channel.
    pub message_id: i64,
}
