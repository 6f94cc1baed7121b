//! Destination channel for relayed submissions.

/// The channel every submission is forwarded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    chat_id: i64,
    handle: Option<String>,
}

impl Destination {
    /// Creates a destination without a public handle.
    #[must_use]
    pub const fn new(chat_id: i64) -> Self {
        Self {
            chat_id,
            handle: None,
        }
    }

    /// Sets the public handle used to build share links.
    ///
    /// A leading `@` is stripped and blank handles are dropped.
    #[must_use]
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        let raw = handle.into();
        let trimmed = raw.trim().trim_start_matches('@');
        self.handle = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Returns the destination chat identifier.
    #[must_use]
    pub const fn chat_id(&self) -> i64 {
        self.chat_id
    }

    /// Returns the public handle, if any.
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    /// Returns the public link to a message in this channel, when the
    /// channel has a handle.
    #[must_use]
    pub fn message_link(&self, message_id: i64) -> Option<String> {
        self.handle
            .as_ref()
            .map(|handle| format!("https://t.me/{handle}/{message_id}"))
    }
}
