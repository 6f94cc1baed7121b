//! Media kind carried by a post.

use super::ParseMediaKindError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content a post carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Plain text.
    Text,
    /// A still image.
    Photo,
    /// A video clip.
    Video,
    /// A bare link to external content.
    Link,
}

impl MediaKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MediaKind {
    type Error = ParseMediaKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "text" => Ok(Self::Text),
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            "link" | "url" => Ok(Self::Link),
            _ => Err(ParseMediaKindError(value.to_owned())),
        }
    }
}
