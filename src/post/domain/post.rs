//! Post aggregate and its validated insert candidate.

use super::{MediaKind, PostDomainError, PostId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum poster length accepted by storage.
pub const MAX_POSTER_LENGTH: usize = 255;

/// Maximum source length accepted by storage.
pub const MAX_SOURCE_LENGTH: usize = 255;

/// A validated post that has not been stored yet.
///
/// Stores turn a candidate into a [`Post`] by stamping the creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    id: PostId,
    poster: String,
    likes: i64,
    views: i64,
    source: String,
    share_link: Option<String>,
    file_type: MediaKind,
    link_code: Option<String>,
    submitter_uid: UserId,
}

impl NewPost {
    /// Creates a candidate post with zero likes and views.
    ///
    /// `poster` and `source` are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`PostDomainError::EmptyPoster`],
    /// [`PostDomainError::PosterTooLong`], [`PostDomainError::EmptySource`]
    /// or [`PostDomainError::SourceTooLong`] when the corresponding field is
    /// invalid.
    pub fn new(
        id: PostId,
        submitter_uid: UserId,
        raw_poster: impl Into<String>,
        raw_source: impl Into<String>,
        file_type: MediaKind,
    ) -> Result<Self, PostDomainError> {
        let poster = raw_poster.into().trim().to_owned();
        let source = raw_source.into().trim().to_owned();

        if poster.is_empty() {
            return Err(PostDomainError::EmptyPoster);
        }
        if poster.chars().count() > MAX_POSTER_LENGTH {
            return Err(PostDomainError::PosterTooLong {
                value: poster,
                max: MAX_POSTER_LENGTH,
            });
        }
        if source.is_empty() {
            return Err(PostDomainError::EmptySource);
        }
        if source.chars().count() > MAX_SOURCE_LENGTH {
            return Err(PostDomainError::SourceTooLong {
                value: source,
                max: MAX_SOURCE_LENGTH,
            });
        }

        Ok(Self {
            id,
            poster,
            likes: 0,
            views: 0,
            source,
            share_link: None,
            file_type,
            link_code: None,
            submitter_uid,
        })
    }

    /// Sets the like and view counters.
    ///
    /// # Errors
    ///
    /// Returns [`PostDomainError::NegativeCount`] when either value is
    /// negative.
    pub fn with_counts(mut self, likes: i64, views: i64) -> Result<Self, PostDomainError> {
        if likes < 0 {
            return Err(PostDomainError::NegativeCount {
                field: "likes",
                value: likes,
            });
        }
        if views < 0 {
            return Err(PostDomainError::NegativeCount {
                field: "views",
                value: views,
            });
        }
        self.likes = likes;
        self.views = views;
        Ok(self)
    }

    /// Sets the shareable link. Blank links are dropped.
    #[must_use]
    pub fn with_share_link(mut self, link: Option<String>) -> Self {
        self.share_link = non_blank(link);
        self
    }

    /// Sets the opaque link code. Blank codes are dropped.
    #[must_use]
    pub fn with_link_code(mut self, code: Option<String>) -> Self {
        self.link_code = non_blank(code);
        self
    }

    /// Returns the caller-supplied identifier.
    #[must_use]
    pub const fn id(&self) -> PostId {
        self.id
    }

    /// Returns the submitting user identifier.
    #[must_use]
    pub const fn submitter_uid(&self) -> UserId {
        self.submitter_uid
    }

    /// Returns the poster name.
    #[must_use]
    pub fn poster(&self) -> &str {
        &self.poster
    }

    /// Returns the like counter.
    #[must_use]
    pub const fn likes(&self) -> i64 {
        self.likes
    }

    /// Returns the view counter.
    #[must_use]
    pub const fn views(&self) -> i64 {
        self.views
    }

    /// Returns the origin source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the shareable link.
    #[must_use]
    pub fn share_link(&self) -> Option<&str> {
        self.share_link.as_deref()
    }

    /// Returns the media kind.
    #[must_use]
    pub const fn file_type(&self) -> MediaKind {
        self.file_type
    }

    /// Returns the opaque link code.
    #[must_use]
    pub fn link_code(&self) -> Option<&str> {
        self.link_code.as_deref()
    }

    /// Converts the candidate into a stored post with the given creation
    /// time.
    #[must_use]
    pub fn into_post(self, created_at: DateTime<Utc>) -> Post {
        Post::from_persisted(PersistedPostData {
            id: self.id,
            poster: self.poster,
            likes: self.likes,
            views: self.views,
            source: self.source,
            share_link: self.share_link,
            file_type: self.file_type,
            link_code: self.link_code,
            submitter_uid: self.submitter_uid,
            created_at,
        })
    }
}

/// A stored, immutable post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    poster: String,
    likes: i64,
    views: i64,
    source: String,
    share_link: Option<String>,
    file_type: MediaKind,
    link_code: Option<String>,
    submitter_uid: UserId,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPostData {
    /// Persisted post identifier.
    pub id: PostId,
    /// Persisted poster name.
    pub poster: String,
    /// Persisted like counter.
    pub likes: i64,
    /// Persisted view counter.
    pub views: i64,
    /// Persisted origin source.
    pub source: String,
    /// Persisted shareable link.
    pub share_link: Option<String>,
    /// Persisted media kind.
    pub file_type: MediaKind,
    /// Persisted opaque link code.
    pub link_code: Option<String>,
    /// Persisted submitting user identifier.
    pub submitter_uid: UserId,
    /// Store-populated creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Reconstructs a post from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPostData) -> Self {
        Self {
            id: data.id,
            poster: data.poster,
            likes: data.likes,
            views: data.views,
            source: data.source,
            share_link: data.share_link,
            file_type: data.file_type,
            link_code: data.link_code,
            submitter_uid: data.submitter_uid,
            created_at: data.created_at,
        }
    }

    /// Returns the post identifier.
    #[must_use]
    pub const fn id(&self) -> PostId {
        self.id
    }

    /// Returns the poster name.
    #[must_use]
    pub fn poster(&self) -> &str {
        &self.poster
    }

    /// Returns the like counter.
    #[must_use]
    pub const fn likes(&self) -> i64 {
        self.likes
    }

    /// Returns the view counter.
    #[must_use]
    pub const fn views(&self) -> i64 {
        self.views
    }

    /// Returns the origin source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the shareable link.
    #[must_use]
    pub fn share_link(&self) -> Option<&str> {
        self.share_link.as_deref()
    }

    /// Returns the media kind.
    #[must_use]
    pub const fn file_type(&self) -> MediaKind {
        self.file_type
    }

    /// Returns the opaque link code.
    #[must_use]
    pub fn link_code(&self) -> Option<&str> {
        self.link_code.as_deref()
    }

    /// Returns the submitting user identifier.
    #[must_use]
    pub const fn submitter_uid(&self) -> UserId {
        self.submitter_uid
    }

    /// Returns the store-populated creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}
