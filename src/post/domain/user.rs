//! Submitting users and their owned posts.

use super::{Post, UserId};
use serde::{Deserialize, Serialize};

/// A submitting identity that owns zero or more posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    uid: UserId,
    handle: Option<String>,
}

impl User {
    /// Creates a user with no display handle.
    #[must_use]
    pub const fn new(uid: UserId) -> Self {
        Self { uid, handle: None }
    }

    /// Sets the display handle. Blank handles are dropped.
    #[must_use]
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        let trimmed = handle.into().trim().to_owned();
        self.handle = (!trimmed.is_empty()).then_some(trimmed);
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn uid(&self) -> UserId {
        self.uid
    }

    /// Returns the display handle, if known.
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }
}

/// A user together with every post that references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPosts {
    user: User,
    posts: Vec<Post>,
}

impl UserPosts {
    /// Pairs a user with its resolved posts.
    #[must_use]
    pub const fn new(user: User, posts: Vec<Post>) -> Self {
        Self { user, posts }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns the user's posts in ascending identifier order.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Consumes the pair and returns the posts.
    #[must_use]
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }
}
