//! Repository port for post and user persistence.

use crate::post::domain::{NewPost, PageRequest, Post, PostId, PostPage, User, UserId, UserPosts};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for post store operations.
pub type PostStoreResult<T> = Result<T, PostStoreError>;

/// Post persistence contract.
///
/// Every mutating call is atomic: on failure the store is left exactly as
/// it was before the call, and readers never observe a partial write.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Commits a new post and returns it as persisted, including
    /// store-populated fields.
    ///
    /// # Errors
    ///
    /// Returns [`PostStoreError::DuplicateKey`] when a post with the same
    /// identifier already exists, or [`PostStoreError::UnknownSubmitter`]
    /// when the submitting user does not exist.
    async fn insert(&self, post: NewPost) -> PostStoreResult<Post>;

    /// Returns one page of posts in ascending identifier order.
    async fn list_all(&self, page: PageRequest) -> PostStoreResult<PostPage>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_user(&self, uid: UserId) -> PostStoreResult<Option<User>>;

    /// Resolves a user and all posts that reference it in a single read.
    ///
    /// Returns `None` when the user does not exist.
    async fn list_posts_for_user(&self, uid: UserId) -> PostStoreResult<Option<UserPosts>>;

    /// Registers a user, or refreshes the handle of an existing one.
    ///
    /// This is an administrative path; it never touches posts.
    async fn ensure_user(&self, user: &User) -> PostStoreResult<User>;
}

/// Errors returned by post store implementations.
#[derive(Debug, Clone, Error)]
pub enum PostStoreError {
    /// A post with the same identifier already exists.
    #[error("duplicate post identifier: {0}")]
    DuplicateKey(PostId),

    /// The submitting user referenced by a post does not exist.
    #[error("unknown submitter: {0}")]
    UnknownSubmitter(UserId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PostStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
