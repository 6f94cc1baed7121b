//! Service layer for post ingestion.
//!
//! Provides [`PostIngestionService`], which validates a post description
//! and commits it through a single atomic store insert.

use super::{PostServiceError, PostServiceResult};
use crate::post::{
    domain::{MediaKind, NewPost, Post, PostId, UserId},
    ports::{PostStore, PostStoreError},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Request payload for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    id: i64,
    poster: String,
    #[serde(default)]
    likes: i64,
    #[serde(default)]
    views: i64,
    source: String,
    #[serde(default)]
    share_link: Option<String>,
    file_type: MediaKind,
    #[serde(default)]
    link_code: Option<String>,
    submitter_uid: i64,
}

impl CreatePostRequest {
    /// Creates a request with the mandatory post fields and zero counters.
    #[must_use]
    pub fn new(
        id: i64,
        submitter_uid: i64,
        poster: impl Into<String>,
        source: impl Into<String>,
        file_type: MediaKind,
    ) -> Self {
        Self {
            id,
            poster: poster.into(),
            likes: 0,
            views: 0,
            source: source.into(),
            share_link: None,
            file_type,
            link_code: None,
            submitter_uid,
        }
    }

    /// Sets the like and view counters.
    #[must_use]
    pub const fn with_counts(mut self, likes: i64, views: i64) -> Self {
        self.likes = likes;
        self.views = views;
        self
    }

    /// Sets the shareable link.
    #[must_use]
    pub fn with_share_link(mut self, link: impl Into<String>) -> Self {
        self.share_link = Some(link.into());
        self
    }

    /// Sets the opaque link code.
    #[must_use]
    pub fn with_link_code(mut self, code: impl Into<String>) -> Self {
        self.link_code = Some(code.into());
        self
    }

    /// Returns the requested post identifier.
    #[must_use]
    pub const fn id(&self) -> PostId {
        PostId::new(self.id)
    }
}

/// Post creation orchestration service.
///
/// Holds no locks of its own: the store's atomic insert is the only
/// uniqueness enforcement point, even across processes.
pub struct PostIngestionService<S>
where
    S: PostStore,
{
    store: Arc<S>,
}

impl<S> Clone for PostIngestionService<S>
where
    S: PostStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> PostIngestionService<S>
where
    S: PostStore,
{
    /// Creates a new ingestion service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validates and stores a new post.
    ///
    /// Returns the post exactly as persisted, including the store-populated
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::InvalidArgument`] when a field fails
    /// validation, [`PostServiceError::AlreadyExists`] when the identifier is
    /// taken, [`PostServiceError::NotFound`] when the submitter does not
    /// exist, and [`PostServiceError::InternalFailure`] for any other store
    /// fault.
    pub async fn create_post(&self, request: CreatePostRequest) -> PostServiceResult<Post> {
        let CreatePostRequest {
            id,
            poster,
            likes,
            views,
            source,
            share_link,
            file_type,
            link_code,
            submitter_uid,
        } = request;

        let candidate = NewPost::new(
            PostId::new(id),
            UserId::new(submitter_uid),
            poster,
            source,
            file_type,
        )
        .and_then(|post| post.with_counts(likes, views))
        .map_err(|err| {
            warn!(post_id = id, error = %err, "rejected invalid post");
            PostServiceError::from(err)
        })?
        .with_share_link(share_link)
        .with_link_code(link_code);

        match self.store.insert(candidate).await {
            Ok(post) => {
                info!(
                    post_id = %post.id(),
                    submitter_uid = %post.submitter_uid(),
                    file_type = %post.file_type(),
                    "post created"
                );
                Ok(post)
            }
            Err(err) => Err(translate_insert_error(err)),
        }
    }
}

fn translate_insert_error(err: PostStoreError) -> PostServiceError {
    match err {
        PostStoreError::DuplicateKey(post_id) => {
            warn!(%post_id, "post already exists");
            PostServiceError::AlreadyExists(post_id)
        }
        PostStoreError::UnknownSubmitter(uid) => {
            warn!(submitter_uid = %uid, "post references an unknown submitter");
            PostServiceError::NotFound(uid)
        }
        other @ (PostStoreError::InvalidPersistedData(_) | PostStoreError::Persistence(_)) => {
            error!(error = %other, "failed to create post");
            PostServiceError::InternalFailure(other)
        }
    }
}
