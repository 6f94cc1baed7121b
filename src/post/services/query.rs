//! Service layer for read-only post retrieval.

use super::{InvalidArgument, PostServiceError, PostServiceResult};
use crate::post::{
    domain::{PageRequest, Post, PostPage, UserId},
    ports::{PostStore, PostStoreError},
};
use std::sync::Arc;
use tracing::{debug, error};

/// Post listing and per-user lookup service.
pub struct PostQueryService<S>
where
    S: PostStore,
{
    store: Arc<S>,
}

impl<S> Clone for PostQueryService<S>
where
    S: PostStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> PostQueryService<S>
where
    S: PostStore,
{
    /// Creates a new query service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns one page of posts in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::InternalFailure`] when the store read
    /// fails.
    pub async fn list_posts(&self, page: PageRequest) -> PostServiceResult<PostPage> {
        self.store.list_all(page).await.map_err(internal("list posts"))
    }

    /// Returns every post submitted by the given user.
    ///
    /// The user and its posts are resolved together in one store read.
    ///
    /// # Errors
    ///
    /// Returns [`PostServiceError::InvalidArgument`] when `uid` is `None`
    /// (before touching the store), [`PostServiceError::NotFound`] when no
    /// such user exists, and [`PostServiceError::InternalFailure`] when the
    /// store read fails.
    pub async fn get_user_posts(&self, uid: Option<UserId>) -> PostServiceResult<Vec<Post>> {
        let user_id = uid.ok_or(InvalidArgument::MissingUserId)?;

        let resolved = self
            .store
            .list_posts_for_user(user_id)
            .await
            .map_err(internal("list user posts"))?
            .ok_or(PostServiceError::NotFound(user_id))?;

        debug!(uid = %user_id, count = resolved.posts().len(), "resolved user posts");
        Ok(resolved.into_posts())
    }
}

fn internal(operation: &'static str) -> impl FnOnce(PostStoreError) -> PostServiceError {
    move |err| {
        error!(error = %err, operation, "post query failed");
        PostServiceError::InternalFailure(err)
    }
}
