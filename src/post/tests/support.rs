//! Shared fixtures for post unit tests.

use crate::post::{
    adapters::memory::InMemoryPostStore,
    domain::{MediaKind, NewPost, PageRequest, Post, PostPage, User, UserId, UserPosts},
    ports::{PostStore, PostStoreError, PostStoreResult},
    services::CreatePostRequest,
};
use async_trait::async_trait;
use mockall::mock;
use rstest::fixture;

mock! {
    pub Store {}

    #[async_trait]
    impl PostStore for Store {
        async fn insert(&self, post: NewPost) -> PostStoreResult<Post>;
        async fn list_all(&self, page: PageRequest) -> PostStoreResult<PostPage>;
        async fn find_user(&self, uid: UserId) -> PostStoreResult<Option<User>>;
        async fn list_posts_for_user(&self, uid: UserId) -> PostStoreResult<Option<UserPosts>>;
        async fn ensure_user(&self, user: &User) -> PostStoreResult<User>;
    }
}

/// User that owns posts in most tests.
pub const ALICE: i64 = 42;

/// Second user, used to check per-user scoping.
pub const BOB: i64 = 43;

/// Store seeded with [`ALICE`] and [`BOB`].
#[fixture]
pub fn store() -> InMemoryPostStore {
    InMemoryPostStore::new()
        .with_users([
            User::new(UserId::new(ALICE)).with_handle("alice"),
            User::new(UserId::new(BOB)).with_handle("bob"),
        ])
        .expect("seed users")
}

/// Builds a text post request for the given id and submitter.
pub fn request(id: i64, submitter: i64) -> CreatePostRequest {
    CreatePostRequest::new(id, submitter, "alice", "telegram", MediaKind::Text)
}

/// Store error standing in for a lost database connection.
pub fn connection_lost() -> PostStoreError {
    PostStoreError::persistence(std::io::Error::other("connection reset by peer"))
}
