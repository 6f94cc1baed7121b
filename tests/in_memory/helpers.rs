//! Shared test helpers for in-memory integration tests.

use postrelay::post::{
    adapters::memory::InMemoryPostStore,
    domain::{MediaKind, User, UserId},
    services::{CreatePostRequest, PostIngestionService, PostQueryService},
};
use rstest::fixture;
use std::sync::Arc;

/// Identifier of the user most scenarios post as.
pub const ALICE: i64 = 42;

/// Identifier of a second, independent user.
pub const BOB: i64 = 43;

/// Ingestion and query services sharing one store.
pub struct Services {
    /// Store shared by both services.
    pub store: Arc<InMemoryPostStore>,
    /// Ingestion service under test.
    pub ingestion: PostIngestionService<InMemoryPostStore>,
    /// Query service under test.
    pub query: PostQueryService<InMemoryPostStore>,
}

/// Provides services over a store seeded with [`ALICE`] and [`BOB`].
#[fixture]
pub fn services() -> Services {
    let store = Arc::new(
        InMemoryPostStore::new()
            .with_users([
                User::new(UserId::new(ALICE)).with_handle("alice"),
                User::new(UserId::new(BOB)).with_handle("bob"),
            ])
            .expect("seed users"),
    );
    Services {
        ingestion: PostIngestionService::new(Arc::clone(&store)),
        query: PostQueryService::new(Arc::clone(&store)),
        store,
    }
}

/// Builds a fully populated post request.
pub fn full_request(id: i64, submitter: i64, poster: &str) -> CreatePostRequest {
    CreatePostRequest::new(id, submitter, poster, "telegram", MediaKind::Video)
        .with_counts(0, 0)
        .with_share_link(format!("https://t.me/feed/{id}"))
        .with_link_code(format!("{submitter}:{id}"))
}
