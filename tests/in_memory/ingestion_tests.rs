//! In-memory integration tests for post creation.

use super::helpers::{ALICE, Services, full_request, services};
use postrelay::post::{
    domain::{PageRequest, PostId, UserId},
    services::{PostErrorKind, PostServiceError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_create_with_same_id_is_rejected(services: Services) {
    services
        .ingestion
        .create_post(full_request(1, ALICE, "alice"))
        .await
        .expect("first creation should succeed");

    let second = services
        .ingestion
        .create_post(full_request(1, ALICE, "alice"))
        .await;

    assert!(matches!(second, Err(PostServiceError::AlreadyExists(id)) if id == PostId::new(1)));
    let listed = services
        .query
        .list_posts(PageRequest::default())
        .await
        .expect("listing should succeed");
    let ids: Vec<_> = listed.posts().iter().map(|post| post.id()).collect();
    assert_eq!(ids, vec![PostId::new(1)]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_record_matches_later_reads(services: Services) {
    let created = services
        .ingestion
        .create_post(full_request(9, ALICE, "alice"))
        .await
        .expect("creation should succeed");

    let listed = services
        .query
        .list_posts(PageRequest::default())
        .await
        .expect("listing should succeed");
    let by_user = services
        .query
        .get_user_posts(Some(UserId::new(ALICE)))
        .await
        .expect("lookup should succeed");

    assert_eq!(listed.posts().first(), Some(&created));
    assert_eq!(by_user.first(), Some(&created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dangling_submitter_is_rejected_and_nothing_is_stored(services: Services) {
    let result = services
        .ingestion
        .create_post(full_request(1, 7, "ghost"))
        .await;

    assert_eq!(
        result.map_err(|err| err.kind()).err(),
        Some(PostErrorKind::NotFound)
    );
    let listed = services
        .query
        .list_posts(PageRequest::default())
        .await
        .expect("listing should succeed");
    assert!(listed.posts().is_empty());
}
