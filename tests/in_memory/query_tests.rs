//! In-memory integration tests for post retrieval.

use super::helpers::{ALICE, BOB, Services, full_request, services};
use postrelay::post::{
    domain::{PageRequest, PostId, User, UserId},
    ports::PostStore,
    services::PostErrorKind,
};
use rstest::rstest;

async fn create_all(services: &Services, posts: &[(i64, i64)]) {
    for &(id, submitter) in posts {
        services
            .ingestion
            .create_post(full_request(id, submitter, "poster"))
            .await
            .expect("seed post");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_returns_every_created_post(services: Services) {
    create_all(&services, &[(5, ALICE), (1, BOB), (3, ALICE)]).await;

    let page = services
        .query
        .list_posts(PageRequest::default())
        .await
        .expect("listing should succeed");

    let ids: Vec<_> = page.posts().iter().map(|post| post.id().value()).collect();
    assert_eq!(ids, vec![1, 3, 5]);
    assert_eq!(page.next_after(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pages_do_not_overlap(services: Services) {
    create_all(&services, &[(1, ALICE), (2, ALICE), (3, BOB), (4, BOB)]).await;
    let first_request = PageRequest::new(3).expect("valid page");

    let first = services
        .query
        .list_posts(first_request)
        .await
        .expect("first page");
    let second_request = first.next_request(first_request).expect("second page exists");
    let second = services
        .query
        .list_posts(second_request)
        .await
        .expect("second page");

    assert_eq!(first.posts().len(), 3);
    assert_eq!(first.next_after(), Some(PostId::new(3)));
    let second_ids: Vec<_> = second.posts().iter().map(|post| post.id()).collect();
    assert_eq!(second_ids, vec![PostId::new(4)]);
    assert_eq!(second.next_after(), None);
}

#[rstest]
#[case(None, PostErrorKind::InvalidArgument)]
#[case(Some(7), PostErrorKind::NotFound)]
#[tokio::test(flavor = "multi_thread")]
async fn user_lookup_failures_are_classified(
    services: Services,
    #[case] uid: Option<i64>,
    #[case] expected: PostErrorKind,
) {
    let result = services.query.get_user_posts(uid.map(UserId::new)).await;

    assert_eq!(result.map_err(|err| err.kind()).err(), Some(expected));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_posts_exclude_other_users(services: Services) {
    create_all(&services, &[(1, ALICE), (2, BOB), (3, ALICE), (4, BOB)]).await;

    let bob_posts = services
        .query
        .get_user_posts(Some(UserId::new(BOB)))
        .await
        .expect("lookup should succeed");

    assert_eq!(bob_posts.len(), 2);
    assert!(
        bob_posts
            .iter()
            .all(|post| post.submitter_uid() == UserId::new(BOB))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ensure_user_registers_and_keeps_existing_handle(services: Services) {
    let registered = services
        .store
        .ensure_user(&User::new(UserId::new(55)).with_handle("newcomer"))
        .await
        .expect("registration should succeed");
    let unchanged = services
        .store
        .ensure_user(&User::new(UserId::new(55)))
        .await
        .expect("re-registration should succeed");
    let found = services
        .store
        .find_user(UserId::new(55))
        .await
        .expect("lookup should succeed");

    assert_eq!(registered.handle(), Some("newcomer"));
    assert_eq!(unchanged.handle(), Some("newcomer"));
    assert_eq!(found, Some(registered));
}
