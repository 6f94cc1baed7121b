//! Concurrent creation tests against the in-memory store.

use super::helpers::{ALICE, BOB, Services, full_request, services};
use postrelay::post::{
    domain::{PageRequest, PostId},
    services::PostServiceError,
};
use rstest::rstest;

const RACERS: usize = 16;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_creates_on_one_id_admit_exactly_one(services: Services) {
    let handles: Vec<_> = (0..RACERS)
        .map(|racer| {
            let ingestion = services.ingestion.clone();
            let submitter = if racer % 2 == 0 { ALICE } else { BOB };
            tokio::spawn(async move {
                ingestion
                    .create_post(full_request(77, submitter, &format!("racer{racer}")))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.expect("task should not panic") {
            Ok(_) => successes += 1,
            Err(PostServiceError::AlreadyExists(id)) if id == PostId::new(77) => duplicates += 1,
            Err(other) => panic!("unexpected failure: {other:?}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(duplicates, RACERS - 1);
    let listed = services
        .query
        .list_posts(PageRequest::default())
        .await
        .expect("listing should succeed");
    assert_eq!(listed.posts().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_creates_on_distinct_ids_all_succeed(services: Services) {
    let handles: Vec<_> = (1..=i64::try_from(RACERS).expect("small count"))
        .map(|id| {
            let ingestion = services.ingestion.clone();
            tokio::spawn(async move {
                ingestion
                    .create_post(full_request(id, ALICE, "alice"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle
            .await
            .expect("task should not panic")
            .expect("distinct ids should all be accepted");
    }

    let listed = services
        .query
        .list_posts(PageRequest::default())
        .await
        .expect("listing should succeed");
    assert_eq!(listed.posts().len(), RACERS);
}
