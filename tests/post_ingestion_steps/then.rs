//! Then steps for post ingestion BDD scenarios.

use super::world::{PostWorld, run_async};
use postrelay::post::{
    domain::{PageRequest, UserId},
    services::{InvalidArgument, PostServiceError},
};
use postrelay::relay::services::{ACKNOWLEDGEMENT, RelayOutcome};
use rstest_bdd_macros::then;

#[then("creation fails because the post already exists")]
fn creation_fails_with_duplicate(world: &PostWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))?;
    match result {
        Err(err @ PostServiceError::AlreadyExists(_)) => {
            if err.detail() != "Post with this ID already exists." {
                return Err(eyre::eyre!("unexpected duplicate detail: {}", err.detail()));
            }
            Ok(())
        }
        other => Err(eyre::eyre!("expected duplicate error, got {other:?}")),
    }
}

#[then("listing all posts returns {count:usize} entries")]
fn list_all_returns_count(world: &PostWorld, count: usize) -> Result<(), eyre::Report> {
    let page = run_async(world.query.list_posts(PageRequest::default()))
        .map_err(|err| eyre::eyre!("list_posts failed: {err}"))?;
    if page.posts().len() != count {
        return Err(eyre::eyre!(
            "expected {count} posts, found {}",
            page.posts().len()
        ));
    }
    Ok(())
}

#[then("the lookup fails because the user was not found")]
fn lookup_not_found(world: &PostWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_lookup_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lookup result in scenario world"))?;
    if !matches!(result, Err(PostServiceError::NotFound(_))) {
        return Err(eyre::eyre!("expected not found error, got {result:?}"));
    }
    Ok(())
}

#[then("the lookup fails with an invalid argument")]
fn lookup_invalid_argument(world: &PostWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_lookup_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lookup result in scenario world"))?;
    if !matches!(
        result,
        Err(PostServiceError::InvalidArgument(InvalidArgument::MissingUserId))
    ) {
        return Err(eyre::eyre!("expected invalid argument error, got {result:?}"));
    }
    Ok(())
}

#[then("the submitter is told the submission was forwarded")]
fn submitter_acknowledged(world: &PostWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_relay_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing relay result in scenario world"))?;
    if !matches!(result, Ok(RelayOutcome::Stored(_))) {
        return Err(eyre::eyre!("expected stored outcome, got {result:?}"));
    }
    let replies = world.channel.replies();
    if !replies.iter().any(|(_, text)| text == ACKNOWLEDGEMENT) {
        return Err(eyre::eyre!("expected acknowledgement, got {replies:?}"));
    }
    Ok(())
}

#[then(r#"user {uid:i64} owns {count:usize} posts linked to "{link}""#)]
fn user_owns_posts(
    world: &PostWorld,
    uid: i64,
    count: usize,
    link: String,
) -> Result<(), eyre::Report> {
    let posts = run_async(world.query.get_user_posts(Some(UserId::new(uid))))
        .map_err(|err| eyre::eyre!("get_user_posts failed: {err}"))?;
    if posts.len() != count {
        return Err(eyre::eyre!("expected {count} posts, found {}", posts.len()));
    }
    if !posts.iter().all(|post| post.share_link() == Some(link.as_str())) {
        return Err(eyre::eyre!("expected every post to link to {link}"));
    }
    Ok(())
}
