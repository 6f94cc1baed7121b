//! Given steps for post ingestion BDD scenarios.

use std::sync::Arc;

use super::world::{PostWorld, build_request, run_async};
use eyre::WrapErr;
use postrelay::post::{
    domain::{User, UserId},
    ports::PostStore,
};
use postrelay::relay::{domain::Destination, services::RelayService};
use rstest_bdd_macros::given;

#[given(r#"a registered user {uid:i64} with handle "{handle}""#)]
fn a_registered_user(world: &mut PostWorld, uid: i64, handle: String) -> Result<(), eyre::Report> {
    run_async(
        world
            .store
            .ensure_user(&User::new(UserId::new(uid)).with_handle(handle)),
    )
    .wrap_err("register user for scenario")?;
    Ok(())
}

#[given(r#"post {id:i64} has already been created by user {uid:i64} as "{poster}""#)]
fn post_already_created(
    world: &mut PostWorld,
    id: i64,
    uid: i64,
    poster: String,
) -> Result<(), eyre::Report> {
    run_async(world.ingestion.create_post(build_request(id, uid, &poster)))
        .wrap_err("create existing post for duplicate scenario")?;
    Ok(())
}

#[given(r#"a relay forwarding to channel "{handle}""#)]
fn a_relay(world: &mut PostWorld, handle: String) {
    world.relay = Some(RelayService::new(
        Arc::clone(&world.store),
        Arc::clone(&world.channel),
        Destination::new(-100).with_handle(handle),
    ));
}
