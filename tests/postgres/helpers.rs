//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, TemporaryDatabase, postgres_cluster};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use postrelay::post::{
    adapters::postgres::{PostPgPool, PostgresPostStore},
    domain::MediaKind,
    services::CreatePostRequest,
};
use uuid::Uuid;

/// SQL to create the users and posts tables.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-16-000000_create_users_and_posts/up.sql");

/// Submitter seeded into every test database.
pub const ALICE: i64 = 42;

/// A migrated database plus a store bound to it.
///
/// Field order matters: the store's pool is dropped before the database.
pub struct StoreContext {
    /// Store bound to the database.
    pub store: PostgresPostStore,
    /// Connection URL of the database.
    pub url: String,
    _db: TemporaryDatabase,
}

/// Creates a fresh migrated database with `ALICE` registered.
///
/// # Errors
///
/// Returns an error if database creation, migration or pool setup fails.
pub fn setup_store(cluster: PostgresCluster, pool_size: u32) -> Result<StoreContext, BoxError> {
    let db = cluster.temporary_database(&format!("posts_{}", Uuid::new_v4().simple()))?;
    let url = db.url().to_owned();

    let mut conn = PgConnection::establish(&url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_SCHEMA_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    insert_user(&mut conn, ALICE, Some("alice"))?;

    let pool: PostPgPool = Pool::builder()
        .max_size(pool_size)
        .build(ConnectionManager::<PgConnection>::new(url.clone()))
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(StoreContext {
        store: PostgresPostStore::new(pool),
        url,
        _db: db,
    })
}

/// Inserts a user row directly, bypassing the store.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_user(
    conn: &mut PgConnection,
    uid: i64,
    handle: Option<&str>,
) -> Result<(), BoxError> {
    diesel::sql_query("INSERT INTO users (uid, handle) VALUES ($1, $2)")
        .bind::<diesel::sql_types::BigInt, _>(uid)
        .bind::<diesel::sql_types::Nullable<diesel::sql_types::Varchar>, _>(handle)
        .execute(conn)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Builds a text post request with default counts.
pub fn request(id: i64, submitter: i64, poster: &str) -> CreatePostRequest {
    CreatePostRequest::new(id, submitter, poster, "telegram", MediaKind::Text)
}
