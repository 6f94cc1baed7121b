//! `PostgreSQL` repository implementation for posts and users.

use super::{
    models::{NewPostRow, PostRow, UserRow},
    schema::{posts, users},
};
use crate::post::{
    domain::{
        MediaKind, NewPost, PageRequest, PersistedPostData, Post, PostId, PostPage, User, UserId,
        UserPosts,
    },
    ports::{PostStore, PostStoreError, PostStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by post adapters.
pub type PostPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed post store.
///
/// Each operation checks a connection out of the pool on a blocking thread
/// and returns it when the closure finishes, whatever the outcome.
#[derive(Debug, Clone)]
pub struct PostgresPostStore {
    pool: PostPgPool,
}

impl PostgresPostStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PostPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PostStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PostStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PostStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PostStoreError::persistence)?
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, post: NewPost) -> PostStoreResult<Post> {
        let post_id = post.id();
        let submitter = post.submitter_uid();
        let new_row = to_new_row(post);

        self.run_blocking(move |connection| {
            let row = connection
                .transaction::<PostRow, DieselError, _>(|tx| {
                    diesel::insert_into(posts::table)
                        .values(&new_row)
                        .returning(PostRow::as_returning())
                        .get_result(tx)
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        PostStoreError::DuplicateKey(post_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        PostStoreError::UnknownSubmitter(submitter)
                    }
                    _ => PostStoreError::persistence(err),
                })?;
            row_to_post(row)
        })
        .await
    }

    async fn list_all(&self, page: PageRequest) -> PostStoreResult<PostPage> {
        let fetch_limit = i64::try_from(page.fetch_limit()).unwrap_or(i64::MAX);
        self.run_blocking(move |connection| {
            let mut query = posts::table
                .select(PostRow::as_select())
                .order(posts::id.asc())
                .limit(fetch_limit)
                .into_boxed();
            if let Some(after) = page.cursor() {
                query = query.filter(posts::id.gt(after.value()));
            }
            let rows = query
                .load::<PostRow>(connection)
                .map_err(PostStoreError::persistence)?;
            let posts = rows
                .into_iter()
                .map(row_to_post)
                .collect::<PostStoreResult<Vec<_>>>()?;
            Ok(PostPage::from_overfetch(posts, page))
        })
        .await
    }

    async fn find_user(&self, uid: UserId) -> PostStoreResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .find(uid.value())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(PostStoreError::persistence)?;
            Ok(row.map(row_to_user))
        })
        .await
    }

    async fn list_posts_for_user(&self, uid: UserId) -> PostStoreResult<Option<UserPosts>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .left_join(posts::table)
                .filter(users::uid.eq(uid.value()))
                .select((UserRow::as_select(), Option::<PostRow>::as_select()))
                .load::<(UserRow, Option<PostRow>)>(connection)
                .map_err(PostStoreError::persistence)?;

            let mut rows_iter = rows.into_iter();
            let Some((user_row, first_post)) = rows_iter.next() else {
                return Ok(None);
            };
            let mut posts = first_post
                .into_iter()
                .chain(rows_iter.filter_map(|(_, post_row)| post_row))
                .map(row_to_post)
                .collect::<PostStoreResult<Vec<_>>>()?;
            posts.sort_by_key(Post::id);
            Ok(Some(UserPosts::new(row_to_user(user_row), posts)))
        })
        .await
    }

    async fn ensure_user(&self, user: &User) -> PostStoreResult<User> {
        let new_row = UserRow {
            uid: user.uid().value(),
            handle: user.handle().map(str::to_owned),
        };

        self.run_blocking(move |connection| {
            let row = connection
                .transaction::<UserRow, DieselError, _>(|tx| {
                    let insert = diesel::insert_into(users::table).values(&new_row);
                    match &new_row.handle {
                        Some(handle) => {
                            insert
                                .on_conflict(users::uid)
                                .do_update()
                                .set(users::handle.eq(handle))
                                .execute(tx)?;
                        }
                        None => {
                            insert.on_conflict_do_nothing().execute(tx)?;
                        }
                    }
                    users::table
                        .find(new_row.uid)
                        .select(UserRow::as_select())
                        .first(tx)
                })
                .map_err(PostStoreError::persistence)?;
            Ok(row_to_user(row))
        })
        .await
    }
}

fn to_new_row(post: NewPost) -> NewPostRow {
    NewPostRow {
        id: post.id().value(),
        poster: post.poster().to_owned(),
        likes: post.likes(),
        views: post.views(),
        source: post.source().to_owned(),
        share_link: post.share_link().map(str::to_owned),
        file_type: post.file_type().as_str().to_owned(),
        link_code: post.link_code().map(str::to_owned),
        submitter_uid: post.submitter_uid().value(),
    }
}

fn row_to_post(row: PostRow) -> PostStoreResult<Post> {
    let PostRow {
        id,
        poster,
        likes,
        views,
        source,
        share_link,
        file_type,
        link_code,
        submitter_uid,
        created_at,
    } = row;

    let parsed_kind =
        MediaKind::try_from(file_type.as_str()).map_err(PostStoreError::invalid_persisted_data)?;

    Ok(Post::from_persisted(PersistedPostData {
        id: PostId::new(id),
        poster,
        likes,
        views,
        source,
        share_link,
        file_type: parsed_kind,
        link_code,
        submitter_uid: UserId::new(submitter_uid),
        created_at,
    }))
}

fn row_to_user(row: UserRow) -> User {
    let user = User::new(UserId::new(row.uid));
    match row.handle {
        Some(handle) => user.with_handle(handle),
        None => user,
    }
}
