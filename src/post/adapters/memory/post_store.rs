//! In-memory post store for tests and local runs.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::post::{
    domain::{NewPost, PageRequest, Post, PostId, PostPage, User, UserId, UserPosts},
    ports::{PostStore, PostStoreError, PostStoreResult},
};

/// Thread-safe in-memory post store.
///
/// Each insert runs under a single write lock, so uniqueness and submitter
/// checks and the write itself are one atomic step.
pub struct InMemoryPostStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryStoreState>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryPostStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    posts: BTreeMap<PostId, Post>,
    users: BTreeMap<UserId, User>,
    posts_by_user: HashMap<UserId, BTreeSet<PostId>>,
}

impl InMemoryPostStore {
    /// Creates an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryPostStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamped by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryStoreState::default())),
            clock,
        }
    }

    /// Seeds the store with users.
    ///
    /// # Errors
    ///
    /// Returns [`PostStoreError::Persistence`] when the lock is poisoned.
    pub fn with_users(self, users: impl IntoIterator<Item = User>) -> PostStoreResult<Self> {
        {
            let mut state = self.write_state()?;
            for user in users {
                state.users.insert(user.uid(), user);
            }
        }
        Ok(self)
    }

    fn read_state(&self) -> PostStoreResult<std::sync::RwLockReadGuard<'_, InMemoryStoreState>> {
        self.state
            .read()
            .map_err(|err| PostStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> PostStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryStoreState>> {
        self.state
            .write()
            .map_err(|err| PostStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl<C> PostStore for InMemoryPostStore<C>
where
    C: Clock + Send + Sync,
{
    async fn insert(&self, post: NewPost) -> PostStoreResult<Post> {
        let mut state = self.write_state()?;

        if state.posts.contains_key(&post.id()) {
            return Err(PostStoreError::DuplicateKey(post.id()));
        }
        if !state.users.contains_key(&post.submitter_uid()) {
            return Err(PostStoreError::UnknownSubmitter(post.submitter_uid()));
        }

        let stored = post.into_post(self.clock.utc());
        state
            .posts_by_user
            .entry(stored.submitter_uid())
            .or_default()
            .insert(stored.id());
        state.posts.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn list_all(&self, page: PageRequest) -> PostStoreResult<PostPage> {
        let state = self.read_state()?;
        let rows = match page.cursor() {
            Some(after) => state
                .posts
                .range((std::ops::Bound::Excluded(after), std::ops::Bound::Unbounded))
                .map(|(_, post)| post.clone())
                .take(page.fetch_limit())
                .collect(),
            None => state
                .posts
                .values()
                .cloned()
                .take(page.fetch_limit())
                .collect(),
        };
        Ok(PostPage::from_overfetch(rows, page))
    }

    async fn find_user(&self, uid: UserId) -> PostStoreResult<Option<User>> {
        let state = self.read_state()?;
        Ok(state.users.get(&uid).cloned())
    }

    async fn list_posts_for_user(&self, uid: UserId) -> PostStoreResult<Option<UserPosts>> {
        let state = self.read_state()?;
        let Some(user) = state.users.get(&uid).cloned() else {
            return Ok(None);
        };
        let posts = state
            .posts_by_user
            .get(&uid)
            .into_iter()
            .flatten()
            .filter_map(|id| state.posts.get(id))
            .cloned()
            .collect();
        Ok(Some(UserPosts::new(user, posts)))
    }

    async fn ensure_user(&self, user: &User) -> PostStoreResult<User> {
        let mut state = self.write_state()?;
        let stored = state
            .users
            .entry(user.uid())
            .and_modify(|existing| {
                if user.handle().is_some() {
                    existing.clone_from(user);
                }
            })
            .or_insert_with(|| user.clone())
            .clone();
        Ok(stored)
    }
}
