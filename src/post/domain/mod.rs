//! Domain model for posts and their submitting users.
//!
//! Posts are immutable once stored. Users are owned outside the ingestion
//! path and referenced from posts by identifier only.

mod error;
mod ids;
mod media;
mod page;
mod post;
mod user;

pub use error::{ParseMediaKindError, PostDomainError};
pub use ids::{PostId, UserId};
pub use media::MediaKind;
pub use page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PostPage};
pub use post::{MAX_POSTER_LENGTH, MAX_SOURCE_LENGTH, NewPost, PersistedPostData, Post};
pub use user::{User, UserPosts};
