//! Keyset pagination for bulk post listings.

use super::{Post, PostDomainError, PostId};
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Largest page a single listing may return.
pub const MAX_PAGE_SIZE: usize = 500;

/// Cursor and size of one page of a post listing.
///
/// Pages are ordered by ascending post identifier. `after` is the last
/// identifier seen on the previous page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    after: Option<PostId>,
    limit: usize,
}

impl PageRequest {
    /// Creates a request for the first page with the given size.
    ///
    /// Sizes above [`MAX_PAGE_SIZE`] are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`PostDomainError::EmptyPage`] when `limit` is zero.
    pub const fn new(limit: usize) -> Result<Self, PostDomainError> {
        if limit == 0 {
            return Err(PostDomainError::EmptyPage);
        }
        let clamped = if limit > MAX_PAGE_SIZE {
            MAX_PAGE_SIZE
        } else {
            limit
        };
        Ok(Self {
            after: None,
            limit: clamped,
        })
    }

    /// Continues the listing after the given post identifier.
    #[must_use]
    pub const fn after(mut self, cursor: PostId) -> Self {
        self.after = Some(cursor);
        self
    }

    /// Returns the exclusive lower bound of the page, if any.
    #[must_use]
    pub const fn cursor(&self) -> Option<PostId> {
        self.after
    }

    /// Returns the maximum number of posts on the page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of rows an adapter should fetch to detect a
    /// following page.
    #[must_use]
    pub const fn fetch_limit(&self) -> usize {
        self.limit.saturating_add(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            after: None,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of posts in ascending identifier order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    posts: Vec<Post>,
    next_after: Option<PostId>,
}

impl PostPage {
    /// Builds a page from up to [`PageRequest::fetch_limit`] ordered rows.
    ///
    /// The extra row, when present, only signals that another page exists
    /// and is dropped.
    #[must_use]
    pub fn from_overfetch(mut posts: Vec<Post>, request: PageRequest) -> Self {
        let has_more = posts.len() > request.limit();
        posts.truncate(request.limit());
        let next_after = if has_more {
            posts.last().map(Post::id)
        } else {
            None
        };
        Self { posts, next_after }
    }

    /// Returns the posts on this page.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Consumes the page and returns its posts.
    #[must_use]
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }

    /// Returns the cursor for the next page, or `None` on the last page.
    #[must_use]
    pub const fn next_after(&self) -> Option<PostId> {
        self.next_after
    }

    /// Returns the request for the following page, if one exists.
    #[must_use]
    pub fn next_request(&self, current: PageRequest) -> Option<PageRequest> {
        self.next_after.map(|cursor| current.after(cursor))
    }
}
