//! Caller-facing error taxonomy for post services.
//!
//! Store failures are translated into one of four kinds before they leave
//! a service. The underlying store error is kept as the error source for
//! diagnostics and never inspected by message text.

use crate::post::{
    domain::{PostDomainError, PostId, UserId},
    ports::PostStoreError,
};
use thiserror::Error;

/// Malformed or missing caller input, rejected before any store access.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A post field failed domain validation.
    #[error(transparent)]
    Domain(#[from] PostDomainError),

    /// No user identifier was supplied.
    #[error("user ID cannot be None")]
    MissingUserId,
}

/// Service-level errors for post operations.
#[derive(Debug, Error)]
pub enum PostServiceError {
    /// Caller input was malformed or missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// A post with the requested identifier already exists.
    #[error("post {0} already exists")]
    AlreadyExists(PostId),

    /// The referenced user does not exist.
    #[error("user {0} not found")]
    NotFound(UserId),

    /// Any other store or transport fault.
    #[error("internal failure")]
    InternalFailure(#[source] PostStoreError),
}

impl From<PostDomainError> for PostServiceError {
    fn from(err: PostDomainError) -> Self {
        Self::InvalidArgument(InvalidArgument::Domain(err))
    }
}

/// Coarse classification of a [`PostServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostErrorKind {
    /// Malformed or missing caller input.
    InvalidArgument,
    /// Uniqueness violation on create.
    AlreadyExists,
    /// Referenced entity absent.
    NotFound,
    /// Store or transport fault.
    InternalFailure,
}

impl PostServiceError {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> PostErrorKind {
        match self {
            Self::InvalidArgument(_) => PostErrorKind::InvalidArgument,
            Self::AlreadyExists(_) => PostErrorKind::AlreadyExists,
            Self::NotFound(_) => PostErrorKind::NotFound,
            Self::InternalFailure(_) => PostErrorKind::InternalFailure,
        }
    }

    /// Returns `true` when the caller, not the system, is at fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::InternalFailure(_))
    }
}

/// Result type for post service operations.
pub type PostServiceResult<T> = Result<T, PostServiceError>;
