//! Caller-facing outcome mapping for post operations.
//!
//! Transport layers (HTTP handlers, chat relays) use these helpers to turn
//! a [`PostServiceError`] into a status code and a stable message.

use super::services::{PostErrorKind, PostServiceError};
use serde::Serialize;

/// Message returned when a post identifier is already taken.
pub const DUPLICATE_POST_DETAIL: &str = "Post with this ID already exists.";

/// Message returned when the referenced user is unknown.
pub const USER_NOT_FOUND_DETAIL: &str = "User not found";

/// Message returned for any internal failure.
pub const INTERNAL_FAILURE_DETAIL: &str = "An error occurred while processing the request.";

impl PostErrorKind {
    /// Returns the HTTP status code conventionally associated with the kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::InvalidArgument | Self::AlreadyExists => 400,
            Self::NotFound => 404,
            Self::InternalFailure => 500,
        }
    }
}

impl PostServiceError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Returns the caller-facing message for this error.
    ///
    /// Internal failures yield a generic message; their source stays in
    /// the logs.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidArgument(reason) => reason.to_string(),
            Self::AlreadyExists(_) => DUPLICATE_POST_DETAIL.to_owned(),
            Self::NotFound(_) => USER_NOT_FOUND_DETAIL.to_owned(),
            Self::InternalFailure(_) => INTERNAL_FAILURE_DETAIL.to_owned(),
        }
    }
}

/// Serialisable error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// HTTP status code.
    #[serde(skip)]
    pub status: u16,
    /// Caller-facing message.
    pub detail: String,
}

impl From<&PostServiceError> for ErrorBody {
    fn from(err: &PostServiceError) -> Self {
        Self {
            status: err.status_code(),
            detail: err.detail(),
        }
    }
}
