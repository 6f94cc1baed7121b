//! Diesel row models for post persistence.

use super::schema::{posts, users};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for post records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostRow {
    /// Caller-supplied post identifier.
    pub id: i64,
    /// Poster name or handle.
    pub poster: String,
    /// Like counter.
    pub likes: i64,
    /// View counter.
    pub views: i64,
    /// Origin source.
    pub source: String,
    /// Shareable link.
    pub share_link: Option<String>,
    /// Media kind.
    pub file_type: String,
    /// Opaque link code.
    pub link_code: Option<String>,
    /// Submitting user identifier.
    pub submitter_uid: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for post records. `created_at` is left to the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub struct NewPostRow {
    /// Caller-supplied post identifier.
    pub id: i64,
    /// Poster name or handle.
    pub poster: String,
    /// Like counter.
    pub likes: i64,
    /// View counter.
    pub views: i64,
    /// Origin source.
    pub source: String,
    /// Shareable link.
    pub share_link: Option<String>,
    /// Media kind.
    pub file_type: String,
    /// Opaque link code.
    pub link_code: Option<String>,
    /// Submitting user identifier.
    pub submitter_uid: i64,
}

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub uid: i64,
    /// Optional display handle.
    pub handle: Option<String>,
}
