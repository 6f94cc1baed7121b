//! Diesel schema for post persistence.

diesel::table! {
    /// Submitting users.
    users (uid) {
        /// User identifier.
        uid -> Int8,
        /// Optional display handle.
        #[max_length = 255]
        handle -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Stored posts.
    posts (id) {
        /// Caller-supplied post identifier.
        id -> Int8,
        /// Poster name or handle.
        #[max_length = 255]
        poster -> Varchar,
        /// Like counter.
        likes -> Int8,
        /// View counter.
        views -> Int8,
        /// Origin source.
        #[max_length = 255]
        source -> Varchar,
        /// Shareable link.
        share_link -> Nullable<Text>,
        /// Media kind.
        #[max_length = 20]
        file_type -> Varchar,
        /// Opaque link code.
        link_code -> Nullable<Text>,
        /// Submitting user identifier.
        submitter_uid -> Int8,
        /// Creation timestamp populated by the database.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(posts -> users (submitter_uid));
diesel::allow_tables_to_appear_in_same_query!(posts, users);
