//! In-memory adapters for post persistence.

mod post_store;

pub use post_store::InMemoryPostStore;
