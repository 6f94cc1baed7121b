//! Unit tests for the post module.

mod support;
