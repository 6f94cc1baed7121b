//! Unit tests for the relay module.
