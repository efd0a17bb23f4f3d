//! Unit tests for the storage boundary.
