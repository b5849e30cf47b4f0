//! Shared fixtures for the workspace's integration tests.

pub mod fixtures;
pub mod recording;
