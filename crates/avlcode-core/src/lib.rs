//! Avlcode shared formats.

/// Serialized/public schema models used across the workspace.
pub mod schema;
