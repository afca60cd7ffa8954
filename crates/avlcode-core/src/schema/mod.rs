//! Serialized schema/data contracts.

/// Codebook export schema types.
pub mod codebook;
/// Command script format.
pub mod script;
