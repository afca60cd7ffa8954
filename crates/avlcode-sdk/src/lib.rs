//! Workflows built on the avlcode encryption tree.

pub mod commands;
pub mod session;
