//! Application command implementations.
//!
//! This module contains the core logic for each CLI subcommand.

mod codebook;
mod io;
mod message;
mod script;

pub use codebook::{build_codebook, codebook_for};
pub use io::{STDIN_PATH, read_input, write_output};
pub use message::{decrypt_message, encrypt_message, load_dictionary};
pub use script::run_script;

/// Generates and prints the JSON schema for the `Codebook` struct.
///
/// # Errors
/// Returns an error if serialization to JSON fails.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn codebook_schema() -> eyre::Result<()> {
    let schema = schemars::schema_for!(avlcode_core::schema::codebook::Codebook);
    let schema_str = serde_json::to_string_pretty(&schema)?;
    println!("{schema_str}");
    Ok(())
}
