//! Codebook subcommands.

use std::path::PathBuf;

use super::constants::{AVLCODE_CODEBOOK_OUT, AVLCODE_DICTIONARY_FILE, DEFAULT_DICTIONARY_FILE};
use super::parse_input_path;

/// Arguments for `avlcode codebook build`.
#[derive(Debug, clap::Args)]
pub struct CodebookBuildArgs {
    /// Whitespace separated words, inserted into the tree in file order.
    #[arg(
        long,
        env = AVLCODE_DICTIONARY_FILE,
        default_value = DEFAULT_DICTIONARY_FILE,
        value_parser = parse_input_path
    )]
    pub dictionary: PathBuf,
    /// Write the JSON codebook here instead of stdout.
    #[arg(long, env = AVLCODE_CODEBOOK_OUT)]
    pub output: Option<PathBuf>,
}

/// Codebook subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum CodebookCommands {
    /// List every dictionary word with its path code as JSON.
    Build {
        /// Arguments for the codebook build.
        #[command(flatten)]
        args: CodebookBuildArgs,
    },
    /// Print the JSON schema of the codebook.
    Schema,
}
