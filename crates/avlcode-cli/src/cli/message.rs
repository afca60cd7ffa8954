//! Message subcommands.

use std::path::PathBuf;

use super::constants::{AVLCODE_DICTIONARY_FILE, AVLCODE_OUTPUT_FILE, DEFAULT_DICTIONARY_FILE};
use super::parse_input_path;

/// Dictionary and output shared by the message subcommands.
#[derive(Debug, clap::Args)]
pub struct DictionaryArgs {
    /// Whitespace separated words, inserted into the tree in file order.
    #[arg(
        long,
        env = AVLCODE_DICTIONARY_FILE,
        default_value = DEFAULT_DICTIONARY_FILE,
        value_parser = parse_input_path
    )]
    pub dictionary: PathBuf,
    /// Write the translated line here instead of stdout.
    #[arg(long, env = AVLCODE_OUTPUT_FILE)]
    pub output: Option<PathBuf>,
}

/// Message subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum MessageCommands {
    /// Replace every word with its path code (`?` when not in the dictionary).
    Encrypt {
        /// Dictionary and output.
        #[command(flatten)]
        args: DictionaryArgs,
        /// Words to encrypt.
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Replace every path code with its word (`?` when it addresses no word).
    Decrypt {
        /// Dictionary and output.
        #[command(flatten)]
        args: DictionaryArgs,
        /// Codes to decrypt, such as `r`, `r0` or `r101`.
        #[arg(required = true)]
        codes: Vec<String>,
    },
}
