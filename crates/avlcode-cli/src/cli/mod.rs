//! Command-line interface for the `avlcode` CLI application.

mod codebook;
pub mod constants;
mod message;
mod script;

use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, ensure};

pub use self::codebook::CodebookCommands;
pub use self::message::MessageCommands;
pub use self::script::ScriptCommands;

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "avlcode")]
#[command(about = "Encrypt words as paths through a self-balancing tree")]
pub struct Cli {
    /// CLI top-level command group.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Command scripts driving a single tree.
    Script {
        /// Script subcommands.
        #[command(subcommand)]
        command: ScriptCommands,
    },
    /// Encrypt or decrypt a message against a dictionary.
    Message {
        /// Message subcommands.
        #[command(subcommand)]
        command: MessageCommands,
    },
    /// Codebook utilities.
    Codebook {
        /// Codebook subcommands.
        #[command(subcommand)]
        command: CodebookCommands,
    },
}

/// Accepts any non-blank path; `-` stands for stdin.
pub fn parse_input_path(s: &str) -> Result<PathBuf> {
    ensure!(!s.trim().is_empty(), "Input path must not be empty");
    Ok(PathBuf::from(s))
}
