//! Script subcommands.

use std::path::PathBuf;

use super::constants::{AVLCODE_OUTPUT_FILE, AVLCODE_SCRIPT_FILE, DEFAULT_SCRIPT_FILE};
use super::parse_input_path;

/// Arguments for `avlcode script run`.
#[derive(Debug, clap::Args)]
pub struct ScriptRunArgs {
    /// Script to execute, one command per line. `-` reads stdin.
    #[arg(
        long,
        env = AVLCODE_SCRIPT_FILE,
        default_value = DEFAULT_SCRIPT_FILE,
        value_parser = parse_input_path
    )]
    pub script: PathBuf,
    /// Write the script's output here instead of stdout.
    #[arg(long, env = AVLCODE_OUTPUT_FILE)]
    pub output: Option<PathBuf>,
}

/// Script subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum ScriptCommands {
    /// Run a command script (`i`, `r`, `e`, `d`, `p`, `l`, `q`) against a fresh tree.
    Run {
        /// Arguments for the script run.
        #[command(flatten)]
        args: ScriptRunArgs,
    },
}
