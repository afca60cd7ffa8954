//! avlcode CLI Application

mod cli;

use clap::Parser as _;
use cli::{Cli, CodebookCommands, Commands, MessageCommands, ScriptCommands};
use tracing::info;

fn init_tracing() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(false)
        // Program output owns stdout.
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))?;

    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> eyre::Result<()> {
    // Load .env file (fails silently if not found)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();

    let res = match cli.command {
        Commands::Script { command } => match command {
            ScriptCommands::Run { args } => {
                avlcode_sdk::commands::run_script(args.script, args.output)
                    .await
                    .map(|summary| {
                        if let Some(line) = summary.quit_at {
                            info!(line, "Script stopped at quit");
                        }
                    })
            }
        },
        Commands::Message { command } => match command {
            MessageCommands::Encrypt { args, words } => {
                avlcode_sdk::commands::encrypt_message(args.dictionary, words, args.output)
                    .await
                    .map(drop)
            }
            MessageCommands::Decrypt { args, codes } => {
                avlcode_sdk::commands::decrypt_message(args.dictionary, codes, args.output)
                    .await
                    .map(drop)
            }
        },
        Commands::Codebook { command } => match command {
            CodebookCommands::Build { args } => {
                avlcode_sdk::commands::build_codebook(args.dictionary, args.output)
                    .await
                    .map(drop)
            }
            CodebookCommands::Schema => avlcode_sdk::commands::codebook_schema(),
        },
    };

    if let Err(e) = res {
        tracing::error!("Error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
