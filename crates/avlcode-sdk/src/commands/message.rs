use std::path::{Path, PathBuf};

use eyre::ensure;
use tracing::{info, instrument};

use super::io::{read_input, write_output};
use crate::session::Session;

/// Build a session from a dictionary file.
///
/// The file holds whitespace separated words, inserted in file order.
///
/// # Errors
/// Returns an error if the file cannot be read or holds no words.
#[instrument(skip_all, fields(dictionary = %dictionary.display()))]
pub async fn load_dictionary(dictionary: &Path) -> eyre::Result<Session> {
    let text = read_input(dictionary).await?;
    let session = Session::from_words(text.split_whitespace());
    ensure!(
        !session.tree().is_empty(),
        "Dictionary {} contains no words",
        dictionary.display()
    );
    info!(
        words = session.tree().len(),
        height = session.tree().height(),
        "Dictionary loaded"
    );
    Ok(session)
}

/// Encrypt a message with the tree built from `dictionary`.
///
/// Every argument may hold several words. The codes are written on one line
/// and also returned.
///
/// # Errors
/// Returns an error if the dictionary cannot be loaded or the output cannot be
/// written.
pub async fn encrypt_message(
    dictionary: PathBuf,
    message: Vec<String>,
    output: Option<PathBuf>,
) -> eyre::Result<String> {
    let session = load_dictionary(&dictionary).await?;
    let codes = session.encrypt_words(&split_words(&message));
    write_output(output.as_deref(), format!("{codes}\n").as_bytes()).await?;
    Ok(codes)
}

/// Decrypt path codes with the tree built from `dictionary`.
///
/// # Errors
/// Returns an error if the dictionary cannot be loaded or the output cannot be
/// written.
pub async fn decrypt_message(
    dictionary: PathBuf,
    codes: Vec<String>,
    output: Option<PathBuf>,
) -> eyre::Result<String> {
    let session = load_dictionary(&dictionary).await?;
    let words = session.decrypt_codes(&split_words(&codes));
    write_output(output.as_deref(), format!("{words}\n").as_bytes()).await?;
    Ok(words)
}

fn split_words(arguments: &[String]) -> Vec<String> {
    arguments
        .iter()
        .flat_map(|argument| argument.split_whitespace())
        .map(str::to_owned)
        .collect()
}
