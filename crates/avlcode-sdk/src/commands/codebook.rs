use std::path::PathBuf;

use avlcode_core::schema::codebook::{Codebook, CodebookEntry};
use avlcode_tree::EncryptionTree;
use eyre::Context as _;
use tracing::{info, instrument};

use super::io::write_output;
use super::message::load_dictionary;

/// List every word of `tree` in ascending order together with its code.
#[must_use]
pub fn codebook_for(tree: &EncryptionTree<String>) -> Codebook {
    let entries = tree
        .iter()
        .map(|word| CodebookEntry {
            word: word.clone(),
            code: tree.encrypt(word),
        })
        .collect();
    Codebook::new(tree.height(), entries)
}

/// Build the codebook of a dictionary and write it as pretty JSON.
///
/// # Errors
/// Returns an error if the dictionary cannot be loaded, or the codebook cannot
/// be serialized or written.
#[instrument(skip_all, fields(dictionary = %dictionary.display()))]
pub async fn build_codebook(dictionary: PathBuf, output: Option<PathBuf>) -> eyre::Result<Codebook> {
    let session = load_dictionary(&dictionary).await?;
    let codebook = codebook_for(session.tree());
    let json = serde_json::to_string_pretty(&codebook).context("Failed to serialize codebook")?;
    write_output(output.as_deref(), format!("{json}\n").as_bytes()).await?;
    info!(
        size = codebook.size,
        height = codebook.height,
        "Codebook built"
    );
    Ok(codebook)
}
