//! Reading command inputs and writing program output.

use std::path::Path;

use eyre::Context as _;
use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
use tracing::info;

/// Input path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read a whole input file, or standard input when `path` is [`STDIN_PATH`].
///
/// # Errors
/// Returns an error if the input cannot be read or is not UTF-8.
pub async fn read_input(path: &Path) -> eyre::Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read standard input")?;
        return Ok(text);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Write program output to `path`, or to standard output when `path` is `None`.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub async fn write_output(path: Option<&Path>, bytes: &[u8]) -> eyre::Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, bytes)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(file = ?path, "Output written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(bytes)
                .await
                .context("Failed to write standard output")?;
            stdout
                .flush()
                .await
                .context("Failed to flush standard output")?;
        }
    }
    Ok(())
}
