use std::path::PathBuf;

use avlcode_core::schema::script::parse_script;
use eyre::Context as _;
use tracing::{info, instrument};

use super::io::{read_input, write_output};
use crate::session::{RunSummary, Session};

/// Run a command script against a fresh tree.
///
/// `script` may be [`STDIN_PATH`](super::STDIN_PATH). Everything the script
/// prints goes to `output`, or to standard output when `output` is `None`.
///
/// # Errors
/// Returns an error if the script cannot be read or parsed, or the output
/// cannot be written.
#[instrument(skip_all, fields(script = %script.display()))]
pub async fn run_script(script: PathBuf, output: Option<PathBuf>) -> eyre::Result<RunSummary> {
    let text = read_input(&script).await?;
    let commands =
        parse_script(&text).with_context(|| format!("Invalid script {}", script.display()))?;
    info!(commands = commands.len(), "Running script");

    let mut session = Session::new();
    let mut rendered = Vec::new();
    let summary = session
        .run(&commands, &mut rendered)
        .context("Failed to render script output")?;
    write_output(output.as_deref(), &rendered).await?;

    info!(
        executed = summary.executed,
        inserted = summary.inserted,
        removed = summary.removed,
        height = session.tree().height(),
        "Script finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_script_output_to_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let script = dir.path().join("commands.txt");
        let output = dir.path().join("output.txt");
        tokio::fs::write(&script, "i 2\ni 1\ni 3\ne '3 4'\nl\nq\np\n")
            .await
            .expect("write script");

        let summary = run_script(script, Some(output.clone()))
            .await
            .expect("script runs");
        assert_eq!(summary.inserted, 3);
        assert_eq!(summary.quit_at, Some(6));

        let rendered = tokio::fs::read_to_string(&output)
            .await
            .expect("read output");
        assert_eq!(rendered, "r1 ?\n2 1 3 NULL NULL NULL NULL\n");
    }

    #[tokio::test]
    async fn reports_the_failing_line() {
        let dir = tempfile::tempdir().expect("temp dir");
        let script = dir.path().join("broken.txt");
        tokio::fs::write(&script, "i a\n\nz\n")
            .await
            .expect("write script");

        let err = run_script(script, None).await.expect_err("script is invalid");
        let message = format!("{err:#}");
        assert!(message.contains("broken.txt"), "{message}");
        assert!(message.contains("line 3"), "{message}");
    }
}
