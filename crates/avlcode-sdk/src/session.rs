//! Executes command scripts against an in-memory encryption tree.

use std::io::{self, Write};

use avlcode_core::schema::script::{ScriptCommand, ScriptLine};
use avlcode_tree::{EncryptionTree, NOT_FOUND_CODE};
use tracing::{debug, instrument};

/// What a single command did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new word was added to the tree.
    Inserted,
    /// A stored word was removed from the tree.
    Removed,
    /// The tree is unchanged: a read-only command, a duplicate insert or a
    /// remove of a missing word.
    Unchanged,
    /// The script must stop.
    Quit,
}

/// Counters collected while running a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands executed, including a final `q`.
    pub executed: usize,
    /// Words actually added to the tree.
    pub inserted: usize,
    /// Words actually removed from the tree.
    pub removed: usize,
    /// Line of the `q` command that stopped the script, if any.
    pub quit_at: Option<usize>,
}

/// A word tree plus the commands that read and mutate it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    tree: EncryptionTree<String>,
}

impl Session {
    /// Start with an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: EncryptionTree::new(),
        }
    }

    /// Start from a tree built by inserting `words` in order.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tree: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The current tree.
    #[must_use]
    pub const fn tree(&self) -> &EncryptionTree<String> {
        &self.tree
    }

    /// Encrypt each word; unknown words become `?`. Codes are space separated.
    #[must_use]
    pub fn encrypt_words(&self, words: &[String]) -> String {
        words
            .iter()
            .map(|word| self.tree.encrypt(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decrypt each code; codes that address no node become `?`. Words are
    /// space separated.
    #[must_use]
    pub fn decrypt_codes(&self, codes: &[String]) -> String {
        codes
            .iter()
            .map(|code| self.tree.decrypt(code).map_or(NOT_FOUND_CODE, String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute one command, writing any output to `out`.
    ///
    /// # Errors
    /// Returns any error raised by `out`.
    pub fn execute<W: Write>(
        &mut self,
        command: &ScriptCommand,
        out: &mut W,
    ) -> io::Result<Outcome> {
        let outcome = match command {
            ScriptCommand::Insert(word) => {
                let added = self.tree.insert(word.clone());
                debug!(%word, added, height = self.tree.height(), "insert");
                if added { Outcome::Inserted } else { Outcome::Unchanged }
            }
            ScriptCommand::Remove(word) => {
                let removed = self.tree.remove(word);
                debug!(%word, removed, height = self.tree.height(), "remove");
                if removed { Outcome::Removed } else { Outcome::Unchanged }
            }
            ScriptCommand::Encrypt(words) => {
                writeln!(out, "{}", self.encrypt_words(words))?;
                Outcome::Unchanged
            }
            ScriptCommand::Decrypt(codes) => {
                writeln!(out, "{}", self.decrypt_codes(codes))?;
                Outcome::Unchanged
            }
            ScriptCommand::PrintPreorder => {
                self.tree.write_preorder(out)?;
                Outcome::Unchanged
            }
            ScriptCommand::PrintLevelOrder => {
                self.tree.write_level_order(out)?;
                Outcome::Unchanged
            }
            ScriptCommand::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    /// Execute `script` until it ends or reaches `q`.
    ///
    /// # Errors
    /// Returns any error raised by `out`.
    #[instrument(level = "debug", skip_all, fields(commands = script.len()))]
    pub fn run<W: Write>(&mut self, script: &[ScriptLine], out: &mut W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        for ScriptLine { line, command } in script {
            let outcome = self.execute(command, out)?;
            summary.executed = summary.executed.saturating_add(1);
            match outcome {
                Outcome::Inserted => summary.inserted = summary.inserted.saturating_add(1),
                Outcome::Removed => summary.removed = summary.removed.saturating_add(1),
                Outcome::Unchanged => {}
                Outcome::Quit => {
                    debug!(line, "quit");
                    summary.quit_at = Some(*line);
                    break;
                }
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use avlcode_core::schema::script::parse_script;

    use super::*;

    fn run(session: &mut Session, script: &str) -> (String, RunSummary) {
        let script = parse_script(script).expect("script parses");
        let mut out = Vec::new();
        let summary = session.run(&script, &mut out).expect("writing to a Vec");
        (String::from_utf8(out).expect("utf-8 output"), summary)
    }

    #[test]
    fn encrypts_and_decrypts_messages() {
        let mut session = Session::new();
        let (output, summary) = run(
            &mut session,
            "\
i the
i quick
i brown
i fox
e 'the quick red fox'
d 'r r0 r1 r01 r111'
",
        );
        assert_eq!(output, "r1 r ? r01\nquick brown the fox ?\n");
        assert_eq!(summary.inserted, 4);
        assert_eq!(summary.executed, 6);
        assert_eq!(summary.quit_at, None);
    }

    #[test]
    fn quit_stops_the_script() {
        let mut session = Session::new();
        let (output, summary) = run(&mut session, "i b\ni a\nl\nq\ni c\np\n");
        assert_eq!(output, "b a NULL NULL NULL\n");
        assert_eq!(summary.quit_at, Some(4));
        assert_eq!(summary.executed, 4);
        assert!(!session.tree().contains(&"c".to_owned()));
    }

    #[test]
    fn counts_only_effective_mutations() {
        let mut session = Session::from_words(["m", "n"]);
        let (output, summary) = run(&mut session, "i m\ni o\nr x\nr n\np\n");
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.removed, 1);
        assert_eq!(output, "o\n  m\n    NULL\n    NULL\n  NULL\n");
    }

    #[test]
    fn execute_reports_what_changed() {
        let mut session = Session::new();
        let mut out = Vec::new();
        let mut step = |command: ScriptCommand| {
            session
                .execute(&command, &mut out)
                .expect("writing to a Vec")
        };

        assert_eq!(step(ScriptCommand::Insert("k".to_owned())), Outcome::Inserted);
        assert_eq!(step(ScriptCommand::Insert("k".to_owned())), Outcome::Unchanged);
        assert_eq!(step(ScriptCommand::Remove("z".to_owned())), Outcome::Unchanged);
        assert_eq!(step(ScriptCommand::PrintLevelOrder), Outcome::Unchanged);
        assert_eq!(step(ScriptCommand::Remove("k".to_owned())), Outcome::Removed);
        assert_eq!(step(ScriptCommand::Remove("k".to_owned())), Outcome::Unchanged);
        assert_eq!(step(ScriptCommand::Quit), Outcome::Quit);
    }

    #[test]
    fn long_scripts_count_every_change() {
        let words: Vec<String> = (0..2000).map(|n| format!("w{n:05}")).collect();
        let mut script: Vec<ScriptLine> = Vec::new();
        // Every word inserted twice, every even word removed, plus misses.
        for word in words.iter().chain(&words) {
            script.push(ScriptLine {
                line: script.len().saturating_add(1),
                command: ScriptCommand::Insert(word.clone()),
            });
        }
        for word in words.iter().step_by(2) {
            for command in [
                ScriptCommand::Remove(word.clone()),
                ScriptCommand::Remove(format!("{word}-missing")),
            ] {
                script.push(ScriptLine {
                    line: script.len().saturating_add(1),
                    command,
                });
            }
        }

        let mut session = Session::new();
        let summary = session
            .run(&script, &mut io::sink())
            .expect("writing to a sink");
        assert_eq!(summary.executed, script.len());
        assert_eq!(summary.inserted, 2000);
        assert_eq!(summary.removed, 1000);
        assert_eq!(session.tree().len(), 1000);
        assert!(session.tree().check_invariants());
    }

    #[test]
    fn empty_messages_produce_empty_lines() {
        let session = Session::new();
        assert_eq!(session.encrypt_words(&[]), "");
        assert_eq!(session.decrypt_codes(&["r".to_owned()]), "?");
    }
}
