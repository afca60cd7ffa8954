//! Line-oriented command scripts driving an encryption tree.
//!
//! Each non-blank line holds one command: a single command character,
//! optionally followed by whitespace and an argument.
//!
//! | Line          | Meaning                                      |
//! |---------------|----------------------------------------------|
//! | `i <word>`    | insert a word                                |
//! | `r <word>`    | remove a word                                |
//! | `e '<text>'`  | encrypt every word of the quoted text        |
//! | `d '<codes>'` | decrypt every code of the quoted text        |
//! | `p`           | print the tree in preorder                   |
//! | `l`           | print the tree in level order                |
//! | `q`           | stop; later lines are ignored                |

use thiserror::Error;

const QUOTE: char = '\'';

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Insert a word.
    Insert(String),
    /// Remove a word.
    Remove(String),
    /// Encrypt the words of a message.
    Encrypt(Vec<String>),
    /// Decrypt a sequence of path codes.
    Decrypt(Vec<String>),
    /// Print the tree in preorder.
    PrintPreorder,
    /// Print the tree in level order.
    PrintLevelOrder,
    /// Stop executing the script.
    Quit,
}

/// A command together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number.
    pub line: usize,
    /// The parsed command.
    pub command: ScriptCommand,
}

/// Errors produced while parsing a command script.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// The command character is not recognised.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// 1-based line number.
        line: usize,
        /// The unrecognised command character.
        command: char,
    },

    /// The command needs an argument but none was given.
    #[error("line {line}: command '{command}' requires an argument")]
    MissingArgument {
        /// 1-based line number.
        line: usize,
        /// The command character.
        command: char,
    },

    /// The command takes no argument but one was given.
    #[error("line {line}: command '{command}' takes no argument")]
    UnexpectedArgument {
        /// 1-based line number.
        line: usize,
        /// The command character.
        command: char,
    },

    /// A quoted argument is missing its closing quote.
    #[error("line {line}: unterminated quote")]
    UnterminatedQuote {
        /// 1-based line number.
        line: usize,
    },
}

impl ScriptCommand {
    /// Parse one line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns a [`ScriptError`] naming `line` when the command is unknown or
    /// its argument is missing, superfluous or badly quoted.
    pub fn parse_line(text: &str, line: usize) -> Result<Option<Self>, ScriptError> {
        let text = text.trim();
        let mut chars = text.chars();
        let Some(command) = chars.next() else {
            return Ok(None);
        };
        let argument = chars.as_str().trim();

        let required = || {
            if argument.is_empty() {
                Err(ScriptError::MissingArgument { line, command })
            } else {
                Ok(argument)
            }
        };
        let none = |parsed: Self| {
            if argument.is_empty() {
                Ok(parsed)
            } else {
                Err(ScriptError::UnexpectedArgument { line, command })
            }
        };

        let parsed = match command {
            'i' => Self::Insert(required()?.to_owned()),
            'r' => Self::Remove(required()?.to_owned()),
            'e' => Self::Encrypt(quoted_words(required()?, line)?),
            'd' => Self::Decrypt(quoted_words(required()?, line)?),
            'p' => none(Self::PrintPreorder)?,
            'l' => none(Self::PrintLevelOrder)?,
            'q' => none(Self::Quit)?,
            _ => return Err(ScriptError::UnknownCommand { line, command }),
        };
        Ok(Some(parsed))
    }
}

/// Split a quoted argument into whitespace separated words.
///
/// Surrounding single quotes are optional, but an opening quote must be
/// closed.
fn quoted_words(argument: &str, line: usize) -> Result<Vec<String>, ScriptError> {
    let body = match argument.strip_prefix(QUOTE) {
        Some(rest) => rest
            .strip_suffix(QUOTE)
            .ok_or(ScriptError::UnterminatedQuote { line })?,
        None => argument,
    };
    Ok(body.split_whitespace().map(str::to_owned).collect())
}

/// Parse a whole script.
///
/// # Errors
/// Returns the first [`ScriptError`] encountered.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index.saturating_add(1);
        if let Some(command) = ScriptCommand::parse_line(raw, line)? {
            commands.push(ScriptLine { line, command });
        }
    }
    Ok(commands)
}
