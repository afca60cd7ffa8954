use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every word of a dictionary together with its path code.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Codebook {
    /// Height of the encryption tree the codes were taken from (`-1` when empty).
    pub height: i32,
    /// Number of distinct words in the tree.
    pub size: usize,
    /// Codes in ascending word order.
    pub entries: Vec<CodebookEntry>,
}

/// A single word and the code addressing it.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct CodebookEntry {
    /// The dictionary word.
    pub word: String,
    /// Path code of the word, `r` followed by `0`/`1` steps.
    pub code: String,
}

impl Codebook {
    /// Create a codebook from its entries.
    #[must_use]
    pub fn new(height: i32, entries: Vec<CodebookEntry>) -> Self {
        let size = entries.len();
        Self {
            height,
            size,
            entries,
        }
    }

    /// Code of `word`, if listed.
    #[must_use]
    pub fn code_of(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.code.as_str())
    }

    /// Word addressed by `code`, if listed.
    #[must_use]
    pub fn word_of(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.word.as_str())
    }
}
