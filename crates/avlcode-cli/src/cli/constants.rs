//! Shared constants for CLI.

// -------------------------
// Environment variables
// -------------------------

// Inputs
pub const AVLCODE_SCRIPT_FILE: &str = "AVLCODE_SCRIPT_FILE";
pub const AVLCODE_DICTIONARY_FILE: &str = "AVLCODE_DICTIONARY_FILE";

// Outputs
pub const AVLCODE_OUTPUT_FILE: &str = "AVLCODE_OUTPUT_FILE";
pub const AVLCODE_CODEBOOK_OUT: &str = "AVLCODE_CODEBOOK_OUT";

// -------------------------
// Defaults
// -------------------------

/// Scripts are read from stdin unless a file is named.
pub const DEFAULT_SCRIPT_FILE: &str = "-";
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.txt";
