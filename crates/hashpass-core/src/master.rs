//! Master phrase loading.

use std::path::Path;

use secrecy::SecretString;

use crate::error::{HashpassError, Result};

/// Name of the master phrase file inside the hashpass home directory.
pub const DEFAULT_MASTER_FILE_NAME: &str = "master";

/// Read a master phrase from `path`.
///
/// Leading and trailing `\r`/`\n` characters are stripped so files written by
/// editors produce the same phrase as the command line. Other whitespace is
/// part of the phrase.
pub fn read_master_file(path: &Path) -> Result<SecretString> {
    let contents = std::fs::read_to_string(path).map_err(|e| HashpassError::MasterFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(SecretString::from(strip_line_endings(&contents).to_string()))
}

/// Strip leading and trailing carriage returns and newlines.
pub fn strip_line_endings(value: &str) -> &str {
    value.trim_matches(|c| c == '\r' || c == '\n')
}
