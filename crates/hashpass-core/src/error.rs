//! Error types for hashpass core operations.
//!
//! Derivation failures have their own enum so callers can match on the exact
//! kind; everything else the core touches (master files, the audit log) is
//! folded into [`HashpassError`]. The front ends map these to exit codes or
//! HTTP statuses.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for hashpass operations.
pub type Result<T> = std::result::Result<T, HashpassError>;

/// Reasons a derivation can be rejected.
///
/// All of these are detected before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// Master phrase was empty at validation time
    #[error("Empty master phrase")]
    EmptyMasterPhrase,

    /// Domain was empty at validation time
    #[error("Empty domain")]
    EmptyDomain,

    /// Requested length is zero
    #[error("Password length must be a positive number")]
    InvalidLength,

    /// Requested length is longer than the digest string
    #[error(
        "Cannot generate a password with {requested} symbols. The current limit is {limit}. \
         Lower the password length."
    )]
    LengthExceedsDigest { requested: usize, limit: usize },

    /// Requested length cannot hold the special character suffix
    #[error(
        "A password of {requested} symbols is too short for special characters \
         (at least {required} required). Raise the length or disable special characters."
    )]
    LengthTooShortForSuffix { requested: usize, required: usize },
}

/// Core error type for everything outside the pure derivation.
#[derive(Debug, Error)]
pub enum HashpassError {
    /// Derivation rejected the request
    #[error(transparent)]
    Derivation(#[from] DerivationError),

    /// Master phrase file could not be read
    #[error("Failed to read master phrase from {}: {message}", .path.display())]
    MasterFile { path: PathBuf, message: String },

    /// Audit log could not be written
    #[error("Audit log error: {0}")]
    Audit(String),
}
