//! SHA-256 digest rendered as padded base64.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Length of a rendered digest: 32 bytes in padded base64.
pub const DIGEST_LEN: usize = 44;

/// Printable rendering of the digest of a canonical string.
///
/// Always [`DIGEST_LEN`] ASCII characters from the standard base64 alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestString(String);

impl DigestString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DigestString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash the UTF-8 bytes of `canonical` and encode the result.
pub fn digest(canonical: &str) -> DigestString {
    let hash = Sha256::digest(canonical.as_bytes());
    DigestString(STANDARD.encode(hash))
}
