//! Length enforcement and suffix overlay.

use super::digest::DigestString;
use super::types::DerivedPassword;
use crate::error::DerivationError;

/// Take the first `output_length` characters of the digest string.
///
/// The digest is the only source of characters, so asking for more than it
/// holds is an error rather than padding.
pub fn enforce_length(full: &DigestString, output_length: usize) -> Result<String, DerivationError> {
    if output_length > full.len() {
        return Err(DerivationError::LengthExceedsDigest {
            requested: output_length,
            limit: full.len(),
        });
    }
    // Base64 output is ASCII, so byte and char offsets agree.
    Ok(full.as_str()[..output_length].to_string())
}

/// Replace the trailing `suffix.len()` characters of `truncated` with `suffix`.
pub fn compose(truncated: &str, suffix: &str) -> Result<DerivedPassword, DerivationError> {
    if truncated.len() < suffix.len() {
        return Err(DerivationError::LengthTooShortForSuffix {
            requested: truncated.len(),
            required: suffix.len(),
        });
    }
    let keep = truncated.len() - suffix.len();
    let mut password = String::with_capacity(truncated.len());
    password.push_str(&truncated[..keep]);
    password.push_str(suffix);
    Ok(DerivedPassword::new(password))
}
