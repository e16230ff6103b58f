//! Password derivation pipeline.
//!
//! The pipeline is a strict sequence of pure steps:
//!
//! 1. validate the request
//! 2. [`canonical::canonicalize`] the inputs into one string
//! 3. [`digest::digest`] it into a 44 character base64 string
//! 4. [`overlay::enforce_length`] to the requested length
//! 5. when special characters are requested, [`suffix::select_suffix`] and
//!    [`overlay::compose`] the result
//!
//! No step keeps state between calls, so [`derive`] can be called from any
//! number of threads without coordination.

pub mod canonical;
pub mod digest;
pub mod overlay;
pub mod suffix;

mod types;

pub use digest::{DigestString, DIGEST_LEN};
pub use suffix::SPECIAL_CHARACTER_GROUPS;
pub use types::{
    output_length_from_signed, DerivationRequest, DerivationSettings, DerivedPassword,
    DEFAULT_PASSWORD_LENGTH,
};

use secrecy::ExposeSecret;

use crate::error::DerivationError;

/// Derive the password for a request.
///
/// The request is consumed; nothing derived from it outlives the call except
/// the returned password.
pub fn derive(request: DerivationRequest) -> Result<DerivedPassword, DerivationError> {
    request.validate()?;

    let canonical = canonical::canonicalize(
        request.master_phrase.expose_secret(),
        &request.domain,
        &request.settings.additional_info,
    );
    let full = digest::digest(&canonical);
    let truncated = overlay::enforce_length(&full, request.settings.output_length)?;

    if !request.settings.include_special_characters {
        return Ok(DerivedPassword::new(truncated));
    }

    let suffix = suffix::select_suffix(full.as_str());
    overlay::compose(&truncated, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        master: &str,
        domain: &str,
        info: &str,
        length: usize,
        special: bool,
    ) -> DerivationRequest {
        DerivationRequest::new(master, domain)
            .with_additional_info(info)
            .with_output_length(length)
            .with_special_characters(special)
    }

    #[test]
    fn test_derive_known_vectors() {
        let cases = [
            ("secret", "localhost", "", 12, true, "B8MYkTQT`~]'"),
            ("secret", "localhost", "", 12, false, "B8MYkTQTtUwW"),
            ("secret", "google.com", "", 12, true, "ODejwny3!&^#"),
            ("terces", "google.com", "", 12, true, "cLJk0Cnq!&^#"),
            ("terces", "google.com", "", 20, true, "cLJk0CnqwfDqjv4Y!&^#"),
            ("terces", "google.com", "addInfo", 12, true, "SKkSa4NN)(*$"),
            ("terces", "google.com", "addInfo", 12, false, "SKkSa4NN+5Xo"),
        ];

        for (master, domain, info, length, special, expected) in cases {
            let password = derive(request(master, domain, info, length, special))
                .expect("derivation should succeed");
            assert_eq!(
                password.expose(),
                expected,
                "derive({master}, {domain}, {info}, {length}, {special})"
            );
        }
    }

    #[test]
    fn test_derive_is_deterministic() {
        let first = derive(request("secret", "example.org", "2", 16, true)).unwrap();
        let second = derive(request("secret", "example.org", "2", 16, true)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_input_changes_output() {
        let base = derive(request("secret", "example.org", "1", 20, false)).unwrap();
        let other_master = derive(request("secret2", "example.org", "1", 20, false)).unwrap();
        let other_domain = derive(request("secret", "example.com", "1", 20, false)).unwrap();
        let other_info = derive(request("secret", "example.org", "2", 20, false)).unwrap();

        assert_ne!(base, other_master);
        assert_ne!(base, other_domain);
        assert_ne!(base, other_info);
    }

    #[test]
    fn test_output_has_requested_length() {
        for length in [4, 8, 12, 31, DIGEST_LEN] {
            for special in [true, false] {
                let password = derive(request("secret", "localhost", "", length, special)).unwrap();
                assert_eq!(password.len(), length);
            }
        }
        let password = derive(request("secret", "localhost", "", 1, false)).unwrap();
        assert_eq!(password.expose(), "B");
    }

    #[test]
    fn test_suffix_overlays_digest_prefix() {
        let canonical = canonical::canonicalize("terces", "google.com", "");
        let full = digest::digest(&canonical);
        let suffix = suffix::select_suffix(full.as_str());

        let password = derive(request("terces", "google.com", "", 20, true)).unwrap();
        let value = password.expose();
        assert_eq!(&value[16..], suffix);
        assert_eq!(&value[..16], &full.as_str()[..16]);
    }

    #[test]
    fn test_length_over_digest_is_rejected() {
        let err = derive(request("secret", "localhost", "", 1000, true)).unwrap_err();
        assert_eq!(
            err,
            DerivationError::LengthExceedsDigest {
                requested: 1000,
                limit: DIGEST_LEN
            }
        );
        assert!(derive(request("secret", "localhost", "", DIGEST_LEN + 1, false)).is_err());
    }

    #[test]
    fn test_length_too_short_for_suffix_is_rejected() {
        let err = derive(request("secret", "localhost", "", 3, true)).unwrap_err();
        assert_eq!(
            err,
            DerivationError::LengthTooShortForSuffix {
                requested: 3,
                required: 4
            }
        );
    }

    #[test]
    fn test_validation_order() {
        let err = derive(request("", "", "", 0, true)).unwrap_err();
        assert_eq!(err, DerivationError::EmptyMasterPhrase);

        let err = derive(request("secret", "", "", 0, true)).unwrap_err();
        assert_eq!(err, DerivationError::EmptyDomain);

        let err = derive(request("secret", "localhost", "", 0, true)).unwrap_err();
        assert_eq!(err, DerivationError::InvalidLength);
    }
}
