//! Request and result types for the derivation pipeline.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::DerivationError;

/// Password length used when none is requested.
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// The non-secret knobs of a derivation.
///
/// Front ends build this from flags, form fields or config defaults and pair
/// it with a master phrase and domain in a [`DerivationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivationSettings {
    /// Free text mixed into the digest (e.g. a revision counter)
    pub additional_info: String,

    /// Number of characters in the derived password
    pub output_length: usize,

    /// Whether to overlay a special character group on the tail
    pub include_special_characters: bool,
}

impl Default for DerivationSettings {
    fn default() -> Self {
        Self {
            additional_info: String::new(),
            output_length: DEFAULT_PASSWORD_LENGTH,
            include_special_characters: true,
        }
    }
}

/// Everything needed to derive one password.
///
/// The master phrase is held as a [`SecretString`] so it never shows up in
/// `Debug` output.
#[derive(Debug)]
pub struct DerivationRequest {
    pub master_phrase: SecretString,
    pub domain: String,
    pub settings: DerivationSettings,
}

impl DerivationRequest {
    /// Create a request with default settings.
    pub fn new(master_phrase: impl Into<String>, domain: impl Into<String>) -> Self {
        Self::with_settings(
            SecretString::from(master_phrase.into()),
            domain,
            DerivationSettings::default(),
        )
    }

    /// Create a request from an already wrapped master phrase and explicit settings.
    pub fn with_settings(
        master_phrase: SecretString,
        domain: impl Into<String>,
        settings: DerivationSettings,
    ) -> Self {
        Self {
            master_phrase,
            domain: domain.into(),
            settings,
        }
    }

    /// Set the additional info.
    pub fn with_additional_info(mut self, additional_info: impl Into<String>) -> Self {
        self.settings.additional_info = additional_info.into();
        self
    }

    /// Set the output length.
    pub fn with_output_length(mut self, output_length: usize) -> Self {
        self.settings.output_length = output_length;
        self
    }

    /// Enable or disable the special character suffix.
    pub fn with_special_characters(mut self, include: bool) -> Self {
        self.settings.include_special_characters = include;
        self
    }

    /// Check the request before any hashing happens.
    ///
    /// The master phrase is checked before the domain, and both before the
    /// length.
    pub fn validate(&self) -> Result<(), DerivationError> {
        if self.master_phrase.expose_secret().is_empty() {
            return Err(DerivationError::EmptyMasterPhrase);
        }
        if self.domain.is_empty() {
            return Err(DerivationError::EmptyDomain);
        }
        if self.settings.output_length == 0 {
            return Err(DerivationError::InvalidLength);
        }
        Ok(())
    }
}

/// Convert a user supplied (possibly negative) length into an output length.
pub fn output_length_from_signed(value: i64) -> Result<usize, DerivationError> {
    if value < 1 {
        return Err(DerivationError::InvalidLength);
    }
    // Anything that does not fit is far past the digest limit anyway.
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

/// A derived password.
///
/// `Debug` is redacted; use [`DerivedPassword::expose`] or `Display` to get
/// at the value.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DerivedPassword(String);

impl DerivedPassword {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Borrow the password text.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Take ownership of the password text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for DerivedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedPassword([REDACTED])")
    }
}

impl fmt::Display for DerivedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
