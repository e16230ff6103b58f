//! Parsing the generate form into a derivation request.

use axum::body::{self, Body};
use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, Request};
use axum::Form;
use percent_encoding::percent_decode;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use hashpass_core::generator::output_length_from_signed;
use hashpass_core::{DerivationError, DerivationRequest, DerivationSettings};

/// Raw fields posted by the input form.
///
/// Every field is optional on the wire; blanks fall back to
/// [`DerivationSettings::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateForm {
    pub password: String,
    #[serde(rename = "confirm-password")]
    pub confirm_password: String,
    pub domain: String,
    #[serde(rename = "additional-info")]
    pub additional_info: String,
    #[serde(rename = "password-length")]
    pub password_length: String,
    #[serde(rename = "special-characters")]
    pub special_characters: String,
}

/// Reasons a form submission is rejected.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Passwords differ")]
    PasswordsDiffer,

    #[error("Invalid password length: {0}")]
    InvalidNumber(String),

    #[error("Invalid special characters value: {0}")]
    InvalidBool(String),

    #[error("Form values must be valid UTF-8")]
    InvalidEncoding,

    #[error("Failed to read request body: {0}")]
    Body(axum::Error),

    #[error(transparent)]
    Rejected(#[from] FormRejection),

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

/// Largest form body accepted by [`Utf8Form`].
pub const MAX_FORM_BYTES: usize = 64 * 1024;

/// Like [`axum::Form`], but refuses bodies whose decoded values are not
/// UTF-8 instead of replacing the bad bytes, and reports every rejection as
/// a [`FormError`].
pub struct Utf8Form<T>(pub T);

impl<S, T> FromRequest<S> for Utf8Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = FormError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = body::to_bytes(body, MAX_FORM_BYTES)
            .await
            .map_err(FormError::Body)?;
        if !decodes_to_utf8(&bytes) {
            return Err(FormError::InvalidEncoding);
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(Utf8Form(value))
    }
}

/// Whether every percent-decoded byte of a urlencoded body forms valid UTF-8.
///
/// The `&` and `=` separators are ASCII, so checking the whole body at once
/// is the same as checking each name and value.
pub fn decodes_to_utf8(raw: &[u8]) -> bool {
    percent_decode(raw).decode_utf8().is_ok()
}

impl FormError {
    /// Short headline shown on the error page.
    pub fn headline(&self) -> &'static str {
        match self {
            FormError::Derivation(_) => "Failed to generate your password",
            _ => "Failed to parse form parameters",
        }
    }
}

impl GenerateForm {
    /// Validate the form and build a request for the core.
    pub fn into_request(self) -> Result<DerivationRequest, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordsDiffer);
        }

        let mut settings = DerivationSettings {
            additional_info: self.additional_info,
            ..DerivationSettings::default()
        };

        let length = self.password_length.trim();
        if !length.is_empty() {
            let value: i64 = length
                .parse()
                .map_err(|_| FormError::InvalidNumber(length.to_string()))?;
            settings.output_length = output_length_from_signed(value)?;
        }

        let special = self.special_characters.trim();
        if !special.is_empty() {
            settings.include_special_characters =
                parse_bool(special).ok_or_else(|| FormError::InvalidBool(special.to_string()))?;
        }

        Ok(DerivationRequest::with_settings(
            SecretString::from(self.password),
            self.domain,
            settings,
        ))
    }
}

/// Accepts the usual spellings of a boolean, plus `on`/`off` from checkboxes.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "on" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashpass_core::derive;

    fn form(password: &str, confirm: &str, domain: &str) -> GenerateForm {
        GenerateForm {
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            domain: domain.to_string(),
            ..GenerateForm::default()
        }
    }

    #[test]
    fn test_defaults_apply_to_blank_fields() {
        let request = form("secret", "secret", "localhost").into_request().unwrap();
        assert_eq!(request.settings, DerivationSettings::default());
        assert_eq!(derive(request).unwrap().expose(), "B8MYkTQT`~]'");
    }

    #[test]
    fn test_mismatched_passwords() {
        let err = form("secret", "secreT", "localhost").into_request().unwrap_err();
        assert!(matches!(err, FormError::PasswordsDiffer));
        assert_eq!(err.headline(), "Failed to parse form parameters");
    }

    #[test]
    fn test_explicit_settings() {
        let mut raw = form("terces", "terces", "google.com");
        raw.additional_info = "addInfo".to_string();
        raw.password_length = "12".to_string();
        raw.special_characters = "false".to_string();

        let request = raw.into_request().unwrap();
        assert_eq!(derive(request).unwrap().expose(), "SKkSa4NN+5Xo");
    }

    #[test]
    fn test_bad_numbers_and_bools() {
        let mut raw = form("secret", "secret", "localhost");
        raw.password_length = "twelve".to_string();
        assert!(matches!(
            raw.into_request().unwrap_err(),
            FormError::InvalidNumber(_)
        ));

        let mut raw = form("secret", "secret", "localhost");
        raw.password_length = "-2".to_string();
        assert!(matches!(
            raw.into_request().unwrap_err(),
            FormError::Derivation(DerivationError::InvalidLength)
        ));

        let mut raw = form("secret", "secret", "localhost");
        raw.special_characters = "maybe".to_string();
        assert!(matches!(
            raw.into_request().unwrap_err(),
            FormError::InvalidBool(_)
        ));
    }

    #[test]
    fn test_decodes_to_utf8() {
        assert!(decodes_to_utf8(b"password=secret&domain=localhost"));
        assert!(decodes_to_utf8(b"password=%C3%A9t%C3%A9"));
        assert!(!decodes_to_utf8(b"password=%FF"));
        assert!(!decodes_to_utf8(b"password=%C3&domain=%A9"));
        assert!(!decodes_to_utf8(b"password=\xff"));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("F"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }
}
