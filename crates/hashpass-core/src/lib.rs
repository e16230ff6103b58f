//! # Hashpass Core
//!
//! Core library for hashpass - a deterministic, stateless password generator.
//!
//! A password is derived from a secret master phrase, a domain and an optional
//! free-text qualifier. Nothing is stored: the same inputs always produce the
//! same password, and changing any input changes the result unpredictably.
//!
//! ## Architecture
//!
//! - **generator**: the derivation pipeline (canonical input, digest, length,
//!   special character suffix)
//! - **master**: loading the master phrase from a file
//! - **audit**: optional append-only reminder log of derivation parameters
//!
//! ## Example
//!
//! ```
//! use hashpass_core::{derive, DerivationRequest};
//!
//! let request = DerivationRequest::new("secret", "localhost");
//! let password = derive(request).unwrap();
//! assert_eq!(password.expose(), "B8MYkTQT`~]'");
//! ```

pub mod audit;
pub mod error;
pub mod generator;
pub mod master;

pub use error::{DerivationError, HashpassError, Result};
pub use generator::{
    derive, DerivationRequest, DerivationSettings, DerivedPassword, DigestString,
    DEFAULT_PASSWORD_LENGTH, DIGEST_LEN, SPECIAL_CHARACTER_GROUPS,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
