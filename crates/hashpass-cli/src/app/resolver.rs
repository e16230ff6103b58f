//! Path and master phrase resolution.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use secrecy::SecretString;

use hashpass_core::master::read_master_file;

use crate::cli::Cli;
use crate::config::{default_config_path, default_master_path};
use crate::errors::CliError;
use crate::helpers::prompt_master_phrase;

/// Resolve the config file path, checking HASHPASS_CONFIG env var first.
pub fn resolve_config_path(home: &Path) -> PathBuf {
    if let Ok(value) = std::env::var("HASHPASS_CONFIG") {
        if !value.trim().is_empty() {
            return PathBuf::from(value);
        }
    }
    default_config_path(home)
}

/// Environment variable consulted when no master source flag is given.
pub const MASTER_ENV_VAR: &str = "HASHPASS_MASTER";

/// Pick the master phrase from exactly one source.
///
/// Flags come first, then `HASHPASS_MASTER`, then the `master` file in the
/// home directory.
pub fn resolve_master_phrase(cli: &Cli, home: &Path) -> anyhow::Result<SecretString> {
    resolve_master_phrase_with(cli, home, |key| std::env::var(key).ok())
}

fn resolve_master_phrase_with<F>(
    cli: &Cli,
    home: &Path,
    lookup: F,
) -> anyhow::Result<SecretString>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit_sources = [cli.master.is_some(), cli.master_file.is_some(), cli.prompt]
        .into_iter()
        .filter(|given| *given)
        .count();
    if explicit_sources > 1 {
        return Err(CliError::invalid_input(
            "Use only one of --master, --master-file or --prompt",
        )
        .into());
    }

    if let Some(master) = cli.master.as_ref() {
        return Ok(SecretString::from(master.clone()));
    }

    if let Some(path) = cli.master_file.as_ref() {
        tracing::debug!(path = %path.display(), "reading master phrase file");
        return read_master_file(path).map_err(|e| CliError::from(e).into());
    }

    if cli.prompt {
        return prompt_master_phrase(std::io::stdin().is_terminal());
    }

    if let Some(master) = lookup(MASTER_ENV_VAR).filter(|value| !value.is_empty()) {
        tracing::debug!("using master phrase from {}", MASTER_ENV_VAR);
        return Ok(SecretString::from(master));
    }

    let default_path = default_master_path(home);
    if !default_path.exists() {
        return Err(CliError::not_found(
            missing_master_message(&default_path),
            "Hint: Pass --master, --master-file or --prompt, or set HASHPASS_MASTER.",
        )
        .into());
    }
    tracing::debug!(path = %default_path.display(), "reading default master phrase file");
    read_master_file(&default_path).map_err(|e| CliError::from(e).into())
}

/// Error message when no master phrase source is available.
fn missing_master_message(default_path: &Path) -> String {
    format!(
        "No master phrase given and no default master file at {}",
        default_path.display()
    )
}
