//! Output formatting helpers for the CLI.

use hashpass_core::DerivedPassword;

/// How the derived password is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Quiet,
    Json,
}

impl OutputMode {
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Text
        }
    }
}

/// Convert a result to JSON for output.
pub fn password_json(domain: &str, password: &DerivedPassword) -> serde_json::Value {
    serde_json::json!({
        "domain": domain,
        "password": password,
    })
}

/// Render the result for the given mode.
pub fn render_password(
    mode: OutputMode,
    domain: &str,
    password: &DerivedPassword,
) -> anyhow::Result<String> {
    Ok(match mode {
        OutputMode::Text => format!("Your password for {} is: {}", domain, password),
        OutputMode::Quiet => password.to_string(),
        OutputMode::Json => serde_json::to_string_pretty(&password_json(domain, password))?,
    })
}
