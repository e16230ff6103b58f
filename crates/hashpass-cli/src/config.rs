use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hashpass_core::audit::DEFAULT_AUDIT_FILE_NAME;
use hashpass_core::master::DEFAULT_MASTER_FILE_NAME;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HashpassConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub audit: AuditSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsSection {
    pub password_length: Option<usize>,
    pub special_characters: Option<bool>,
    #[serde(default)]
    pub log_domain: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AuditSection {
    pub path: Option<String>,
}

/// Resolve the hashpass home directory from the process environment.
pub fn hashpass_home() -> anyhow::Result<PathBuf> {
    resolve_home(|key| std::env::var(key).ok())
}

/// Resolve the hashpass home directory.
///
/// `HASHPASS_HOME` wins, then `XDG_CONFIG_HOME/hashpass`, then
/// `HOME/.config/hashpass`. Blank values are ignored.
pub fn resolve_home(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<PathBuf> {
    let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(value) = non_blank("HASHPASS_HOME") {
        return Ok(PathBuf::from(value));
    }
    if let Some(value) = non_blank("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(value).join("hashpass"));
    }
    let home = non_blank("HOME")
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home).join(".config").join("hashpass"))
}

pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

pub fn default_master_path(home: &Path) -> PathBuf {
    home.join(DEFAULT_MASTER_FILE_NAME)
}

impl HashpassConfig {
    /// Audit log location, relative to `home` unless configured.
    pub fn audit_path(&self, home: &Path) -> PathBuf {
        match self.audit.path.as_deref() {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => home.join(DEFAULT_AUDIT_FILE_NAME),
        }
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<HashpassConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config if it exists, otherwise fall back to built-in defaults.
pub fn load_config(path: &Path) -> anyhow::Result<HashpassConfig> {
    if !path.exists() {
        return Ok(HashpassConfig::default());
    }
    read_config(path)
}
