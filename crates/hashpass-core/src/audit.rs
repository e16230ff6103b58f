//! Append-only reminder log of derivation parameters.
//!
//! Each derivation can record which domain it was for and which settings were
//! used, so the user can later reproduce the same password. The master phrase
//! and the derived password are never part of a record.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{HashpassError, Result};

/// Default file name of the audit log inside the hashpass home directory.
pub const DEFAULT_AUDIT_FILE_NAME: &str = "domains.log";

/// One line of the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub timestamp: DateTime<Utc>,
    pub domain: String,
    pub special_characters: bool,
    pub additional_info: String,
}

impl AuditRecord {
    /// Create a record stamped with the current time.
    pub fn now(
        domain: impl Into<String>,
        special_characters: bool,
        additional_info: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            domain: domain.into(),
            special_characters,
            additional_info: additional_info.into(),
        }
    }

    /// Render the record as a single log line (with trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "Date: [{}], Domain: [{}], Special Characters: [{}], AdditionalInfo: [{}]\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.domain,
            self.special_characters,
            self.additional_info
        )
    }
}

/// Handle to an audit log file.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record, creating the file (and its directory) if needed.
    pub fn append(&self, record: &AuditRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HashpassError::Audit(format!(
                    "Failed to create log directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(|e| {
            HashpassError::Audit(format!(
                "Failed to open log file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        file.write_all(record.to_line().as_bytes()).map_err(|e| {
            HashpassError::Audit(format!(
                "Failed to write to log file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::tempdir;

    fn fixed_record(domain: &str) -> AuditRecord {
        AuditRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            domain: domain.to_string(),
            special_characters: true,
            additional_info: "2".to_string(),
        }
    }

    #[test]
    fn test_record_line_format() {
        let line = fixed_record("example.org").to_line();
        assert_eq!(
            line,
            "Date: [2024-05-01T12:30:00Z], Domain: [example.org], Special Characters: [true], AdditionalInfo: [2]\n"
        );
    }

    #[test]
    fn test_append_creates_and_appends() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("nested").join("domains.log"));

        log.append(&fixed_record("a.example")).unwrap();
        log.append(&fixed_record("b.example")).unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Domain: [a.example]"));
        assert!(lines[1].contains("Domain: [b.example]"));
    }

    #[cfg(unix)]
    #[test]
    fn test_append_uses_private_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("domains.log"));
        log.append(&fixed_record("a.example")).unwrap();

        let mode = fs::metadata(log.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_append_to_directory_fails() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path());
        let err = log.append(&fixed_record("a.example")).unwrap_err();
        assert!(matches!(err, HashpassError::Audit(_)));
    }
}
