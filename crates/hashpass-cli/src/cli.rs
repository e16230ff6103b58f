use std::path::PathBuf;

use clap::Parser;

use hashpass_core::VERSION;

/// Hashpass - derive reproducible per-domain passwords from a master phrase
#[derive(Parser, Debug)]
#[command(name = "hashpass")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// The master phrase. Escape shell special characters ($, spaces, ...).
    /// HASHPASS_MASTER is used when no master source flag is given
    #[arg(long)]
    pub master: Option<String>,

    /// Path to a file containing the master phrase
    #[arg(long, value_name = "PATH")]
    pub master_file: Option<PathBuf>,

    /// Prompt for the master phrase (with confirmation)
    #[arg(long)]
    pub prompt: bool,

    /// The domain the password is intended for
    #[arg(long)]
    pub domain: Option<String>,

    /// Free text mixed into the password (e.g. an index if the previous one leaked)
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub additional_info: String,

    /// Length of the password [default: 12, or the config value]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub password_length: Option<i64>,

    /// Overlay a known set of special characters on the end of the password
    /// [default: true, or the config value]
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub special_characters: Option<bool>,

    /// Record the domain and settings (never the password) in the audit log
    #[arg(long)]
    pub log_domain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (print only the password)
    #[arg(short, long)]
    pub quiet: bool,
}
