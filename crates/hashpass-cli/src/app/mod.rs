//! Application-level flow for the hashpass CLI.
//!
//! This module provides:
//! - Home, config and master phrase resolution
//! - Merging flags with config defaults
//! - The single derivation run and optional audit log entry

mod resolver;
mod settings;

use hashpass_core::audit::{AuditLog, AuditRecord};
use hashpass_core::{derive, DerivationRequest};

use crate::cli::Cli;
use crate::config::{hashpass_home, load_config};
use crate::errors::CliError;
use crate::output::{render_password, OutputMode};

use resolver::{resolve_config_path, resolve_master_phrase};
use settings::{log_domain_enabled, resolve_settings, short_length_warning};

/// Derive and print one password.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let home = hashpass_home()?;
    let config = load_config(&resolve_config_path(&home))?;

    let master_phrase = resolve_master_phrase(cli, &home)?;
    let domain = cli
        .domain
        .clone()
        .ok_or_else(|| CliError::invalid_input("--domain is required"))?;
    let settings = resolve_settings(cli, &config)?;

    let output_length = settings.output_length;
    let include_special_characters = settings.include_special_characters;
    let additional_info = settings.additional_info.clone();
    tracing::debug!(
        domain = %domain,
        length = output_length,
        special_characters = include_special_characters,
        "deriving password"
    );

    let request = DerivationRequest::with_settings(master_phrase, domain.as_str(), settings);
    let password = derive(request).map_err(CliError::from)?;

    if let Some(warning) = short_length_warning(output_length) {
        eprintln!("Warning: {}", warning);
    }

    let mode = OutputMode::from_flags(cli.json, cli.quiet);
    println!("{}", render_password(mode, &domain, &password)?);

    if log_domain_enabled(cli, &config) {
        let log = AuditLog::new(config.audit_path(&home));
        let record = AuditRecord::now(&domain, include_special_characters, additional_info);
        match log.append(&record) {
            Ok(()) => {
                if mode == OutputMode::Text {
                    eprintln!("Derivation details saved to {}", log.path().display());
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "audit log append failed");
                eprintln!("Warning: {}", err);
            }
        }
    }

    Ok(())
}
