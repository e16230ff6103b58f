//! Merging command line flags with config defaults.

use hashpass_core::generator::output_length_from_signed;
use hashpass_core::{DerivationSettings, DEFAULT_PASSWORD_LENGTH};

use crate::cli::Cli;
use crate::config::HashpassConfig;
use crate::constants::MIN_RECOMMENDED_LENGTH;
use crate::errors::CliError;

/// Build derivation settings; flags win over config, config over built-ins.
pub fn resolve_settings(cli: &Cli, config: &HashpassConfig) -> Result<DerivationSettings, CliError> {
    let output_length = match cli.password_length {
        Some(value) => output_length_from_signed(value)?,
        None => config
            .defaults
            .password_length
            .unwrap_or(DEFAULT_PASSWORD_LENGTH),
    };
    let include_special_characters = cli
        .special_characters
        .or(config.defaults.special_characters)
        .unwrap_or(true);

    Ok(DerivationSettings {
        additional_info: cli.additional_info.clone(),
        output_length,
        include_special_characters,
    })
}

/// Whether the audit log should be written for this run.
pub fn log_domain_enabled(cli: &Cli, config: &HashpassConfig) -> bool {
    cli.log_domain || config.defaults.log_domain
}

/// Warning for lengths that work but are weak.
pub fn short_length_warning(output_length: usize) -> Option<String> {
    if output_length >= MIN_RECOMMENDED_LENGTH {
        return None;
    }
    Some(format!(
        "Password length {} is short. It will be generated, but consider {} or more characters.",
        output_length, MIN_RECOMMENDED_LENGTH
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use hashpass_core::DerivationError;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["hashpass", "--domain", "localhost"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_builtin_defaults() {
        let settings = resolve_settings(&parse(&[]), &HashpassConfig::default()).unwrap();
        assert_eq!(settings, DerivationSettings::default());
    }

    #[test]
    fn test_config_defaults_apply() {
        let mut config = HashpassConfig::default();
        config.defaults.password_length = Some(20);
        config.defaults.special_characters = Some(false);

        let settings = resolve_settings(&parse(&[]), &config).unwrap();
        assert_eq!(settings.output_length, 20);
        assert!(!settings.include_special_characters);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = HashpassConfig::default();
        config.defaults.password_length = Some(20);
        config.defaults.special_characters = Some(false);

        let cli = parse(&["--password-length", "10", "--special-characters", "true"]);
        let settings = resolve_settings(&cli, &config).unwrap();
        assert_eq!(settings.output_length, 10);
        assert!(settings.include_special_characters);
    }

    #[test]
    fn test_non_positive_length_is_invalid() {
        let err = resolve_settings(&parse(&["--password-length", "0"]), &HashpassConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), DerivationError::InvalidLength.to_string());

        assert!(
            resolve_settings(&parse(&["--password-length", "-4"]), &HashpassConfig::default())
                .is_err()
        );
    }

    #[test]
    fn test_short_length_warning() {
        assert!(short_length_warning(7).is_some());
        assert!(short_length_warning(8).is_none());
    }

    #[test]
    fn test_log_domain_from_config() {
        let mut config = HashpassConfig::default();
        assert!(!log_domain_enabled(&parse(&[]), &config));
        assert!(log_domain_enabled(&parse(&["--log-domain"]), &config));
        config.defaults.log_domain = true;
        assert!(log_domain_enabled(&parse(&[]), &config));
    }
}
