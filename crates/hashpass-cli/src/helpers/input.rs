//! Interactive master phrase entry.

use dialoguer::Password;
use secrecy::SecretString;

/// Prompt for the master phrase with confirmation.
pub fn prompt_master_phrase(interactive: bool) -> anyhow::Result<SecretString> {
    if !interactive {
        return Err(anyhow::anyhow!(
            "--prompt needs a TTY. Use --master-file or HASHPASS_MASTER instead."
        ));
    }
    let phrase = Password::new()
        .with_prompt("Master phrase")
        .with_confirmation("Confirm master phrase", "Master phrases do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read master phrase: {}", e))?;
    Ok(SecretString::from(phrase))
}
