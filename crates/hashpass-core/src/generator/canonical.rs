//! Canonical digest input.

/// Separator between the fields of the canonical string.
pub const FIELD_SEPARATOR: char = ':';

/// Join the inputs as `master:domain:additional_info`.
///
/// Colons inside a field are not escaped, so `("a:b", "c", "")` and
/// `("a", "b:c", "")` share a canonical string. Escaping them would change
/// every previously derived password.
pub fn canonicalize(master_phrase: &str, domain: &str, additional_info: &str) -> String {
    let mut canonical =
        String::with_capacity(master_phrase.len() + domain.len() + additional_info.len() + 2);
    canonical.push_str(master_phrase);
    canonical.push(FIELD_SEPARATOR);
    canonical.push_str(domain);
    canonical.push(FIELD_SEPARATOR);
    canonical.push_str(additional_info);
    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_joined_in_order() {
        assert_eq!(canonicalize("secret", "localhost", ""), "secret:localhost:");
        assert_eq!(
            canonicalize("terces", "google.com", "addInfo"),
            "terces:google.com:addInfo"
        );
    }

    #[test]
    fn test_colons_are_not_escaped() {
        assert_eq!(canonicalize("a:b", "c", ""), canonicalize("a", "b:c", ""));
    }
}
