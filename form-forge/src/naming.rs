//! Field name rules.
//!
//! Field names become object keys in the generated schema and `name`
//! attributes in the generated markup, so they must be plain identifiers.

use convert_case::{Case, Casing};
use uuid::Uuid;

use crate::error::{FormError, FormResult};

/// Length of the random suffix appended to generated default names.
pub const SUFFIX_LEN: usize = 3;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check whether `name` matches `^[A-Za-z_][A-Za-z0-9_]*$`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => chars.all(is_word_char),
        _ => false,
    }
}

/// Validate a field name, returning an [`FormError::InvalidName`] describing the problem.
pub fn validate_name(name: &str) -> FormResult<()> {
    if name.is_empty() {
        return Err(FormError::invalid_name(name, "name must not be empty"));
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(FormError::invalid_name(name, "name must not start with a digit"));
    }
    if !is_valid_identifier(name) {
        return Err(FormError::invalid_name(
            name,
            "only letters, digits and underscores are allowed",
        ));
    }
    Ok(())
}

/// Turn free text (e.g. a label typed by the user) into a field identifier.
///
/// Converts to snake_case, drops every non-word character and strips leading
/// digits and underscores. The result may be empty, which [`validate_name`]
/// rejects.
pub fn sanitize_name(raw: &str) -> String {
    let snake = raw.trim().to_case(Case::Snake);
    let cleaned: String = snake.chars().filter(|&c| is_word_char(c)).collect();
    cleaned
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '_')
        .to_string()
}

/// Short lowercase alphanumeric suffix taken from the random bits of a UUID.
pub fn random_suffix(uuid: &Uuid) -> String {
    let mut bits = uuid.as_u128();
    let base = SUFFIX_ALPHABET.len() as u128;
    (0..SUFFIX_LEN)
        .map(|_| {
            let digit = (bits % base) as usize;
            bits /= base;
            SUFFIX_ALPHABET[digit] as char
        })
        .collect()
}

/// Default name for a new field of `kind`: `<kind>_<suffix>`.
pub fn default_name(kind: &str, uuid: &Uuid) -> String {
    let stem = sanitize_name(kind);
    let stem = if stem.is_empty() { "field".to_string() } else { stem };
    format!("{}_{}", stem, random_suffix(uuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("name"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("email_2"));
        assert!(is_valid_identifier("firstName"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fa"));
        assert!(!is_valid_identifier("first-name"));
        assert!(!is_valid_identifier("first name"));
    }

    #[test]
    fn test_validate_name_reasons() {
        assert!(validate_name("ok_name").is_ok());

        let err = validate_name("").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));

        let err = validate_name("9lives").unwrap_err();
        assert!(err.to_string().contains("must not start with a digit"));

        let err = validate_name("a.b").unwrap_err();
        assert!(matches!(err, FormError::InvalidName { .. }));
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Full Name"), "full_name");
        assert_eq!(sanitize_name("  e-mail!  "), "e_mail");
        assert_eq!(sanitize_name("2FA code"), "fa_code");
        assert_eq!(sanitize_name("!!!"), "");
    }

    #[test]
    fn test_sanitized_names_are_valid_or_empty() {
        for raw in ["Phone #", "Zip/Postal", "3rd party", "über"] {
            let name = sanitize_name(raw);
            assert!(name.is_empty() || is_valid_identifier(&name), "{raw:?} -> {name:?}");
        }
    }

    #[test]
    fn test_default_name_shape() {
        let uuid = Uuid::now_v7();
        let name = default_name("email", &uuid);

        assert!(name.starts_with("email_"));
        assert_eq!(name.len(), "email_".len() + SUFFIX_LEN);
        assert!(is_valid_identifier(&name));
    }

    #[test]
    fn test_random_suffix_is_deterministic_per_uuid() {
        let uuid = Uuid::now_v7();
        assert_eq!(random_suffix(&uuid), random_suffix(&uuid));
    }
}
