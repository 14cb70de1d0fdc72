// src/core/validator.rs

use once_cell::sync::Lazy;
use psl::Type;
use regex::Regex;
use tracing::debug;

use crate::core::error::ValidationError;

// Labels are alphanumeric with internal hyphens only; the last label is
// alphabetic and at least two characters long.
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("domain regex is valid")
});

/// Checks that `input` has the structural shape of a domain name.
///
/// This is a purely syntactic check: `example.notatld` passes here and is
/// refused later by [`has_recognized_public_suffix`].
pub fn is_syntactically_valid_domain(input: &str) -> bool {
    DOMAIN_REGEX.is_match(input)
}

/// Checks that the public suffix of `input` is delegated by ICANN.
///
/// The lookup runs against the Public Suffix List bundled by the `psl` crate.
/// Private-section entries (`github.io`, `blogspot.com`, ...) are looked
/// through: the ICANN rule beneath them decides. Names only matched by the
/// list's implicit `*` rule are refused.
pub fn has_recognized_public_suffix(input: &str) -> bool {
    let mut name = input.to_ascii_lowercase();
    loop {
        let Some(suffix) = psl::suffix(name.as_bytes()) else {
            return false;
        };
        match suffix.typ() {
            Some(Type::Icann) => return suffix.is_known(),
            Some(Type::Private) => {
                // Drop the leftmost label of the private rule and retry.
                let matched = suffix.as_bytes();
                let Some(dot) = matched.iter().position(|b| *b == b'.') else {
                    return false;
                };
                let parent = String::from_utf8_lossy(&matched[dot + 1..]).into_owned();
                name = parent;
            }
            None => return false,
        }
    }
}

/// Runs both domain checks in order, stopping at the first failure.
pub fn validate_domain(input: &str) -> Result<(), ValidationError> {
    if !is_syntactically_valid_domain(input) {
        debug!(input, "Domain refused: invalid format.");
        return Err(ValidationError::InvalidFormat);
    }
    if !has_recognized_public_suffix(input) {
        debug!(input, "Domain refused: unrecognized public suffix.");
        return Err(ValidationError::UnrecognizedSuffix);
    }
    Ok(())
}
