use super::error::ContactError;
use super::fields::ContactFields;
use regex::Regex;
use std::sync::OnceLock;

// local-part@domain.tld: no whitespace, a single '@', a '.' somewhere after it
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                log::error!("[contact] email pattern failed to compile: {}", e);
                None
            }
        })
        .as_ref()
}

/// An address is only accepted when the pattern compiled and matches.
#[inline]
pub fn is_valid_email(candidate: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(candidate))
}

/// Check the fields in submission order and return their trimmed values.
///
/// Emptiness is judged after trimming. The address pattern is applied to the
/// value as typed, so stray surrounding whitespace is reported as invalid.
pub fn validate(fields: &ContactFields) -> Result<ContactFields, ContactError> {
    let trimmed = fields.trimmed();
    if trimmed.name.is_empty() || trimmed.email.is_empty() || trimmed.message.is_empty() {
        return Err(ContactError::MissingField);
    }
    if !is_valid_email(&fields.email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(trimmed)
}
