//! Email address validation.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile")
});

/// Syntactic validity check for an email address.
///
/// Shape only: exactly one `@`, a dotted domain, no whitespace, no
/// consecutive dots. The emailed confirmation link is the actual proof
/// of ownership.
pub fn is_valid(candidate: &str) -> bool {
    !candidate.contains("..") && EMAIL_RE.is_match(candidate)
}
