use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is a valid regex")
});

/// Syntactic `local@domain.tld` shape check.
///
/// This is not RFC 5322 validation: quoted local parts are rejected and many
/// undeliverable addresses (`a@b.c`) are accepted.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
