//! Credential check
//!
//! Exactly one admin identity exists, sourced from configuration. There is
//! no account table and no password hashing scheme to migrate: the check is
//! a straight comparison against the configured pair.

use crate::core::Config;

/// Identity established by a successful credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub email: String,
    pub is_admin: bool,
}

/// Check a credential pair against the configured admin identity
///
/// The email comparison is case-insensitive; the password comparison is
/// exact. Missing or empty fields are an ordinary mismatch, never an error:
/// bad credentials always yield `None`.
pub fn authenticate(config: &Config, email: &str, password: &str) -> Option<AdminIdentity> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return None;
    }

    if email != config.admin_email.to_lowercase() || password != config.admin_password {
        return None;
    }

    Some(AdminIdentity {
        email: config.admin_email.to_lowercase(),
        is_admin: true,
    })
}
