//! Email value object with corporate/personal classification
//!
//! Addresses are normalized to lower case and validated through a fixed
//! ladder of structural checks before the general pattern match, so callers
//! get a precise error (`MissingAt`, `ConsecutiveDots`, ...) instead of a
//! generic "invalid email".
//!
//! Classification against the personal-webmail domain list answers the
//! registration question "did this partner sign up with a company address?".
//! The default list reflects the providers the business already knows about;
//! it is data, not law, and callers may pass their own list to
//! [`Email::is_corporate_with`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MIN_LENGTH: usize = 5;
const MAX_LENGTH: usize = 254;

/// Known personal-webmail domains, matched case-insensitively and exactly
pub const PERSONAL_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "hotmail.com",
    "yahoo.com",
    "yahoo.com.br",
    "outlook.com",
    "live.com",
    "icloud.com",
    "bol.com.br",
    "uol.com.br",
    "terra.com.br",
    "ig.com.br",
];

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Errors produced by the email validator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is empty")]
    EmptyInput,

    #[error("email is longer than 254 characters")]
    TooLong,

    #[error("email is shorter than 5 characters")]
    TooShort,

    #[error("email is missing the @ separator")]
    MissingAt,

    #[error("email has more than one @ separator")]
    MultipleAt,

    #[error("email contains consecutive dots")]
    ConsecutiveDots,

    #[error("email starts or ends with a dot")]
    BoundaryDot,

    #[error("email starts or ends with an @")]
    BoundaryAt,

    #[error("email does not match the expected local-part@domain.tld shape")]
    PatternMismatch,
}

/// A validated, lower-cased email address
///
/// # Examples
///
/// ```rust
/// use domain_partner::Email;
///
/// let email = Email::new("Leo@Empresa.COM.BR").unwrap();
/// assert_eq!(email.as_str(), "leo@empresa.com.br");
/// assert_eq!(email.domain(), "empresa.com.br");
/// assert!(email.is_corporate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validates a raw address and returns the normalized value
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] in the check ladder that the input
    /// trips over; the pattern match runs last.
    pub fn new(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmailError::EmptyInput);
        }

        let value = trimmed.to_lowercase();
        if value.len() > MAX_LENGTH {
            return Err(EmailError::TooLong);
        }
        if value.len() < MIN_LENGTH {
            return Err(EmailError::TooShort);
        }

        match value.matches('@').count() {
            0 => return Err(EmailError::MissingAt),
            1 => {}
            _ => return Err(EmailError::MultipleAt),
        }

        if value.contains("..") {
            return Err(EmailError::ConsecutiveDots);
        }
        if value.starts_with('.') || value.ends_with('.') {
            return Err(EmailError::BoundaryDot);
        }
        if value.starts_with('@') || value.ends_with('@') {
            return Err(EmailError::BoundaryAt);
        }
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(EmailError::PatternMismatch);
        }

        Ok(Self(value))
    }

    /// Returns the normalized address
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part before the `@`
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Returns the part after the `@`
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }

    /// Returns true if the domain is not a known personal-webmail provider
    pub fn is_corporate(&self) -> bool {
        self.is_corporate_with(PERSONAL_EMAIL_DOMAINS)
    }

    /// Classifies against a caller-supplied personal-domain list
    pub fn is_corporate_with(&self, personal_domains: &[&str]) -> bool {
        let domain = self.domain();
        !personal_domains
            .iter()
            .any(|personal| personal.eq_ignore_ascii_case(domain))
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
