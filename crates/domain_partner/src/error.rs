//! Partner domain errors

use thiserror::Error;

use crate::document::DocumentError;
use crate::email::EmailError;

/// Errors produced by the partner aggregate
///
/// Every variant is rejected input: construction and mutation either
/// succeed completely or fail with the first rule the input breaks,
/// leaving prior state untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartnerError {
    /// A required field was blank after trimming
    #[error("required field missing: {0}")]
    MissingRequiredField(&'static str),

    /// The tax document failed validation
    #[error("invalid document: {0}")]
    Document(#[from] DocumentError),

    /// The email address failed validation
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
}

/// Returns the trimmed value or `MissingRequiredField` when blank.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, PartnerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PartnerError::MissingRequiredField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional field, dropping it entirely when blank.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
