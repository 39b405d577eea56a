//! Postal address types

use serde::{Deserialize, Serialize};

use crate::error::{self, PartnerError};

/// Raw address fields as captured by a form or a postal-code lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressInput {
    pub zip_code: String,
    pub state: String,
    pub city: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub complement: Option<String>,
}

/// A normalized postal address
///
/// Built only through [`Address::new`]: the zip code is reduced to its
/// digits, the state is upper-cased, the remaining fields are trimmed and
/// a blank complement becomes absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    zip_code: String,
    state: String,
    city: String,
    street: String,
    number: String,
    neighborhood: String,
    complement: Option<String>,
}

impl Address {
    /// Validates and normalizes raw address fields
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first field that is blank
    /// after trimming (or, for the zip code, left with no digits).
    pub fn new(input: AddressInput) -> Result<Self, PartnerError> {
        let zip_code: String = error::required(&input.zip_code, "zip_code")?
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if zip_code.is_empty() {
            return Err(PartnerError::MissingRequiredField("zip_code"));
        }

        Ok(Self {
            zip_code,
            state: error::required(&input.state, "state")?.to_uppercase(),
            city: error::required(&input.city, "city")?,
            street: error::required(&input.street, "street")?,
            number: error::required(&input.number, "number")?,
            neighborhood: error::required(&input.neighborhood, "neighborhood")?,
            complement: error::optional(input.complement),
        })
    }

    /// Returns the zip code as digits only
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// Returns the zip code masked as `NNNNN-NNN` when it has eight digits
    pub fn formatted_zip(&self) -> String {
        if self.zip_code.len() == 8 {
            format!("{}-{}", &self.zip_code[..5], &self.zip_code[5..])
        } else {
            self.zip_code.clone()
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }

    /// Formats the address for display
    pub fn format(&self) -> String {
        let mut lines = vec![format!("{}, {}", self.street, self.number)];
        if let Some(complement) = &self.complement {
            lines.push(complement.clone());
        }
        lines.push(self.neighborhood.clone());
        lines.push(format!("{} - {}, {}", self.city, self.state, self.formatted_zip()));
        lines.join("\n")
    }
}
