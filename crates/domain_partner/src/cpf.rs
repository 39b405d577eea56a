//! CPF - the Brazilian natural-person registry number
//!
//! An 11-digit identifier with the same construction discipline as
//! [`crate::cnpj::Cnpj`]: two trailing verification digits over a weighted
//! sum modulo 11, mask stripped on input, only the normalized digit string
//! stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::{self, DocumentError};

const CPF_LENGTH: usize = 11;
const MASK_CHARS: [char; 2] = ['.', '-'];

/// A validated CPF, stored as its 11-digit normalized string
///
/// # Examples
///
/// ```rust
/// use domain_partner::Cpf;
///
/// let cpf = Cpf::new("123.456.789-09").unwrap();
/// assert_eq!(cpf.as_str(), "12345678909");
/// assert_eq!(cpf.formatted(), "123.456.789-09");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Validates a raw CPF string and returns the normalized value
    ///
    /// The first verification digit weighs digits 0..=8 with 10 down to 2;
    /// the second weighs digits 0..=9 (now including the first verification
    /// digit) with 11 down to 2.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] mirroring the CNPJ failure modes.
    pub fn new(raw: &str) -> Result<Self, DocumentError> {
        let cleaned = document::strip_mask(raw, &MASK_CHARS);
        let digits = document::digit_values(&cleaned, CPF_LENGTH)?;

        let first_weights: Vec<u32> = (2..=10).rev().collect();
        if digits[9] != document::check_digit(&digits[..9], &first_weights) {
            return Err(DocumentError::ChecksumMismatch);
        }

        let second_weights: Vec<u32> = (2..=11).rev().collect();
        if digits[10] != document::check_digit(&digits[..10], &second_weights) {
            return Err(DocumentError::ChecksumMismatch);
        }

        Ok(Self(cleaned))
    }

    /// Returns the normalized 11-digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the CPF as `NNN.NNN.NNN-NN`
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_masked_cpf() {
        let cpf = Cpf::new("123.456.789-09").unwrap();
        assert_eq!(cpf.as_str(), "12345678909");
        assert_eq!(cpf.formatted(), "123.456.789-09");
    }

    #[test]
    fn test_valid_bare_cpf() {
        let cpf = Cpf::new("52998224725").unwrap();
        assert_eq!(cpf.formatted(), "529.982.247-25");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Cpf::new("  "), Err(DocumentError::EmptyInput));
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            Cpf::new("123456789"),
            Err(DocumentError::InvalidLength {
                expected: 11,
                found: 9
            })
        );
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(Cpf::new("1234567890x"), Err(DocumentError::NonNumeric));
    }

    #[test]
    fn test_repeated_digits_rejected_despite_valid_checksum() {
        // 111.111.111-11 satisfies the weighted sums; the rule exists for it
        assert_eq!(Cpf::new("11111111111"), Err(DocumentError::RepeatedDigits));
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(Cpf::new("12345678901"), Err(DocumentError::ChecksumMismatch));
    }

    #[test]
    fn test_display_uses_mask() {
        let cpf = Cpf::new("12345678909").unwrap();
        assert_eq!(cpf.to_string(), "123.456.789-09");
    }

    mod proptests {
        use super::*;
        use crate::document;
        use proptest::prelude::*;

        fn valid_cpf_digits() -> impl Strategy<Value = String> {
            proptest::collection::vec(0u8..10, 9).prop_filter_map(
                "degenerate repeated sequence",
                |mut digits| {
                    let first_weights: Vec<u32> = (2..=10).rev().collect();
                    let first = document::check_digit(&digits, &first_weights);
                    digits.push(first);
                    let second_weights: Vec<u32> = (2..=11).rev().collect();
                    let second = document::check_digit(&digits, &second_weights);
                    digits.push(second);
                    if digits.iter().all(|&d| d == digits[0]) {
                        return None;
                    }
                    Some(digits.iter().map(|d| (d + b'0') as char).collect())
                },
            )
        }

        proptest! {
            #[test]
            fn accepts_any_cpf_with_computed_check_digits(digits in valid_cpf_digits()) {
                let cpf = Cpf::new(&digits).unwrap();
                prop_assert_eq!(cpf.as_str(), digits);
            }

            #[test]
            fn formatted_round_trips_to_same_digits(digits in valid_cpf_digits()) {
                let cpf = Cpf::new(&digits).unwrap();
                let reparsed = Cpf::new(&cpf.formatted()).unwrap();
                prop_assert_eq!(cpf, reparsed);
            }

            #[test]
            fn rejects_any_corrupted_check_digit(digits in valid_cpf_digits(), bump in 1u8..10) {
                let mut bytes = digits.into_bytes();
                let last = bytes[10] - b'0';
                bytes[10] = (last + bump) % 10 + b'0';
                let corrupted = String::from_utf8(bytes).unwrap();
                prop_assert_eq!(Cpf::new(&corrupted), Err(DocumentError::ChecksumMismatch));
            }
        }
    }
}
