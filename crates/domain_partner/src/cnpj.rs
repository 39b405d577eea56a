//! CNPJ - the Brazilian national registry number for legal entities
//!
//! A CNPJ is a 14-digit identifier whose last two digits verify the first
//! twelve through a weighted sum modulo 11. Input may arrive masked
//! (`11.222.333/0001-81`) or bare (`11222333000181`); construction strips
//! the mask, validates, and stores only the normalized digit string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::{self, DocumentError};

const CNPJ_LENGTH: usize = 14;
const MASK_CHARS: [char; 3] = ['.', '/', '-'];
const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A validated CNPJ, stored as its 14-digit normalized string
///
/// Instances can only be obtained through [`Cnpj::new`], so holding a value
/// of this type is proof the checksum passed. Equality and hashing are
/// based on the digit string alone.
///
/// # Examples
///
/// ```rust
/// use domain_partner::Cnpj;
///
/// let cnpj = Cnpj::new("11.222.333/0001-81").unwrap();
/// assert_eq!(cnpj.as_str(), "11222333000181");
/// assert_eq!(cnpj.formatted(), "11.222.333/0001-81");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cnpj(String);

impl Cnpj {
    /// Validates a raw CNPJ string and returns the normalized value
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] when the input is empty after cleaning,
    /// has the wrong length, contains non-digits, is a degenerate repeated
    /// sequence, or fails either verification digit.
    pub fn new(raw: &str) -> Result<Self, DocumentError> {
        let cleaned = document::strip_mask(raw, &MASK_CHARS);
        let digits = document::digit_values(&cleaned, CNPJ_LENGTH)?;

        if digits[12] != document::check_digit(&digits[..12], &FIRST_WEIGHTS) {
            return Err(DocumentError::ChecksumMismatch);
        }
        if digits[13] != document::check_digit(&digits[..13], &SECOND_WEIGHTS) {
            return Err(DocumentError::ChecksumMismatch);
        }

        Ok(Self(cleaned))
    }

    /// Returns the normalized 14-digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the CNPJ as `NN.NNN.NNN/NNNN-NN`
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..12],
            &self.0[12..]
        )
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_masked_cnpj() {
        let cnpj = Cnpj::new("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
        assert_eq!(cnpj.formatted(), "11.222.333/0001-81");
    }

    #[test]
    fn test_valid_bare_cnpj() {
        let cnpj = Cnpj::new("04252011000110").unwrap();
        assert_eq!(cnpj.formatted(), "04.252.011/0001-10");
    }

    #[test]
    fn test_spaces_are_stripped() {
        let cnpj = Cnpj::new(" 11 222 333 0001 81 ").unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Cnpj::new("  . / - "), Err(DocumentError::EmptyInput));
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            Cnpj::new("1122233300018"),
            Err(DocumentError::InvalidLength {
                expected: 14,
                found: 13
            })
        );
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(Cnpj::new("1122233300018x"), Err(DocumentError::NonNumeric));
    }

    #[test]
    fn test_repeated_digits() {
        assert_eq!(Cnpj::new("00000000000000"), Err(DocumentError::RepeatedDigits));
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(Cnpj::new("12345678000100"), Err(DocumentError::ChecksumMismatch));
    }

    #[test]
    fn test_display_uses_mask() {
        let cnpj = Cnpj::new("11222333000181").unwrap();
        assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
    }

    #[test]
    fn test_from_str_round_trip() {
        let cnpj: Cnpj = "11.222.333/0001-81".parse().unwrap();
        let reparsed: Cnpj = cnpj.formatted().parse().unwrap();
        assert_eq!(cnpj, reparsed);
    }

    mod proptests {
        use super::*;
        use crate::document;
        use proptest::prelude::*;

        fn valid_cnpj_digits() -> impl Strategy<Value = String> {
            proptest::collection::vec(0u8..10, 12).prop_filter_map(
                "degenerate repeated sequence",
                |mut digits| {
                    let first = document::check_digit(&digits, &FIRST_WEIGHTS);
                    digits.push(first);
                    let second = document::check_digit(&digits, &SECOND_WEIGHTS);
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
            fn accepts_any_cnpj_with_computed_check_digits(digits in valid_cnpj_digits()) {
                let cnpj = Cnpj::new(&digits).unwrap();
                prop_assert_eq!(cnpj.as_str(), digits);
            }

            #[test]
            fn formatted_round_trips_to_same_digits(digits in valid_cnpj_digits()) {
                let cnpj = Cnpj::new(&digits).unwrap();
                let reparsed = Cnpj::new(&cnpj.formatted()).unwrap();
                prop_assert_eq!(cnpj, reparsed);
            }

            #[test]
            fn rejects_any_corrupted_check_digit(digits in valid_cnpj_digits(), bump in 1u8..10) {
                let mut bytes = digits.into_bytes();
                let last = bytes[13] - b'0';
                bytes[13] = (last + bump) % 10 + b'0';
                let corrupted = String::from_utf8(bytes).unwrap();
                prop_assert_eq!(Cnpj::new(&corrupted), Err(DocumentError::ChecksumMismatch));
            }
        }
    }
}
