//! Tests for the CNPJ and CPF validators and the Document union

use domain_partner::{Cnpj, Cpf, Document, DocumentError, PersonType};

// ============================================================================
// CNPJ Tests
// ============================================================================

mod cnpj_tests {
    use super::*;

    #[test]
    fn test_accepts_masked_input() {
        let cnpj = Cnpj::new("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
    }

    #[test]
    fn test_accepts_bare_input() {
        let cnpj = Cnpj::new("11222333000181").unwrap();
        assert_eq!(cnpj.formatted(), "11.222.333/0001-81");
    }

    #[test]
    fn test_formatted_round_trips_through_cleaning() {
        let cnpj = Cnpj::new("04252011000110").unwrap();
        let reparsed = Cnpj::new(&cnpj.formatted()).unwrap();
        assert_eq!(cnpj, reparsed);
        assert_eq!(reparsed.as_str(), "04252011000110");
    }

    #[test]
    fn test_rejects_empty_after_cleaning() {
        assert_eq!(Cnpj::new(""), Err(DocumentError::EmptyInput));
        assert_eq!(Cnpj::new(" ./- "), Err(DocumentError::EmptyInput));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Cnpj::new("11.222.333/0001-8"),
            Err(DocumentError::InvalidLength {
                expected: 14,
                found: 13
            })
        );
        assert_eq!(
            Cnpj::new("112223330001811"),
            Err(DocumentError::InvalidLength {
                expected: 14,
                found: 15
            })
        );
    }

    #[test]
    fn test_rejects_letters() {
        assert_eq!(Cnpj::new("11.222.333/0001-8A"), Err(DocumentError::NonNumeric));
    }

    #[test]
    fn test_rejects_repeated_digits() {
        for digit in ['0', '3', '9'] {
            let raw: String = std::iter::repeat(digit).take(14).collect();
            assert_eq!(Cnpj::new(&raw), Err(DocumentError::RepeatedDigits), "digit {digit}");
        }
    }

    #[test]
    fn test_rejects_bad_first_check_digit() {
        assert_eq!(Cnpj::new("12345678000100"), Err(DocumentError::ChecksumMismatch));
    }

    #[test]
    fn test_rejects_bad_second_check_digit() {
        // Valid first verification digit, corrupted second
        assert_eq!(Cnpj::new("11222333000180"), Err(DocumentError::ChecksumMismatch));
    }

    #[test]
    fn test_equality_is_by_digits() {
        let masked = Cnpj::new("11.222.333/0001-81").unwrap();
        let bare = Cnpj::new("11222333000181").unwrap();
        assert_eq!(masked, bare);
    }

    #[test]
    fn test_serde_round_trip() {
        let cnpj = Cnpj::new("11222333000181").unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        assert_eq!(json, "\"11222333000181\"");
        let back: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cnpj);
    }
}

// ============================================================================
// CPF Tests
// ============================================================================

mod cpf_tests {
    use super::*;

    #[test]
    fn test_accepts_masked_input() {
        let cpf = Cpf::new("123.456.789-09").unwrap();
        assert_eq!(cpf.as_str(), "12345678909");
    }

    #[test]
    fn test_accepts_bare_input() {
        let cpf = Cpf::new("52998224725").unwrap();
        assert_eq!(cpf.formatted(), "529.982.247-25");
    }

    #[test]
    fn test_formatted_round_trips_through_cleaning() {
        let cpf = Cpf::new("12345678909").unwrap();
        let reparsed = Cpf::new(&cpf.formatted()).unwrap();
        assert_eq!(cpf, reparsed);
    }

    #[test]
    fn test_rejects_empty_after_cleaning() {
        assert_eq!(Cpf::new(".-"), Err(DocumentError::EmptyInput));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Cpf::new("123.456.789-0"),
            Err(DocumentError::InvalidLength {
                expected: 11,
                found: 10
            })
        );
    }

    #[test]
    fn test_rejects_letters() {
        assert_eq!(Cpf::new("123.456.789-0X"), Err(DocumentError::NonNumeric));
    }

    #[test]
    fn test_rejects_repeated_digits() {
        // All-identical CPFs satisfy the weighted sums, so the explicit
        // rule is what keeps 111.111.111-11 out
        for digit in ['1', '5', '8'] {
            let raw: String = std::iter::repeat(digit).take(11).collect();
            assert_eq!(Cpf::new(&raw), Err(DocumentError::RepeatedDigits), "digit {digit}");
        }
    }

    #[test]
    fn test_rejects_bad_check_digits() {
        assert_eq!(Cpf::new("12345678901"), Err(DocumentError::ChecksumMismatch));
        assert_eq!(Cpf::new("123.456.789-19"), Err(DocumentError::ChecksumMismatch));
    }

    #[test]
    fn test_equality_is_by_digits() {
        let masked = Cpf::new("123.456.789-09").unwrap();
        let bare = Cpf::new("12345678909").unwrap();
        assert_eq!(masked, bare);
    }
}

// ============================================================================
// Document Union Tests
// ============================================================================

mod document_tests {
    use super::*;

    #[test]
    fn test_legal_entity_document() {
        let document = Document::LegalEntity(Cnpj::new("11.222.333/0001-81").unwrap());
        assert!(document.is_cnpj());
        assert!(!document.is_cpf());
        assert_eq!(document.person_type(), PersonType::LegalEntity);
        assert_eq!(document.digits(), "11222333000181");
        assert_eq!(document.formatted(), "11.222.333/0001-81");
    }

    #[test]
    fn test_individual_document() {
        let document = Document::Individual(Cpf::new("123.456.789-09").unwrap());
        assert!(document.is_cpf());
        assert!(!document.is_cnpj());
        assert_eq!(document.person_type(), PersonType::Individual);
        assert_eq!(document.formatted(), "123.456.789-09");
    }

    #[test]
    fn test_document_serde_round_trip() {
        let document = Document::LegalEntity(Cnpj::new("11222333000181").unwrap());
        let json = serde_json::to_string(&document).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, document);
    }
}
