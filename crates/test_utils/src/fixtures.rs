//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the partner registration domain.
//! These fixtures are designed to be consistent and predictable for unit tests.

use core_kernel::PartnerId;
use domain_partner::{AddressInput, Partner, RegistrationRequest};

/// Fixture for tax document test data
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A CNPJ with valid check digits, masked
    pub fn valid_cnpj() -> &'static str {
        "11.222.333/0001-81"
    }

    /// The same CNPJ as bare digits
    pub fn valid_cnpj_digits() -> &'static str {
        "11222333000181"
    }

    /// A second valid CNPJ for uniqueness scenarios
    pub fn alternate_cnpj() -> &'static str {
        "04.252.011/0001-10"
    }

    /// A CNPJ whose check digits do not match
    pub fn invalid_cnpj() -> &'static str {
        "12345678000100"
    }

    /// A CPF with valid check digits, masked
    pub fn valid_cpf() -> &'static str {
        "123.456.789-09"
    }

    /// The same CPF as bare digits
    pub fn valid_cpf_digits() -> &'static str {
        "12345678909"
    }

    /// A second valid CPF for uniqueness scenarios
    pub fn alternate_cpf() -> &'static str {
        "529.982.247-25"
    }

    /// A CPF whose check digits do not match
    pub fn invalid_cpf() -> &'static str {
        "12345678901"
    }
}

/// Fixture for email test data
pub struct EmailFixtures;

impl EmailFixtures {
    /// An address on a company domain
    pub fn corporate() -> &'static str {
        "contato@empresa.com.br"
    }

    /// An address on a known personal-webmail domain
    pub fn personal() -> &'static str {
        "leo@gmail.com"
    }

    /// An address with no @ separator
    pub fn invalid() -> &'static str {
        "email-invalido"
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// A fresh time-ordered partner id
    pub fn partner_id() -> PartnerId {
        PartnerId::new_v7()
    }
}

/// Fixture for address test data
pub struct AddressFixtures;

impl AddressFixtures {
    /// A complete address on Avenida Paulista, São Paulo
    pub fn paulista() -> AddressInput {
        AddressInput {
            zip_code: "01310-100".to_string(),
            state: "SP".to_string(),
            city: "São Paulo".to_string(),
            street: "Avenida Paulista".to_string(),
            number: "1578".to_string(),
            neighborhood: "Bela Vista".to_string(),
            complement: None,
        }
    }

    /// A complete address in central Rio de Janeiro
    pub fn centro_rio() -> AddressInput {
        AddressInput {
            zip_code: "20040-020".to_string(),
            state: "RJ".to_string(),
            city: "Rio de Janeiro".to_string(),
            street: "Avenida Rio Branco".to_string(),
            number: "1".to_string(),
            neighborhood: "Centro".to_string(),
            complement: Some("Sala 301".to_string()),
        }
    }
}

/// Fixture for complete registration requests and partners
pub struct PartnerFixtures;

impl PartnerFixtures {
    /// A valid legal-person registration request
    pub fn legal_person_request() -> RegistrationRequest {
        RegistrationRequest {
            name: "Empresa Exemplo Ltda".to_string(),
            document: DocumentFixtures::valid_cnpj().to_string(),
            email: EmailFixtures::corporate().to_string(),
            phone: "+55 11 91234-5678".to_string(),
            address: AddressFixtures::paulista(),
            observations: None,
        }
    }

    /// A valid natural-person registration request
    pub fn natural_person_request() -> RegistrationRequest {
        RegistrationRequest {
            name: "Leonardo Santos".to_string(),
            document: DocumentFixtures::valid_cpf().to_string(),
            email: EmailFixtures::personal().to_string(),
            phone: "+55 11 99876-5432".to_string(),
            address: AddressFixtures::centro_rio(),
            observations: None,
        }
    }

    /// A registered legal person
    pub fn legal_person() -> Partner {
        Partner::new_legal_person(Self::legal_person_request())
            .expect("legal person fixture must be valid")
    }

    /// A registered natural person
    pub fn natural_person() -> Partner {
        Partner::new_natural_person(Self::natural_person_request())
            .expect("natural person fixture must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_partner::{Cnpj, Cpf};

    #[test]
    fn test_document_fixtures_validate() {
        assert!(Cnpj::new(DocumentFixtures::valid_cnpj()).is_ok());
        assert!(Cnpj::new(DocumentFixtures::alternate_cnpj()).is_ok());
        assert!(Cnpj::new(DocumentFixtures::invalid_cnpj()).is_err());
        assert!(Cpf::new(DocumentFixtures::valid_cpf()).is_ok());
        assert!(Cpf::new(DocumentFixtures::alternate_cpf()).is_ok());
        assert!(Cpf::new(DocumentFixtures::invalid_cpf()).is_err());
    }

    #[test]
    fn test_partner_fixtures_build() {
        let legal = PartnerFixtures::legal_person();
        assert!(legal.is_legal_person());
        assert!(legal.has_corporate_email());

        let natural = PartnerFixtures::natural_person();
        assert!(natural.is_natural_person());
        assert!(!natural.has_corporate_email());
    }
}
