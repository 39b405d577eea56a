//! Test Data Builders
//!
//! Provides builder patterns for constructing registration requests with
//! sensible defaults. Tests specify only the relevant fields and use
//! defaults for everything else.

use fake::faker::address::en::{CityName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;

use domain_partner::{AddressInput, Partner, PartnerError, PersonType, RegistrationRequest};

use crate::fixtures::{AddressFixtures, DocumentFixtures, EmailFixtures};

/// Builder for constructing registration requests
pub struct RegistrationRequestBuilder {
    person_type: PersonType,
    request: RegistrationRequest,
}

impl RegistrationRequestBuilder {
    /// Creates a builder for a legal person with fixture defaults
    pub fn legal_person() -> Self {
        Self {
            person_type: PersonType::LegalEntity,
            request: RegistrationRequest {
                name: "Empresa Exemplo Ltda".to_string(),
                document: DocumentFixtures::valid_cnpj().to_string(),
                email: EmailFixtures::corporate().to_string(),
                phone: "+55 11 91234-5678".to_string(),
                address: AddressFixtures::paulista(),
                observations: None,
            },
        }
    }

    /// Creates a builder for a natural person with fixture defaults
    pub fn natural_person() -> Self {
        Self {
            person_type: PersonType::Individual,
            request: RegistrationRequest {
                name: "Leonardo Santos".to_string(),
                document: DocumentFixtures::valid_cpf().to_string(),
                email: EmailFixtures::personal().to_string(),
                phone: "+55 11 99876-5432".to_string(),
                address: AddressFixtures::centro_rio(),
                observations: None,
            },
        }
    }

    /// Creates a legal-person builder with faked name, address, and phone
    ///
    /// The document and email keep their fixture defaults so the request
    /// stays valid; override them when uniqueness matters.
    pub fn random_legal_person() -> Self {
        let mut builder = Self::legal_person();
        builder.request.name = CompanyName().fake();
        builder.request.phone = PhoneNumber().fake();
        builder.request.address.city = CityName().fake();
        builder.request.address.street = StreetName().fake();
        builder
    }

    /// Creates a natural-person builder with faked name, address, and phone
    pub fn random_natural_person() -> Self {
        let mut builder = Self::natural_person();
        builder.request.name = Name().fake();
        builder.request.phone = PhoneNumber().fake();
        builder.request.address.city = CityName().fake();
        builder.request.address.street = StreetName().fake();
        builder
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    /// Sets the raw document
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.request.document = document.into();
        self
    }

    /// Sets the raw email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.request.email = email.into();
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.request.phone = phone.into();
        self
    }

    /// Sets the address fields
    pub fn with_address(mut self, address: AddressInput) -> Self {
        self.request.address = address;
        self
    }

    /// Sets the observations
    pub fn with_observations(mut self, observations: impl Into<String>) -> Self {
        self.request.observations = Some(observations.into());
        self
    }

    /// Returns the raw registration request
    pub fn build(self) -> RegistrationRequest {
        self.request
    }

    /// Runs the request through the factory matching the builder's kind
    pub fn register(self) -> Result<Partner, PartnerError> {
        match self.person_type {
            PersonType::LegalEntity => Partner::new_legal_person(self.request),
            PersonType::Individual => Partner::new_natural_person(self.request),
        }
    }
}
