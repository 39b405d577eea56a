//! Partner aggregate
//!
//! A partner is a commercial counterpart of the business: either a legal
//! entity identified by a CNPJ or a natural person identified by a CPF,
//! with a validated email, a normalized postal address and a phone number.
//!
//! The aggregate has a single observable state: valid. Both factories
//! validate every field before anything is written, and every mutation
//! either replaces a whole validated value or returns the prior state
//! untouched. The document is a tagged union, so a partner can never hold
//! both documents or neither.
//!
//! # Examples
//!
//! ```rust
//! use domain_partner::{AddressInput, Partner, RegistrationRequest};
//!
//! let request = RegistrationRequest {
//!     name: "Empresa Exemplo Ltda".to_string(),
//!     document: "11.222.333/0001-81".to_string(),
//!     email: "contato@empresa.com.br".to_string(),
//!     phone: "+55 11 91234-5678".to_string(),
//!     address: AddressInput {
//!         zip_code: "01310-100".to_string(),
//!         state: "SP".to_string(),
//!         city: "São Paulo".to_string(),
//!         street: "Avenida Paulista".to_string(),
//!         number: "1578".to_string(),
//!         neighborhood: "Bela Vista".to_string(),
//!         complement: None,
//!     },
//!     observations: None,
//! };
//!
//! let partner = Partner::new_legal_person(request).unwrap();
//! assert!(partner.is_legal_person());
//! assert_eq!(partner.formatted_document(), "11.222.333/0001-81");
//! assert!(partner.has_corporate_email());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::PartnerId;

use crate::address::{Address, AddressInput};
use crate::cnpj::Cnpj;
use crate::cpf::Cpf;
use crate::document::Document;
use crate::email::Email;
use crate::error::{self, PartnerError};

/// The kind of person a partner is, implied by its document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonType {
    /// A company, identified by a CNPJ
    LegalEntity,
    /// A natural person, identified by a CPF
    Individual,
}

impl PersonType {
    /// Returns the display label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            PersonType::LegalEntity => "Pessoa Jurídica",
            PersonType::Individual => "Pessoa Física",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw registration fields as captured by the partner form
///
/// All fields are untrusted strings; `document` carries either a CNPJ or a
/// CPF depending on which factory the caller picks.
#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    /// Company name (legal person) or full name (natural person)
    pub name: String,
    /// Raw CNPJ or CPF, masked or bare
    pub document: String,
    /// Raw email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Raw address fields
    pub address: AddressInput,
    /// Free-text observations
    pub observations: Option<String>,
}

/// A registered commercial partner
///
/// Fields are private: reads go through accessors and writes through the
/// narrow update operations, which re-validate before replacing anything
/// and bump the update timestamp on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    id: PartnerId,
    name: String,
    document: Document,
    email: Email,
    address: Address,
    phone: String,
    observations: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Partner {
    /// Registers a legal person (company) from raw form fields
    ///
    /// Required fields are checked first (company name, address fields,
    /// phone), then the CNPJ and email validators run; their errors
    /// propagate unchanged.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` for blank required fields, or the wrapped
    /// document/email error.
    pub fn new_legal_person(request: RegistrationRequest) -> Result<Self, PartnerError> {
        let name = error::required(&request.name, "company_name")?;
        Self::register(name, request, |raw| Ok(Document::LegalEntity(Cnpj::new(raw)?)))
    }

    /// Registers a natural person from raw form fields
    ///
    /// Mirrors [`Partner::new_legal_person`], building a CPF instead.
    pub fn new_natural_person(request: RegistrationRequest) -> Result<Self, PartnerError> {
        let name = error::required(&request.name, "full_name")?;
        Self::register(name, request, |raw| Ok(Document::Individual(Cpf::new(raw)?)))
    }

    fn register(
        name: String,
        request: RegistrationRequest,
        build_document: impl FnOnce(&str) -> Result<Document, PartnerError>,
    ) -> Result<Self, PartnerError> {
        let address = Address::new(request.address)?;
        let phone = error::required(&request.phone, "phone")?;
        let document = build_document(&request.document)?;
        let email = Email::new(&request.email)?;

        let now = Utc::now();
        Ok(Self {
            id: PartnerId::new_v7(),
            name,
            document,
            email,
            address,
            phone,
            observations: error::optional(request.observations),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the email after re-validating the raw input
    pub fn update_email(&mut self, raw: &str) -> Result<(), PartnerError> {
        let email = Email::new(raw)?;
        self.email = email;
        self.touch();
        Ok(())
    }

    /// Replaces the phone number; blank input is rejected
    pub fn update_phone(&mut self, raw: &str) -> Result<(), PartnerError> {
        let phone = error::required(raw, "phone")?;
        self.phone = phone;
        self.touch();
        Ok(())
    }

    /// Replaces the whole address after re-validating the raw fields
    pub fn update_address(&mut self, input: AddressInput) -> Result<(), PartnerError> {
        let address = Address::new(input)?;
        self.address = address;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> PartnerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the normalized document digits used for uniqueness checks
    pub fn document_digits(&self) -> &str {
        self.document.digits()
    }

    /// Returns the document with its display mask
    pub fn formatted_document(&self) -> String {
        self.document.formatted()
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn observations(&self) -> Option<&str> {
        self.observations.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the person type implied by the document
    pub fn person_type(&self) -> PersonType {
        self.document.person_type()
    }

    /// Returns true if this partner holds a CNPJ
    pub fn is_legal_person(&self) -> bool {
        self.document.is_cnpj()
    }

    /// Returns true if this partner holds a CPF
    pub fn is_natural_person(&self) -> bool {
        self.document.is_cpf()
    }

    /// Returns true if the partner registered with a non-personal email domain
    pub fn has_corporate_email(&self) -> bool {
        self.email.is_corporate()
    }
}
