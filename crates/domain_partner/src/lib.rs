//! Partner Registration Domain
//!
//! This crate validates and models commercial partners: companies identified
//! by a CNPJ and natural persons identified by a CPF. The validation core is
//! a set of self-validating value objects ([`Cnpj`], [`Cpf`], [`Email`],
//! [`Address`]) composed into the [`Partner`] aggregate, which enforces the
//! cross-field invariants:
//!
//! - exactly one tax document, never both and never neither (the
//!   [`Document`] tagged union makes this structural);
//! - every required field present and normalized before anything is stored;
//! - mutations re-validate and either replace a whole value or leave the
//!   prior state untouched.
//!
//! Raw strings come in from the registration form or from the external
//! lookup services (postal code, tax registry); validated values or typed
//! errors come out. Persistence and transport live behind the port traits
//! in [`ports`] and [`adapters`].
//!
//! # Examples
//!
//! ```rust
//! use domain_partner::{AddressInput, Partner, RegistrationRequest};
//!
//! let partner = Partner::new_natural_person(RegistrationRequest {
//!     name: "Leonardo Santos".to_string(),
//!     document: "123.456.789-09".to_string(),
//!     email: "Leo@Empresa.COM.BR".to_string(),
//!     phone: "+55 11 91234-5678".to_string(),
//!     address: AddressInput {
//!         zip_code: "01310-100".to_string(),
//!         state: "sp".to_string(),
//!         city: "São Paulo".to_string(),
//!         street: "Avenida Paulista".to_string(),
//!         number: "1578".to_string(),
//!         neighborhood: "Bela Vista".to_string(),
//!         complement: None,
//!     },
//!     observations: None,
//! })
//! .unwrap();
//!
//! assert!(partner.is_natural_person());
//! assert_eq!(partner.email().as_str(), "leo@empresa.com.br");
//! assert_eq!(partner.formatted_document(), "123.456.789-09");
//! assert_eq!(partner.person_type().label(), "Pessoa Física");
//! ```

pub mod cnpj;
pub mod cpf;
pub mod document;
pub mod email;
pub mod address;
pub mod partner;
pub mod error;
pub mod ports;
pub mod adapters;

pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use document::{Document, DocumentError};
pub use email::{Email, EmailError, PERSONAL_EMAIL_DOMAINS};
pub use address::{Address, AddressInput};
pub use partner::{Partner, PersonType, RegistrationRequest};
pub use error::PartnerError;
pub use ports::{PartnerPort, PartnerPortExt, PartnerQuery};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockPartnerPort;
pub use adapters::{
    CompanyLookupAdapter, CompanyLookupPort, CompanyRecord, LookupConfig,
    PostalAddressRecord, PostalLookupAdapter, PostalLookupPort,
};
