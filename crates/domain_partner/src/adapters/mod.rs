//! Adapters for external lookup services

pub mod lookup;

pub use lookup::{
    CompanyLookupAdapter, CompanyLookupPort, CompanyRecord, LookupConfig,
    PostalAddressRecord, PostalLookupAdapter, PostalLookupPort,
};
