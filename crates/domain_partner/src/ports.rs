//! Partner Domain Ports
//!
//! This module defines the port interfaces for the partner domain, enabling
//! swappable implementations (internal database, mock, etc.).
//!
//! # Architecture
//!
//! The `PartnerPort` trait defines all operations the partner domain needs
//! from its data store. The domain itself only produces fully-validated
//! `Partner` aggregates; uniqueness of document and email across partners
//! is the store's concern, enforced here through the normalized strings the
//! aggregate exposes (`document_digits`, `email().as_str()`).
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_partner::ports::PartnerPort;
//! use std::sync::Arc;
//!
//! pub struct RegistrationService {
//!     partner_port: Arc<dyn PartnerPort>,
//! }
//!
//! impl RegistrationService {
//!     pub async fn register(&self, partner: Partner) -> Result<Partner, PortError> {
//!         self.partner_port.insert_partner(&partner, None).await?;
//!         Ok(partner)
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{
    DomainPort, HealthCheckable, HealthCheckResult, OperationMetadata, PartnerId, PortError,
};

use crate::partner::{Partner, PersonType};

/// Query parameters for finding partners
#[derive(Debug, Clone, Default)]
pub struct PartnerQuery {
    /// Filter by normalized document digits
    pub document: Option<String>,
    /// Filter by normalized email address
    pub email: Option<String>,
    /// Filter by person type
    pub person_type: Option<PersonType>,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl PartnerQuery {
    /// Creates a query to find by normalized document digits
    pub fn by_document(digits: impl Into<String>) -> Self {
        Self {
            document: Some(digits.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by normalized email
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by person type
    pub fn by_person_type(person_type: PersonType) -> Self {
        Self {
            person_type: Some(person_type),
            ..Default::default()
        }
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// The main port trait for partner persistence
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapter implementations. Duplicate document or
/// email on insert surfaces as `PortError::Conflict`.
#[async_trait]
pub trait PartnerPort: DomainPort + HealthCheckable {
    /// Retrieves a partner by ID
    ///
    /// # Returns
    ///
    /// The partner if found, or `PortError::NotFound`
    async fn get_partner(
        &self,
        id: PartnerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Partner, PortError>;

    /// Finds partners matching the query criteria
    async fn find_partners(
        &self,
        query: PartnerQuery,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Partner>, PortError>;

    /// Stores a newly registered partner
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if another partner already holds the same
    /// normalized document digits or email address.
    async fn insert_partner(
        &self,
        partner: &Partner,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Persists the current state of an existing partner
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if the partner was never inserted;
    /// `PortError::Conflict` if the update would collide with another
    /// partner's document or email.
    async fn update_partner(
        &self,
        partner: &Partner,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Removes a partner by ID
    async fn delete_partner(
        &self,
        id: PartnerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Checks whether any partner holds the given normalized document digits
    async fn document_exists(
        &self,
        digits: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError>;

    /// Checks whether any partner holds the given normalized email
    async fn email_exists(
        &self,
        email: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError>;
}

/// Extension trait for PartnerPort with convenience methods
#[async_trait]
pub trait PartnerPortExt: PartnerPort {
    /// Finds a single partner by normalized document digits
    async fn find_by_document(
        &self,
        digits: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Partner>, PortError> {
        let partners = self
            .find_partners(PartnerQuery::by_document(digits), metadata)
            .await?;
        Ok(partners.into_iter().next())
    }

    /// Finds a single partner by normalized email
    async fn find_by_email(
        &self,
        email: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Partner>, PortError> {
        let partners = self
            .find_partners(PartnerQuery::by_email(email), metadata)
            .await?;
        Ok(partners.into_iter().next())
    }
}

// Blanket implementation for all PartnerPort implementors
impl<T: PartnerPort> PartnerPortExt for T {}

/// Mock implementation of PartnerPort for testing
///
/// Stores partners in memory and enforces the same document/email
/// uniqueness a database adapter would, without external dependencies.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of PartnerPort
    #[derive(Debug, Default)]
    pub struct MockPartnerPort {
        partners: Arc<RwLock<HashMap<PartnerId, Partner>>>,
    }

    impl MockPartnerPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with partners for testing
        pub async fn with_partners(partners: Vec<Partner>) -> Self {
            let port = Self::new();
            for partner in partners {
                port.partners.write().await.insert(partner.id(), partner);
            }
            port
        }

        fn collides(existing: &Partner, candidate: &Partner) -> bool {
            existing.id() != candidate.id()
                && (existing.document_digits() == candidate.document_digits()
                    || existing.email().as_str() == candidate.email().as_str())
        }
    }

    impl DomainPort for MockPartnerPort {}

    #[async_trait]
    impl HealthCheckable for MockPartnerPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-partner-port".to_string(),
                status: core_kernel::AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl PartnerPort for MockPartnerPort {
        async fn get_partner(
            &self,
            id: PartnerId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Partner, PortError> {
            self.partners
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Partner", id))
        }

        async fn find_partners(
            &self,
            query: PartnerQuery,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<Partner>, PortError> {
            let partners = self.partners.read().await;
            let mut results: Vec<_> = partners
                .values()
                .filter(|p| {
                    if let Some(ref document) = query.document {
                        if p.document_digits() != document {
                            return false;
                        }
                    }
                    if let Some(ref email) = query.email {
                        if p.email().as_str() != email {
                            return false;
                        }
                    }
                    if let Some(person_type) = query.person_type {
                        if p.person_type() != person_type {
                            return false;
                        }
                    }
                    true
                })
                .cloned()
                .collect();

            // Stable order for pagination
            results.sort_by_key(|p| *p.id().as_uuid());

            if let Some(offset) = query.offset {
                results = results.into_iter().skip(offset as usize).collect();
            }
            if let Some(limit) = query.limit {
                results = results.into_iter().take(limit as usize).collect();
            }

            Ok(results)
        }

        async fn insert_partner(
            &self,
            partner: &Partner,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            let mut partners = self.partners.write().await;
            if partners.contains_key(&partner.id()) {
                return Err(PortError::conflict(format!(
                    "partner {} already inserted",
                    partner.id()
                )));
            }
            if partners.values().any(|p| Self::collides(p, partner)) {
                return Err(PortError::conflict(
                    "a partner with the same document or email already exists",
                ));
            }
            partners.insert(partner.id(), partner.clone());
            Ok(())
        }

        async fn update_partner(
            &self,
            partner: &Partner,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            let mut partners = self.partners.write().await;
            if !partners.contains_key(&partner.id()) {
                return Err(PortError::not_found("Partner", partner.id()));
            }
            if partners.values().any(|p| Self::collides(p, partner)) {
                return Err(PortError::conflict(
                    "a partner with the same document or email already exists",
                ));
            }
            partners.insert(partner.id(), partner.clone());
            Ok(())
        }

        async fn delete_partner(
            &self,
            id: PartnerId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            let mut partners = self.partners.write().await;
            partners
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Partner", id))
        }

        async fn document_exists(
            &self,
            digits: &str,
            _metadata: Option<OperationMetadata>,
        ) -> Result<bool, PortError> {
            let partners = self.partners.read().await;
            Ok(partners.values().any(|p| p.document_digits() == digits))
        }

        async fn email_exists(
            &self,
            email: &str,
            _metadata: Option<OperationMetadata>,
        ) -> Result<bool, PortError> {
            let partners = self.partners.read().await;
            Ok(partners.values().any(|p| p.email().as_str() == email))
        }
    }
}
