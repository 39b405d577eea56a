//! External lookup adapters
//!
//! The registration form pre-fills address fields from a postal-code lookup
//! (ViaCEP) and company fields from a tax-registry lookup (ReceitaWS). The
//! domain core never calls these services itself: whatever they return is
//! ordinary untrusted input that flows back through the same factories as
//! hand-typed form fields.
//!
//! The adapters here keep the services' response shapes and error mapping
//! behind port traits. The transport is simulated from a preloaded record
//! set; a production build would put an HTTP client behind the same
//! `fetch` seam.
//!
//! # Error Handling
//!
//! External API errors are mapped to `PortError` variants:
//! - unknown zip/CNPJ -> `PortError::NotFound`
//! - 429 -> `PortError::RateLimited`
//! - 5xx -> `PortError::ServiceUnavailable`
//! - timeouts -> `PortError::Timeout`

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use core_kernel::{
    AdapterHealth, CircuitBreakerConfig, DomainPort, HealthCheckable, HealthCheckResult,
    OperationMetadata, PortError,
};

use crate::address::AddressInput;

/// Configuration for the external lookup adapters
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL of the lookup API (e.g. "https://viacep.com.br/ws")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Number of retry attempts for failed requests
    pub retry_attempts: u32,

    /// Circuit breaker configuration
    pub circuit_breaker: Option<CircuitBreakerConfig>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 30,
            retry_attempts: 3,
            circuit_breaker: Some(CircuitBreakerConfig::default()),
        }
    }
}

/// Circuit breaker state for fault tolerance
#[derive(Debug)]
struct CircuitBreaker {
    config: CircuitBreakerConfig,
    failure_count: AtomicU64,
    success_count: AtomicU64,
    is_open: AtomicBool,
    last_failure_time: RwLock<Option<Instant>>,
}

impl CircuitBreaker {
    fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            failure_count: AtomicU64::new(0),
            success_count: AtomicU64::new(0),
            is_open: AtomicBool::new(false),
            last_failure_time: RwLock::new(None),
        }
    }

    async fn is_available(&self) -> bool {
        if !self.is_open.load(Ordering::Relaxed) {
            return true;
        }

        // Check if timeout has elapsed
        let last_failure = self.last_failure_time.read().await;
        if let Some(time) = *last_failure {
            if time.elapsed() > Duration::from_secs(self.config.reset_timeout_secs) {
                // Half-open state: allow one request through
                return true;
            }
        }

        false
    }

    fn record_success(&self) {
        self.failure_count.store(0, Ordering::Relaxed);
        let success = self.success_count.fetch_add(1, Ordering::Relaxed) + 1;
        if success >= self.config.success_threshold as u64 {
            self.is_open.store(false, Ordering::Relaxed);
            self.success_count.store(0, Ordering::Relaxed);
        }
    }

    async fn record_failure(&self, service: &str) {
        self.success_count.store(0, Ordering::Relaxed);
        let failures = self.failure_count.fetch_add(1, Ordering::Relaxed) + 1;
        if failures >= self.config.failure_threshold as u64 {
            if !self.is_open.swap(true, Ordering::Relaxed) {
                warn!("circuit breaker opened for {} after {} failures", service, failures);
            }
            *self.last_failure_time.write().await = Some(Instant::now());
        }
    }
}

/// Raw address fields as returned by the postal-code service
///
/// Everything is an untrusted string; [`PostalAddressRecord::into_address_input`]
/// hands the fields to the same validation the form fields go through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddressRecord {
    pub zip_code: String,
    pub state: String,
    pub city: String,
    pub street: String,
    pub neighborhood: String,
    pub complement: Option<String>,
}

impl PostalAddressRecord {
    /// Converts the record into address input, leaving the number blank
    /// for the user to fill in
    pub fn into_address_input(self, number: impl Into<String>) -> AddressInput {
        AddressInput {
            zip_code: self.zip_code,
            state: self.state,
            city: self.city,
            street: self.street,
            number: number.into(),
            neighborhood: self.neighborhood,
            complement: self.complement,
        }
    }
}

/// Raw company fields as returned by the tax-registry service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyRecord {
    pub cnpj: String,
    pub company_name: String,
    pub trade_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub zip_code: Option<String>,
}

/// Port for postal-code (CEP) lookups
#[async_trait]
pub trait PostalLookupPort: DomainPort {
    /// Looks up the address registered for a zip code
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` for unknown zip codes, transient variants for
    /// transport failures.
    async fn lookup_zip(
        &self,
        zip_code: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<PostalAddressRecord, PortError>;
}

/// Port for tax-registry (CNPJ) lookups
#[async_trait]
pub trait CompanyLookupPort: DomainPort {
    /// Looks up the company registered for a CNPJ
    async fn lookup_cnpj(
        &self,
        cnpj: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<CompanyRecord, PortError>;
}

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Postal-code lookup adapter
///
/// Keyed by the zip code's digits, so masked (`01310-100`) and bare
/// (`01310100`) inputs hit the same record.
#[derive(Debug)]
pub struct PostalLookupAdapter {
    config: LookupConfig,
    circuit_breaker: Option<Arc<CircuitBreaker>>,
    records: RwLock<HashMap<String, PostalAddressRecord>>,
}

impl PostalLookupAdapter {
    /// Creates a new adapter with an empty record set
    pub fn new(config: LookupConfig) -> Self {
        let circuit_breaker = config
            .circuit_breaker
            .clone()
            .map(|cb| Arc::new(CircuitBreaker::new(cb)));
        Self {
            config,
            circuit_breaker,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a new adapter preloaded with records
    pub fn with_records(config: LookupConfig, records: Vec<PostalAddressRecord>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            map.insert(digits_of(&record.zip_code), record);
        }
        let mut adapter = Self::new(config);
        adapter.records = RwLock::new(map);
        adapter
    }

    /// Returns the base URL of the postal service
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Checks if the circuit breaker is open (blocking requests)
    pub async fn is_circuit_open(&self) -> bool {
        if let Some(ref cb) = self.circuit_breaker {
            !cb.is_available().await
        } else {
            false
        }
    }

    async fn fetch(&self, zip_digits: &str) -> Result<PostalAddressRecord, PortError> {
        if let Some(ref cb) = self.circuit_breaker {
            if !cb.is_available().await {
                return Err(PortError::ServiceUnavailable {
                    service: "postal lookup circuit breaker is open".to_string(),
                });
            }
        }

        // Simulated transport; a production build would issue the HTTP
        // request here and map status codes per the module docs.
        let result = self
            .records
            .read()
            .await
            .get(zip_digits)
            .cloned()
            .ok_or_else(|| PortError::not_found("PostalAddress", zip_digits));

        if let Some(ref cb) = self.circuit_breaker {
            match &result {
                // An unknown zip is a successful round-trip, not an outage
                Ok(_) | Err(PortError::NotFound { .. }) => cb.record_success(),
                Err(_) => cb.record_failure("postal lookup").await,
            }
        }

        result
    }
}

impl DomainPort for PostalLookupAdapter {}

#[async_trait]
impl PostalLookupPort for PostalLookupAdapter {
    async fn lookup_zip(
        &self,
        zip_code: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<PostalAddressRecord, PortError> {
        let zip_digits = digits_of(zip_code);
        if zip_digits.is_empty() {
            return Err(PortError::validation_field("zip code has no digits", "zip_code"));
        }
        debug!("looking up zip code {}", zip_digits);
        self.fetch(&zip_digits).await
    }
}

#[async_trait]
impl HealthCheckable for PostalLookupAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let status = if self.is_circuit_open().await {
            AdapterHealth::Degraded
        } else {
            AdapterHealth::Healthy
        };
        HealthCheckResult {
            adapter_id: "postal-lookup".to_string(),
            status,
            latency_ms: 0,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }
}

/// Tax-registry lookup adapter, keyed by CNPJ digits
#[derive(Debug)]
pub struct CompanyLookupAdapter {
    config: LookupConfig,
    circuit_breaker: Option<Arc<CircuitBreaker>>,
    records: RwLock<HashMap<String, CompanyRecord>>,
}

impl CompanyLookupAdapter {
    /// Creates a new adapter with an empty record set
    pub fn new(config: LookupConfig) -> Self {
        let circuit_breaker = config
            .circuit_breaker
            .clone()
            .map(|cb| Arc::new(CircuitBreaker::new(cb)));
        Self {
            config,
            circuit_breaker,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a new adapter preloaded with records
    pub fn with_records(config: LookupConfig, records: Vec<CompanyRecord>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            map.insert(digits_of(&record.cnpj), record);
        }
        let mut adapter = Self::new(config);
        adapter.records = RwLock::new(map);
        adapter
    }

    /// Returns the base URL of the registry service
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Checks if the circuit breaker is open (blocking requests)
    pub async fn is_circuit_open(&self) -> bool {
        if let Some(ref cb) = self.circuit_breaker {
            !cb.is_available().await
        } else {
            false
        }
    }

    async fn fetch(&self, cnpj_digits: &str) -> Result<CompanyRecord, PortError> {
        if let Some(ref cb) = self.circuit_breaker {
            if !cb.is_available().await {
                return Err(PortError::ServiceUnavailable {
                    service: "company lookup circuit breaker is open".to_string(),
                });
            }
        }

        let result = self
            .records
            .read()
            .await
            .get(cnpj_digits)
            .cloned()
            .ok_or_else(|| PortError::not_found("Company", cnpj_digits));

        if let Some(ref cb) = self.circuit_breaker {
            match &result {
                Ok(_) | Err(PortError::NotFound { .. }) => cb.record_success(),
                Err(_) => cb.record_failure("company lookup").await,
            }
        }

        result
    }
}

impl DomainPort for CompanyLookupAdapter {}

#[async_trait]
impl CompanyLookupPort for CompanyLookupAdapter {
    async fn lookup_cnpj(
        &self,
        cnpj: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<CompanyRecord, PortError> {
        let cnpj_digits = digits_of(cnpj);
        if cnpj_digits.is_empty() {
            return Err(PortError::validation_field("CNPJ has no digits", "cnpj"));
        }
        debug!("looking up CNPJ {}", cnpj_digits);
        self.fetch(&cnpj_digits).await
    }
}

#[async_trait]
impl HealthCheckable for CompanyLookupAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let status = if self.is_circuit_open().await {
            AdapterHealth::Degraded
        } else {
            AdapterHealth::Healthy
        };
        HealthCheckResult {
            adapter_id: "company-lookup".to_string(),
            status,
            latency_ms: 0,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }
}
