//! Core Kernel - Foundational types and utilities for the partner registration system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers
//! - Common error types
//! - Port abstractions for the hexagonal architecture

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::PartnerId;
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
    OperationMetadata, CircuitBreakerConfig,
};
