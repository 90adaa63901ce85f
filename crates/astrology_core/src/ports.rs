//! crates/astrology_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of where accounts live, where the session is persisted,
//! and how much artificial latency is simulated.

use async_trait::async_trait;
use crate::domain::Account;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., the filesystem).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Returns the account whose email and password both match exactly.
    async fn find_by_credentials(&self, email: &str, password: &str) -> PortResult<Option<Account>>;

    async fn email_exists(&self, email: &str) -> PortResult<bool>;

    /// Inserts a new account with the starting request quota.
    /// Fails with `PortError::Conflict` if the email is already registered.
    async fn insert(&self, email: &str, password: &str, name: &str) -> PortResult<Account>;

    /// Decrements the remaining requests of an account, flooring at zero.
    /// Returns the updated account, or `None` if the id is unknown.
    async fn decrement_requests(&self, account_id: &str) -> PortResult<Option<Account>>;
}

/// A durable string key-value store, the equivalent of browser local storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> PortResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> PortResult<()>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> PortResult<()>;
}

/// The operations that get an artificial round-trip delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyKind {
    Auth,
    Reading,
}

#[async_trait]
pub trait LatencyPolicy: Send + Sync {
    /// Waits before the operation completes, to simulate a network round trip.
    async fn pause(&self, kind: LatencyKind);
}

/// A latency policy that returns immediately. Used by tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl LatencyPolicy for NoLatency {
    async fn pause(&self, _kind: LatencyKind) {}
}
