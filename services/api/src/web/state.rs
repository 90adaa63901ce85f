//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::adapters::FixedLatency;
use crate::config::Config;
use astrology_core::ports::{AccountRepository, LatencyPolicy, PortResult, SessionStore};
use astrology_core::{AccountService, AstrologyService, InMemoryAccountRepository};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// The service sits behind one mutex: there is a single active session per
/// process, and overlapping requests run one after another so each completed
/// reading uses up exactly one request.
pub struct AppState {
    pub service: Mutex<AstrologyService<StdRng>>,
}

impl AppState {
    /// Builds the account table, latency policy and random source described by
    /// `config`, then restores any persisted session from `sessions`.
    pub async fn build(config: &Config, sessions: Arc<dyn SessionStore>) -> PortResult<Self> {
        let repo: Arc<dyn AccountRepository> = if config.seed_demo_account {
            Arc::new(InMemoryAccountRepository::with_demo_account())
        } else {
            Arc::new(InMemoryAccountRepository::new())
        };

        let latency: Arc<dyn LatencyPolicy> =
            Arc::new(FixedLatency::new(config.auth_latency, config.reading_latency));

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut accounts = AccountService::new(repo, sessions, latency.clone());
        if let Some(account) = accounts.restore().await? {
            info!("Resuming session for {}", account.email);
        }

        Ok(Self {
            service: Mutex::new(AstrologyService::new(accounts, latency, rng)),
        })
    }
}
