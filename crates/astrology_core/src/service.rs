//! crates/astrology_core/src/service.rs
//!
//! Ties the account session to the reading generator: a reading is only
//! produced for a logged-in account with readings left, and each completed
//! reading uses up exactly one of them.

use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::accounts::AccountService;
use crate::domain::{Account, ReadingRequest, ReadingResult};
use crate::ports::{LatencyKind, LatencyPolicy, PortResult};
use crate::reading::generate_reading;

/// What happened to a reading request. None of these are errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadingOutcome {
    /// The reading, and the account after its quota was used.
    Ready {
        reading: ReadingResult,
        account: Account,
    },
    /// The account is out of readings and should be offered more.
    NoRequestsRemaining { account: Account },
    NotAuthenticated,
}

pub struct AstrologyService<R> {
    accounts: AccountService,
    latency: Arc<dyn LatencyPolicy>,
    rng: R,
}

impl<R: Rng + Send> AstrologyService<R> {
    pub fn new(accounts: AccountService, latency: Arc<dyn LatencyPolicy>, rng: R) -> Self {
        Self {
            accounts,
            latency,
            rng,
        }
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut AccountService {
        &mut self.accounts
    }

    /// Generates a reading for the logged-in account and uses up one request.
    ///
    /// An empty name in the request falls back to the account's name.
    pub async fn request_reading(&mut self, mut request: ReadingRequest) -> PortResult<ReadingOutcome> {
        let Some(account) = self.accounts.current().cloned() else {
            return Ok(ReadingOutcome::NotAuthenticated);
        };
        if account.requests_remaining == 0 {
            info!(account_id = %account.id, "No readings left");
            return Ok(ReadingOutcome::NoRequestsRemaining { account });
        }

        if request.name.is_empty() {
            request.name = account.name.clone();
        }

        self.latency.pause(LatencyKind::Reading).await;
        let reading = generate_reading(&request, &mut self.rng);
        debug!(
            sign = %reading.zodiac_sign,
            life_path = reading.life_path_number,
            "Generated reading"
        );

        let account = self
            .accounts
            .decrement_requests()
            .await?
            .unwrap_or(account);
        info!(
            account_id = %account.id,
            remaining = account.requests_remaining,
            "Reading complete"
        );

        Ok(ReadingOutcome::Ready { reading, account })
    }
}
