//! crates/astrology_core/src/accounts.rs
//!
//! Login, signup and logout against the account repository, plus the single
//! active session that is mirrored to the session store.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::Account;
use crate::ports::{
    AccountRepository, LatencyKind, LatencyPolicy, PortError, PortResult, SessionStore,
};
use crate::session::{decode_session, encode_session, SESSION_KEY};

/// Why a login or signup was refused.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email already in use")]
    EmailAlreadyRegistered,
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),
}

pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
    sessions: Arc<dyn SessionStore>,
    latency: Arc<dyn LatencyPolicy>,
    current: Option<Account>,
}

impl AccountService {
    /// Creates a service with no active session. Call `restore` to pick up a
    /// persisted one.
    pub fn new(
        repo: Arc<dyn AccountRepository>,
        sessions: Arc<dyn SessionStore>,
        latency: Arc<dyn LatencyPolicy>,
    ) -> Self {
        Self {
            repo,
            sessions,
            latency,
            current: None,
        }
    }

    /// The logged-in account, if any.
    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    /// Loads the persisted session. Unreadable data is deleted and treated as
    /// logged out.
    pub async fn restore(&mut self) -> PortResult<Option<Account>> {
        let Some(raw) = self.sessions.get(SESSION_KEY).await? else {
            self.current = None;
            return Ok(None);
        };

        match decode_session(&raw) {
            Ok(account) => {
                info!(account_id = %account.id, "Restored stored session");
                self.current = Some(account.clone());
                Ok(Some(account))
            }
            Err(e) => {
                warn!("Failed to parse stored session, discarding it: {}", e);
                self.sessions.remove(SESSION_KEY).await?;
                self.current = None;
                Ok(None)
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<Account, AuthError> {
        self.latency.pause(LatencyKind::Auth).await;

        let Some(account) = self.repo.find_by_credentials(email, password).await? else {
            warn!("Login failed for {}", email);
            return Err(AuthError::InvalidCredentials);
        };

        self.set_session(account.clone()).await?;
        info!(account_id = %account.id, "Logged in as {}", account.name);
        Ok(account)
    }

    pub async fn signup(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, AuthError> {
        self.latency.pause(LatencyKind::Auth).await;

        if self.repo.email_exists(email).await? {
            warn!("Signup refused, {} is already registered", email);
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let account = match self.repo.insert(email, password, name).await {
            Ok(account) => account,
            Err(PortError::Conflict(_)) => return Err(AuthError::EmailAlreadyRegistered),
            Err(e) => return Err(e.into()),
        };

        self.set_session(account.clone()).await?;
        info!(account_id = %account.id, "Account created for {}", account.name);
        Ok(account)
    }

    pub async fn logout(&mut self) -> PortResult<()> {
        if let Some(account) = self.current.take() {
            info!(account_id = %account.id, "Logged out");
        }
        self.sessions.remove(SESSION_KEY).await
    }

    /// Uses up one reading for the active account.
    ///
    /// Does nothing without a session or when the quota is already zero. The
    /// session count always drops by one; the repository is only a mirror and
    /// may hold a different count after a restart reseeds it.
    pub async fn decrement_requests(&mut self) -> PortResult<Option<Account>> {
        let Some(current) = self.current.clone() else {
            return Ok(None);
        };
        if current.requests_remaining == 0 {
            return Ok(Some(current));
        }

        if self.repo.decrement_requests(&current.id).await?.is_none() {
            debug!(account_id = %current.id, "Account not in table, decrementing session only");
        }
        let updated = Account {
            requests_remaining: current.requests_remaining - 1,
            ..current
        };

        self.set_session(updated.clone()).await?;
        Ok(Some(updated))
    }

    async fn set_session(&mut self, account: Account) -> PortResult<()> {
        let raw = encode_session(&account).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.sessions.set(SESSION_KEY, &raw).await?;
        self.current = Some(account);
        Ok(())
    }
}
