//! crates/astrology_core/src/store.rs
//!
//! The mock account table. Accounts live in memory for the lifetime of the
//! process and passwords are compared in plaintext; this is demo code, not
//! an authentication system.

use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::{Account, AccountRecord};
use crate::ports::{AccountRepository, PortError, PortResult};

/// Number of free readings granted to a new account.
pub const STARTING_REQUESTS: u32 = 3;

pub const DEMO_ACCOUNT_ID: &str = "1";
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_NAME: &str = "Demo User";

/// An `AccountRepository` backed by a vector guarded by a lock.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<AccountRecord>>,
}

impl InMemoryAccountRepository {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the demo account.
    pub fn with_demo_account() -> Self {
        let demo = AccountRecord {
            id: DEMO_ACCOUNT_ID.to_string(),
            email: DEMO_EMAIL.to_string(),
            name: DEMO_NAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
            requests_remaining: STARTING_REQUESTS,
        };
        Self {
            accounts: RwLock::new(vec![demo]),
        }
    }

    pub fn len(&self) -> PortResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> PortResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> PortResult<RwLockReadGuard<'_, Vec<AccountRecord>>> {
        self.accounts
            .read()
            .map_err(|_| PortError::Unexpected("account table lock poisoned".to_string()))
    }

    fn write(&self) -> PortResult<RwLockWriteGuard<'_, Vec<AccountRecord>>> {
        self.accounts
            .write()
            .map_err(|_| PortError::Unexpected("account table lock poisoned".to_string()))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_credentials(&self, email: &str, password: &str) -> PortResult<Option<Account>> {
        Ok(self
            .read()?
            .iter()
            .find(|r| r.email == email && r.password == password)
            .map(AccountRecord::to_account))
    }

    async fn email_exists(&self, email: &str) -> PortResult<bool> {
        Ok(self.read()?.iter().any(|r| r.email == email))
    }

    async fn insert(&self, email: &str, password: &str, name: &str) -> PortResult<Account> {
        // Check and push under one write lock so two inserts can't both pass the check.
        let mut accounts = self.write()?;
        if accounts.iter().any(|r| r.email == email) {
            return Err(PortError::Conflict(format!("email {email} is already registered")));
        }

        let record = AccountRecord {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            requests_remaining: STARTING_REQUESTS,
        };
        let account = record.to_account();
        accounts.push(record);
        Ok(account)
    }

    async fn decrement_requests(&self, account_id: &str) -> PortResult<Option<Account>> {
        let mut accounts = self.write()?;
        Ok(accounts.iter_mut().find(|r| r.id == account_id).map(|r| {
            r.requests_remaining = r.requests_remaining.saturating_sub(1);
            r.to_account()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_account_can_log_in() {
        let repo = InMemoryAccountRepository::with_demo_account();
        let account = repo
            .find_by_credentials(DEMO_EMAIL, DEMO_PASSWORD)
            .await
            .unwrap()
            .expect("demo account");
        assert_eq!(account.id, DEMO_ACCOUNT_ID);
        assert_eq!(account.requests_remaining, STARTING_REQUESTS);
    }

    #[tokio::test]
    async fn wrong_password_or_unknown_email_finds_nothing() {
        let repo = InMemoryAccountRepository::with_demo_account();
        assert!(repo.find_by_credentials(DEMO_EMAIL, "nope").await.unwrap().is_none());
        assert!(repo
            .find_by_credentials("ghost@example.com", DEMO_PASSWORD)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_insert_fails_and_leaves_the_table_alone() {
        let repo = InMemoryAccountRepository::new();
        let first = repo.insert("a@b.c", "pw", "Aria").await.unwrap();
        assert_eq!(first.requests_remaining, 3);
        assert!(repo.email_exists("a@b.c").await.unwrap());

        let err = repo.insert("a@b.c", "other", "Someone").await.unwrap_err();
        assert!(matches!(err, PortError::Conflict(_)));
        assert_eq!(repo.len().unwrap(), 1);

        // The original password still works, the rejected one does not.
        assert!(repo.find_by_credentials("a@b.c", "pw").await.unwrap().is_some());
        assert!(repo.find_by_credentials("a@b.c", "other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn decrement_floors_at_zero() {
        let repo = InMemoryAccountRepository::new();
        let account = repo.insert("a@b.c", "pw", "Aria").await.unwrap();

        let mut seen = Vec::new();
        for _ in 0..4 {
            let updated = repo.decrement_requests(&account.id).await.unwrap().unwrap();
            seen.push(updated.requests_remaining);
        }
        assert_eq!(seen, vec![2, 1, 0, 0]);
    }

    #[tokio::test]
    async fn decrement_of_unknown_id_is_a_no_op() {
        let repo = InMemoryAccountRepository::with_demo_account();
        assert!(repo.decrement_requests("missing").await.unwrap().is_none());
        let demo = repo
            .find_by_credentials(DEMO_EMAIL, DEMO_PASSWORD)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(demo.requests_remaining, 3);
    }
}
