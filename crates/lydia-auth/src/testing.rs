//! In-memory [`AccountStore`] for tests.
//!
//! Counts every `find_account_by_id` call so tests can assert which steps of
//! the chain reached the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lydia_models::{Account, AccountId, Role};
use tokio::sync::RwLock;

use crate::store::{AccountLogin, AccountStore};

/// Builds an active account with no company and no permissions.
pub fn account(id: &str, role: Role) -> Account {
    Account {
        id: AccountId::new(id),
        first_name: "Test".to_string(),
        last_name: "Account".to_string(),
        email: format!("{id}@lydia.test"),
        role,
        company_id: None,
        permissions: Vec::new(),
        active: true,
        last_login: None,
    }
}

#[derive(Default)]
struct Entry {
    account: Option<Account>,
    password_hash: Option<String>,
}

#[derive(Default)]
pub struct InMemoryAccountStore {
    entries: RwLock<HashMap<AccountId, Entry>>,
    lookups: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an account, keeping any stored password hash.
    pub async fn insert(&self, account: Account) {
        let mut entries = self.entries.write().await;
        let id = account.id.clone();
        entries.entry(id).or_default().account = Some(account);
    }

    pub async fn insert_with_password(&self, account: Account, password_hash: impl Into<String>) {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(account.id.clone()).or_default();
        entry.account = Some(account);
        entry.password_hash = Some(password_hash.into());
    }

    pub async fn get(&self, id: &AccountId) -> Option<Account> {
        self.entries
            .read()
            .await
            .get(id)
            .and_then(|e| e.account.clone())
    }

    /// Number of `find_account_by_id` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Makes every call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> anyhow::Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            anyhow::bail!("account store unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_account_by_id(&self, id: &AccountId) -> anyhow::Result<Option<Account>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;
        Ok(self.get(id).await)
    }

    async fn find_login_by_email(&self, email: &str) -> anyhow::Result<Option<AccountLogin>> {
        self.ensure_available()?;
        let entries = self.entries.read().await;
        let login = entries.values().find_map(|entry| {
            let account = entry.account.as_ref()?;
            if !account.email.eq_ignore_ascii_case(email) {
                return None;
            }
            Some(AccountLogin {
                account: account.clone(),
                password_hash: entry.password_hash.clone()?,
            })
        });
        Ok(login)
    }

    async fn record_login(&self, id: &AccountId, at: DateTime<Utc>) -> anyhow::Result<()> {
        self.ensure_available()?;
        let mut entries = self.entries.write().await;
        if let Some(account) = entries.get_mut(id).and_then(|e| e.account.as_mut()) {
            account.last_login = Some(at);
        }
        Ok(())
    }

    async fn find_password_hash(&self, id: &AccountId) -> anyhow::Result<Option<String>> {
        self.ensure_available()?;
        let entries = self.entries.read().await;
        Ok(entries.get(id).and_then(|e| e.password_hash.clone()))
    }

    async fn update_password(&self, id: &AccountId, password_hash: &str) -> anyhow::Result<()> {
        self.ensure_available()?;
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get_mut(id) {
            entry.password_hash = Some(password_hash.to_string());
        }
        Ok(())
    }
}
