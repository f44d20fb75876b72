//! Port to the persistence layer holding accounts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lydia_models::{Account, AccountId};

/// An account together with its password hash, only used by login.
#[derive(Debug, Clone)]
pub struct AccountLogin {
    pub account: Account,
    pub password_hash: String,
}

/// Read access to accounts, plus the writes login and password change need.
///
/// Implementations must be idempotent for reads. Any `Err` is treated as an
/// infrastructure failure, never as "not found".
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_account_by_id(&self, id: &AccountId) -> anyhow::Result<Option<Account>>;

    async fn find_login_by_email(&self, email: &str) -> anyhow::Result<Option<AccountLogin>>;

    async fn record_login(&self, id: &AccountId, at: DateTime<Utc>) -> anyhow::Result<()>;

    async fn find_password_hash(&self, id: &AccountId) -> anyhow::Result<Option<String>>;

    async fn update_password(&self, id: &AccountId, password_hash: &str) -> anyhow::Result<()>;
}
