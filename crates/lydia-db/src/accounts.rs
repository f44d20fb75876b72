//! PostgreSQL-backed account store.

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lydia_auth::{AccountLogin, AccountStore};
use lydia_models::{Account, AccountId, Role};

/// Reads accounts from the `accounts` table.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    role: String,
    company_id: Option<String>,
    permissions: Vec<String>,
    active: bool,
    last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, sqlx::FromRow)]
struct LoginRow {
    #[sqlx(flatten)]
    account: AccountRow,
    password: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = anyhow::Error;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .with_context(|| format!("account {} has an unreadable role", row.id))?;

        Ok(Self {
            id: AccountId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role,
            company_id: row.company_id,
            permissions: row.permissions,
            active: row.active,
            last_login: row.last_login,
        })
    }
}

const ACCOUNT_COLUMNS: &str = "id, first_name, last_name, email, role, company_id, \
                               permissions, active, last_login";

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_account_by_id(&self, id: &AccountId) -> anyhow::Result<Option<Account>> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");
        let row = sqlx::query_as::<_, AccountRow>(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to load account")?;

        row.map(Account::try_from).transpose()
    }

    async fn find_login_by_email(&self, email: &str) -> anyhow::Result<Option<AccountLogin>> {
        let query = format!(
            "SELECT {ACCOUNT_COLUMNS}, password FROM accounts WHERE LOWER(email) = LOWER($1)"
        );
        let row = sqlx::query_as::<_, LoginRow>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to load account by email")?;

        row.map(|row| {
            Ok(AccountLogin {
                account: Account::try_from(row.account)?,
                password_hash: row.password,
            })
        })
        .transpose()
    }

    async fn record_login(&self, id: &AccountId, at: DateTime<Utc>) -> anyhow::Result<()> {
        sqlx::query("UPDATE accounts SET last_login = $2, updated_at = NOW() WHERE id = $1")
            .bind(id.as_str())
            .bind(at)
            .execute(&self.pool)
            .await
            .context("Failed to record login")?;
        Ok(())
    }

    async fn find_password_hash(&self, id: &AccountId) -> anyhow::Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password FROM accounts WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to load password hash")
    }

    async fn update_password(&self, id: &AccountId, password_hash: &str) -> anyhow::Result<()> {
        sqlx::query("UPDATE accounts SET password = $2, updated_at = NOW() WHERE id = $1")
            .bind(id.as_str())
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .context("Failed to update password")?;
        Ok(())
    }
}
