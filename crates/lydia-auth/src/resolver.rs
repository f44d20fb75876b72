//! Mapping validated claims to a live account.

use std::fmt;
use std::sync::Arc;

use lydia_models::{Account, AccountId};

use crate::claims::Claims;
use crate::error::AuthError;
use crate::store::AccountStore;

/// Loads the account named by a token's subject and checks it may still act.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn AccountStore>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// The only step of the chain that performs I/O.
    pub async fn resolve(&self, claims: &Claims) -> Result<Account, AuthError> {
        let id = AccountId::new(claims.sub.as_str());

        let account = self
            .store
            .find_account_by_id(&id)
            .await
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::AccountNotFound)?;

        if !account.active {
            return Err(AuthError::AccountDisabled);
        }

        Ok(account)
    }
}

impl fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryAccountStore, account};
    use lydia_models::Role;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[tokio::test]
    async fn test_resolves_active_account() {
        let store = Arc::new(InMemoryAccountStore::new());
        store.insert(account("u1", Role::Manager)).await;

        let resolved = IdentityResolver::new(store.clone())
            .resolve(&claims("u1"))
            .await
            .unwrap();

        assert_eq!(resolved.id, AccountId::new("u1"));
        assert_eq!(resolved.role, Role::Manager);
        assert_eq!(store.lookups(), 1);
    }

    #[tokio::test]
    async fn test_missing_account() {
        let store = Arc::new(InMemoryAccountStore::new());

        let result = IdentityResolver::new(store).resolve(&claims("ghost")).await;
        assert!(matches!(result, Err(AuthError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_inactive_account() {
        let store = Arc::new(InMemoryAccountStore::new());
        let mut admin = account("u1", Role::Admin);
        admin.active = false;
        store.insert(admin).await;

        let result = IdentityResolver::new(store).resolve(&claims("u1")).await;
        assert!(matches!(result, Err(AuthError::AccountDisabled)));
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let store = Arc::new(InMemoryAccountStore::new());
        store.insert(account("u1", Role::User)).await;
        store.set_unavailable(true);

        let result = IdentityResolver::new(store).resolve(&claims("u1")).await;
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
