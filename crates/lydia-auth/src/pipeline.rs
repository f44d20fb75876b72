//! The full authentication chain as one value.

use std::sync::Arc;

use lydia_config::JwtConfig;
use lydia_models::Account;
use tracing::instrument;

use crate::credential::{CredentialSources, extract_credential};
use crate::error::AuthError;
use crate::guards::{Guard, RouteParams};
use crate::jwt::TokenValidator;
use crate::resolver::IdentityResolver;
use crate::store::AccountStore;

/// Extract, validate, resolve and guard, stopping at the first failure.
///
/// Cloning is cheap; the validator keys and the store handle are shared.
#[derive(Debug, Clone)]
pub struct AuthPipeline {
    validator: TokenValidator,
    resolver: IdentityResolver,
}

impl AuthPipeline {
    pub fn new(validator: TokenValidator, resolver: IdentityResolver) -> Self {
        Self {
            validator,
            resolver,
        }
    }

    pub fn from_config(config: &JwtConfig, store: Arc<dyn AccountStore>) -> Self {
        Self::new(TokenValidator::new(config), IdentityResolver::new(store))
    }

    /// Runs extraction, validation and resolution.
    ///
    /// The store is only consulted once a credential has been found and its
    /// signature and expiry check out.
    #[instrument(skip_all, err(level = "debug"))]
    pub async fn authenticate(&self, sources: CredentialSources) -> Result<Account, AuthError> {
        let credential = extract_credential(sources).ok_or(AuthError::NoCredential)?;
        let claims = self.validator.validate(&credential)?;
        self.resolver.resolve(&claims).await
    }

    /// Runs [`authenticate`](Self::authenticate) and then `guard`.
    #[instrument(skip_all, fields(guard = guard.name()))]
    pub async fn authorize(
        &self,
        sources: CredentialSources,
        guard: &Guard,
        params: &RouteParams,
    ) -> Result<Account, AuthError> {
        let account = self.authenticate(sources).await?;
        guard.check(&account, params)?;

        tracing::debug!(account_id = %account.id, role = %account.role, "Request authorized");
        Ok(account)
    }
}
