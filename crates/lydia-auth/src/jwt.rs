//! Signing and verifying access tokens.
//!
//! Both halves take the secret from a [`JwtConfig`] at construction, so tests
//! can run several issuers with distinct secrets side by side.
//!
//! # Example
//!
//! ```ignore
//! use lydia_auth::{TokenIssuer, TokenValidator, Credential};
//!
//! let issuer = TokenIssuer::new(&jwt_config);
//! let validator = TokenValidator::new(&jwt_config);
//!
//! let token = issuer.issue(&account.id)?;
//! let claims = validator.validate(&Credential::new(token))?;
//! assert_eq!(claims.sub, account.id.as_str());
//! ```

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use lydia_config::JwtConfig;
use lydia_models::AccountId;

use crate::claims::Claims;
use crate::credential::Credential;
use crate::error::AuthError;

/// Creates signed access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    lifetime_secs: i64,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.secret.as_bytes()),
            lifetime_secs: config.access_token_expiry,
        }
    }

    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime_secs
    }

    /// Issues a token for `subject` valid from now for the configured lifetime.
    pub fn issue(&self, subject: &AccountId) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        self.sign(&Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.lifetime_secs,
        })
    }

    /// Signs arbitrary claims as-is.
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.key).map_err(|e| {
            AuthError::Internal(anyhow::anyhow!("Failed to create token: {}", e))
        })
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("lifetime_secs", &self.lifetime_secs)
            .finish_non_exhaustive()
    }
}

/// Verifies signature and expiry of access tokens.
#[derive(Clone)]
pub struct TokenValidator {
    key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Returns the claims of a well-formed, correctly signed, unexpired token.
    ///
    /// Every failure maps to [`AuthError::InvalidCredential`]; the precise
    /// reason only goes to the debug log.
    pub fn validate(&self, credential: &Credential) -> Result<Claims, AuthError> {
        decode::<Claims>(credential.as_str(), &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Credential failed validation");
                AuthError::InvalidCredential
            })
    }
}

impl fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenValidator")
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry: 3600,
            leeway: 0,
        }
    }

    #[test]
    fn test_issue_then_validate() {
        let config = config("test_secret_key_for_testing_purposes");
        let token = TokenIssuer::new(&config).issue(&AccountId::new("u1")).unwrap();

        let claims = TokenValidator::new(&config)
            .validate(&Credential::new(token))
            .unwrap();

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = TokenIssuer::new(&config("secret-a"))
            .issue(&AccountId::new("u1"))
            .unwrap();

        let result = TokenValidator::new(&config("secret-b")).validate(&Credential::new(token));
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_expired_is_invalid() {
        let config = config("secret");
        let now = Utc::now().timestamp();
        let token = TokenIssuer::new(&config)
            .sign(&Claims {
                sub: "u1".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        let result = TokenValidator::new(&config).validate(&Credential::new(token));
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[test]
    fn test_leeway_accepts_recently_expired() {
        let mut config = config("secret");
        config.leeway = 120;
        let now = Utc::now().timestamp();
        let token = TokenIssuer::new(&config)
            .sign(&Claims {
                sub: "u1".to_string(),
                iat: now - 600,
                exp: now - 30,
            })
            .unwrap();

        assert!(TokenValidator::new(&config)
            .validate(&Credential::new(token))
            .is_ok());
    }

    #[test]
    fn test_malformed_is_invalid() {
        let validator = TokenValidator::new(&config("secret"));
        for token in ["", "not-a-jwt", "a.b.c", "header.payload.", ".payload.signature"] {
            let result = validator.validate(&Credential::new(token));
            assert!(matches!(result, Err(AuthError::InvalidCredential)), "{token}");
        }
    }

    #[test]
    fn test_other_algorithm_is_invalid() {
        let config = config("secret");
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "u1".to_string(),
            iat: now,
            exp: now + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let result = TokenValidator::new(&config).validate(&Credential::new(token));
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }
}
