use std::env;

use crate::env_or;

/// Secret used when `JWT_SECRET` is not set. Only suitable for local runs.
pub const DEVELOPMENT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
    /// Clock skew tolerated when checking `exp`, in seconds
    pub leeway: u64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEVELOPMENT_SECRET.to_string()),
            access_token_expiry: env_or("JWT_ACCESS_EXPIRY", 86400), // 24 hours
            leeway: env_or("JWT_LEEWAY", 0),
        }
    }

    pub fn uses_development_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_secret_detection() {
        let config = JwtConfig {
            secret: DEVELOPMENT_SECRET.to_string(),
            access_token_expiry: 3600,
            leeway: 0,
        };
        assert!(config.uses_development_secret());

        let config = JwtConfig {
            secret: "a-real-secret".to_string(),
            ..config
        };
        assert!(!config.uses_development_secret());
    }
}
