use std::env;

use crate::env_or;

/// Attributes of the cookie that carries the access token for browser clients.
#[derive(Clone, Debug)]
pub struct CookieConfig {
    pub name: String,
    /// Cookie lifetime in seconds
    pub max_age: i64,
    /// Only send over HTTPS
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "token".to_string(),
            max_age: 24 * 60 * 60,
            secure: false,
        }
    }
}

impl CookieConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let production = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Self {
            name: env::var("AUTH_COOKIE_NAME").unwrap_or(defaults.name),
            max_age: env_or("AUTH_COOKIE_MAX_AGE", defaults.max_age),
            secure: production,
        }
    }
}
