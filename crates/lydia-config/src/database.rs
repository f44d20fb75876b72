use std::env;

use crate::env_or;

/// PostgreSQL connection settings.
///
/// `url` is `None` when `DATABASE_URL` is unset; the caller decides whether
/// that is fatal.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5),
        }
    }
}
