use std::fmt;
use std::sync::Arc;

use lydia_auth::{AccountStore, AuthPipeline, TokenIssuer};
use lydia_config::{CookieConfig, CorsConfig, DatabaseConfig, JwtConfig};
use lydia_db::{PgAccountStore, init_db_pool, run_migrations};

/// Shared, immutable state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: AuthPipeline,
    pub accounts: Arc<dyn AccountStore>,
    pub issuer: TokenIssuer,
    pub jwt_config: JwtConfig,
    pub cookie_config: CookieConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        jwt_config: JwtConfig,
        cookie_config: CookieConfig,
        cors_config: CorsConfig,
        accounts: Arc<dyn AccountStore>,
    ) -> Self {
        Self {
            pipeline: AuthPipeline::from_config(&jwt_config, accounts.clone()),
            issuer: TokenIssuer::new(&jwt_config),
            accounts,
            jwt_config,
            cookie_config,
            cors_config,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("pipeline", &self.pipeline)
            .field("issuer", &self.issuer)
            .field("cookie_config", &self.cookie_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_development_secret() {
        tracing::warn!("JWT_SECRET is not set, using the development secret");
    }

    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;

    Ok(AppState::new(
        jwt_config,
        CookieConfig::from_env(),
        CorsConfig::from_env(),
        Arc::new(PgAccountStore::new(pool)),
    ))
}
