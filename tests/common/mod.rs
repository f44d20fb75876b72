use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::Utc;
use http_body_util::BodyExt;
use lydia::lydia_auth::testing::{InMemoryAccountStore, account};
use lydia::lydia_auth::{Claims, TokenIssuer};
use lydia::lydia_config::{CookieConfig, CorsConfig, JwtConfig};
use lydia::lydia_core::hash_password;
use lydia::lydia_models::{Account, AccountId, Role};
use lydia::router::init_router;
use lydia::state::AppState;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
        leeway: 0,
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryAccountStore>,
    pub issuer: TokenIssuer,
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(InMemoryAccountStore::new());
    let state = AppState::new(
        jwt_config(),
        CookieConfig::default(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        store.clone(),
    );

    TestApp {
        router: init_router(state),
        store,
        issuer: TokenIssuer::new(&jwt_config()),
    }
}

/// Active account with a company and optional permissions.
#[allow(dead_code)]
pub fn test_account(id: &str, role: Role, company: Option<&str>, permissions: &[&str]) -> Account {
    let mut account = account(id, role);
    account.company_id = company.map(str::to_string);
    account.permissions = permissions.iter().map(|p| p.to_string()).collect();
    account
}

#[allow(dead_code)]
pub async fn insert_with_password(app: &TestApp, account: Account, password: &str) {
    let hash = hash_password(password).unwrap();
    app.store.insert_with_password(account, hash).await;
}

#[allow(dead_code)]
pub fn token_for(app: &TestApp, id: &str) -> String {
    app.issuer.issue(&AccountId::new(id)).unwrap()
}

#[allow(dead_code)]
pub fn expired_token_for(app: &TestApp, id: &str) -> String {
    let now = Utc::now().timestamp();
    app.issuer
        .sign(&Claims {
            sub: id.to_string(),
            iat: now - 7200,
            exp: now - 3600,
        })
        .unwrap()
}

#[allow(dead_code)]
pub fn foreign_token_for(id: &str) -> String {
    TokenIssuer::new(&JwtConfig {
        secret: "some-other-deployment".to_string(),
        ..jwt_config()
    })
    .issue(&AccountId::new(id))
    .unwrap()
}

#[allow(dead_code)]
pub fn get_with_bearer(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn get_with_cookie(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("token={token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
