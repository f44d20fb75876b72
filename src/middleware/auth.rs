use anyhow::anyhow;
use axum::{
    body::{Body, HttpBody, to_bytes},
    extract::{FromRequestParts, RawPathParams, Request},
    http::{HeaderMap, header, request::Parts},
};
use axum_extra::extract::CookieJar;
use lydia_auth::{AuthError, CredentialSources, Guard, RouteParams};
use lydia_models::Account;

use crate::metrics::track_auth_rejection;
use crate::state::AppState;

/// Largest request body inspected for a `token` field.
const BODY_TOKEN_LIMIT: usize = 64 * 1024;

/// The account attached to the request by an auth layer.
///
/// Only available on routes behind one of the `require_*` layers in
/// [`crate::middleware::guard`].
///
/// # Example
///
/// ```ignore
/// use crate::middleware::auth::CurrentAccount;
///
/// async fn whoami(CurrentAccount(account): CurrentAccount) -> String {
///     account.full_name()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAccount>()
            .cloned()
            .ok_or_else(|| AuthError::Internal(anyhow!("route has no auth layer")))
    }
}

/// Runs the auth chain for `guard` and attaches the account to the request.
///
/// The body is only read when neither header nor cookie carry a credential
/// and its length is known to be within [`BODY_TOKEN_LIMIT`]. It is handed on
/// unchanged.
pub async fn authorize_request(
    state: &AppState,
    guard: &Guard,
    req: Request,
) -> Result<Request, AuthError> {
    let (mut parts, body) = req.into_parts();

    let mut sources = sources_from_headers(&parts.headers, &state.cookie_config.name);
    let params = match RawPathParams::from_request_parts(&mut parts, state).await {
        Ok(raw) => RouteParams::from_pairs(raw.iter()),
        Err(_) => RouteParams::default(),
    };

    let body = if sources.needs_body() && is_json(&parts.headers) && fits_token_limit(&body) {
        let bytes = to_bytes(body, BODY_TOKEN_LIMIT)
            .await
            .map_err(|e| AuthError::Internal(anyhow!("Failed to read request body: {}", e)))?;
        sources.body = token_from_body(&bytes);
        Body::from(bytes)
    } else {
        body
    };

    let account = state
        .pipeline
        .authorize(sources, guard, &params)
        .await
        .inspect_err(|e| track_auth_rejection(e.kind()))?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentAccount(account));
    Ok(req)
}

pub fn sources_from_headers(headers: &HeaderMap, cookie_name: &str) -> CredentialSources {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let cookie = CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|c| c.value().to_string());

    CredentialSources {
        authorization,
        cookie,
        body: None,
    }
}

/// Larger or unsized bodies are left unread and carry no credential.
fn fits_token_limit(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|len| len <= BODY_TOKEN_LIMIT as u64)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

fn token_from_body(bytes: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    value.get("token")?.as_str().map(str::to_string)
}
