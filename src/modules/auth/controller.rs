use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use lydia_config::CookieConfig;
use lydia_core::AppError;
use lydia_models::{
    AccountResponse, ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse,
};
use tracing::instrument;
use utoipa::ToSchema;

use super::service::AuthService;
use crate::middleware::auth::CurrentAccount;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

fn session_cookie(config: &CookieConfig, value: String, max_age: i64) -> Cookie<'static> {
    Cookie::build((config.name.clone(), value))
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age))
        .build()
}

/// Login and receive an access token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, token also set as cookie", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials or account disabled", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let response = AuthService::login(state.accounts.as_ref(), &state.issuer, dto).await?;

    let cookie = session_cookie(
        &state.cookie_config,
        response.token.clone(),
        state.cookie_config.max_age,
    );
    Ok((jar.add(cookie), Json(response)))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, jar, account), fields(account_id = %account.0.id))]
pub async fn logout(
    State(state): State<AppState>,
    account: CurrentAccount,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let expired = session_cookie(&state.cookie_config, String::new(), 0);

    (
        jar.add(expired),
        Json(MessageResponse {
            success: true,
            message: "logged out".to_string(),
        }),
    )
}

/// Change the password and receive a fresh access token
#[utoipa::path(
    put,
    path = "/api/auth/password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed, new token also set as cookie", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized or wrong current password", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, jar, account, dto))]
pub async fn change_password(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<ChangePasswordRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let response =
        AuthService::change_password(state.accounts.as_ref(), &state.issuer, account, dto).await?;

    let cookie = session_cookie(
        &state.cookie_config,
        response.token.clone(),
        state.cookie_config.max_age,
    );
    Ok((jar.add(cookie), Json(response)))
}

/// Get the authenticated account
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current account", body = AccountResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn me(CurrentAccount(account): CurrentAccount) -> Json<AccountResponse> {
    Json(AccountResponse {
        success: true,
        account,
    })
}
