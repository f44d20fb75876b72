use chrono::Utc;
use lydia_auth::{AccountStore, TokenIssuer};
use lydia_core::{AppError, hash_password, verify_password};
use lydia_models::{Account, ChangePasswordRequest, LoginRequest, LoginResponse};
use tracing::instrument;

use crate::metrics::{
    track_jwt_issued, track_login_failure, track_login_success, track_password_change,
};

const INVALID_LOGIN: &str = "invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Verifies email and password and issues an access token.
    ///
    /// Unknown email and wrong password give the same answer.
    #[instrument(skip(accounts, issuer, dto), fields(email = %dto.email))]
    pub async fn login(
        accounts: &dyn AccountStore,
        issuer: &TokenIssuer,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let login = match accounts.find_login_by_email(&dto.email).await? {
            Some(login) => login,
            None => {
                track_login_failure("unknown_email");
                return Err(AppError::unauthorized(INVALID_LOGIN));
            }
        };

        if !verify_password(&dto.password, &login.password_hash)? {
            track_login_failure("wrong_password");
            return Err(AppError::unauthorized(INVALID_LOGIN));
        }

        let mut account = login.account;
        if !account.active {
            track_login_failure("account_disabled");
            return Err(AppError::unauthorized("account disabled"));
        }

        let now = Utc::now();
        accounts.record_login(&account.id, now).await?;
        account.last_login = Some(now);

        let token = issuer.issue(&account.id)?;
        track_jwt_issued();
        track_login_success(account.role.as_str());

        tracing::info!(account_id = %account.id, role = %account.role, "Login succeeded");

        Ok(LoginResponse {
            success: true,
            token,
            account,
        })
    }

    /// Replaces the password of an authenticated account and issues a fresh
    /// access token for it.
    #[instrument(skip(accounts, issuer, account, dto), fields(account_id = %account.id))]
    pub async fn change_password(
        accounts: &dyn AccountStore,
        issuer: &TokenIssuer,
        account: Account,
        dto: ChangePasswordRequest,
    ) -> Result<LoginResponse, AppError> {
        let current_hash = accounts
            .find_password_hash(&account.id)
            .await?
            .ok_or_else(|| AppError::unauthorized("current password is incorrect"))?;

        if !verify_password(&dto.current_password, &current_hash)? {
            track_password_change("wrong_password");
            return Err(AppError::unauthorized("current password is incorrect"));
        }

        let new_hash = hash_password(&dto.new_password)?;
        accounts.update_password(&account.id, &new_hash).await?;

        let token = issuer.issue(&account.id)?;
        track_jwt_issued();
        track_password_change("success");

        tracing::info!(account_id = %account.id, "Password changed");

        Ok(LoginResponse {
            success: true,
            token,
            account,
        })
    }
}
