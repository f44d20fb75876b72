use axum::Json;
use axum::extract::Path;
use lydia_core::permissions::DASHBOARD_ACCESS;
use lydia_models::Account;
use serde::Serialize;
use utoipa::ToSchema;

use crate::middleware::auth::CurrentAccount;
use crate::modules::auth::controller::ErrorResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessResponse {
    pub success: bool,
    /// Which access pattern admitted the caller
    pub scope: String,
    /// Company the grant applies to, for company-scoped probes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    pub account: Account,
}

impl AccessResponse {
    fn granted(scope: &str, company_id: Option<String>, account: Account) -> Json<Self> {
        Json(Self {
            success: true,
            scope: scope.to_string(),
            company_id,
            account,
        })
    }
}

/// Probe admin access
#[utoipa::path(
    get,
    path = "/api/admin/access",
    responses(
        (status = 200, description = "Caller is an admin", body = AccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn admin_access(CurrentAccount(account): CurrentAccount) -> Json<AccessResponse> {
    AccessResponse::granted("admin", None, account)
}

/// Probe platform staff access
#[utoipa::path(
    get,
    path = "/api/platform/access",
    responses(
        (status = 200, description = "Caller is an admin or superadmin", body = AccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn platform_access(CurrentAccount(account): CurrentAccount) -> Json<AccessResponse> {
    AccessResponse::granted("platform", None, account)
}

/// Probe management access to a company
#[utoipa::path(
    get,
    path = "/api/companies/{company_id}/access",
    params(("company_id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Caller may manage the company", body = AccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Insufficient company privilege", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn company_access(
    Path(company_id): Path<String>,
    CurrentAccount(account): CurrentAccount,
) -> Json<AccessResponse> {
    AccessResponse::granted("company", Some(company_id), account)
}

/// Probe membership of a company
#[utoipa::path(
    get,
    path = "/api/companies/{company_id}/membership",
    params(("company_id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Caller belongs to the company", body = AccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not a member", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn company_membership(
    Path(company_id): Path<String>,
    CurrentAccount(account): CurrentAccount,
) -> Json<AccessResponse> {
    AccessResponse::granted("company_member", Some(company_id), account)
}

/// Probe dashboard access
#[utoipa::path(
    get,
    path = "/api/dashboard/access",
    responses(
        (status = 200, description = "Caller may open the dashboard", body = AccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Insufficient dashboard privilege", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn dashboard_access(CurrentAccount(account): CurrentAccount) -> Json<AccessResponse> {
    AccessResponse::granted(DASHBOARD_ACCESS, None, account)
}
