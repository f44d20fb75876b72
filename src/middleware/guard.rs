//! Route layers that run the auth chain with a fixed guard.
//!
//! Each function is meant for `axum::middleware::from_fn_with_state` and
//! responds with the [`AuthError`](lydia_auth::AuthError) body on rejection.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use lydia_auth::{Guard, RoleGate};

use crate::middleware::auth::authorize_request;
use crate::state::AppState;

async fn run_guarded(state: &AppState, guard: Guard, req: Request, next: Next) -> Response {
    match authorize_request(state, &guard, req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

/// Any active account.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::guard::require_auth;
///
/// let routes = Router::new()
///     .route("/me", get(me))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    run_guarded(&state, Guard::Authenticated, req, next).await
}

/// Role must be exactly `admin`.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    run_guarded(&state, Guard::AdminAccess, req, next).await
}

/// Admin, or a manager/admin of the route's `company_id`.
pub async fn require_company_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    run_guarded(&state, Guard::CompanyScopedAccess, req, next).await
}

/// Admin, or any account of the route's `company_id`.
pub async fn require_company_member(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    run_guarded(&state, Guard::CompanyMember, req, next).await
}

pub async fn require_dashboard_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    run_guarded(&state, Guard::DashboardAccess, req, next).await
}

/// Role must be in the gate paired with the state.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use lydia_auth::RoleGate;
/// use lydia_models::Role;
///
/// let routes = Router::new()
///     .route("/platform/access", get(handler))
///     .route_layer(middleware::from_fn_with_state(
///         (state.clone(), RoleGate::new([Role::Admin, Role::SuperAdmin])),
///         require_roles,
///     ));
/// ```
pub async fn require_roles(
    State((state, gate)): State<(AppState, RoleGate)>,
    req: Request,
    next: Next,
) -> Response {
    run_guarded(&state, Guard::Roles(gate), req, next).await
}
