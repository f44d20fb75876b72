use axum::{Router, middleware, routing::get};
use lydia_auth::RoleGate;
use lydia_models::Role;

use super::controller::{
    admin_access, company_access, company_membership, dashboard_access, platform_access,
};
use crate::middleware::guard::{
    require_admin, require_company_access, require_company_member, require_dashboard_access,
    require_roles,
};
use crate::state::AppState;

pub fn init_access_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/access", get(admin_access))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let platform = Router::new()
        .route("/platform/access", get(platform_access))
        .route_layer(middleware::from_fn_with_state(
            (state.clone(), RoleGate::new([Role::Admin, Role::SuperAdmin])),
            require_roles,
        ));

    let company = Router::new()
        .route("/companies/{company_id}/access", get(company_access))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_company_access,
        ));

    let membership = Router::new()
        .route("/companies/{company_id}/membership", get(company_membership))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_company_member,
        ));

    let dashboard = Router::new()
        .route("/dashboard/access", get(dashboard_access))
        .route_layer(middleware::from_fn_with_state(state, require_dashboard_access));

    Router::new()
        .merge(admin)
        .merge(platform)
        .merge(company)
        .merge(membership)
        .merge(dashboard)
}
