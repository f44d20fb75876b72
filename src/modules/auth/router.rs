use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::controller::{change_password, login, logout, me};
use crate::middleware::guard::require_auth;
use crate::state::AppState;

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/logout", post(logout))
        .route("/me", get(me))
        .route("/password", put(change_password))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new().route("/login", post(login)).merge(authenticated)
}
