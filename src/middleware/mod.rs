//! Authentication and authorization middleware.
//!
//! - [`auth`]: Builds credential sources from a request, runs the auth chain
//!   and exposes the [`CurrentAccount`](auth::CurrentAccount) extractor
//! - [`guard`]: One route layer per access pattern
//!
//! # Authentication Flow
//!
//! 1. A `require_*` layer collects the `Authorization` header, the `token`
//!    cookie and, when both are absent, a `token` field of a JSON body
//! 2. The credential is validated and its subject loaded from the account store
//! 3. The layer's guard checks role, company and permissions
//! 4. The handler reads the account through `CurrentAccount`
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::guard::require_dashboard_access;
//!
//! let dashboard = Router::new()
//!     .route("/stats", get(stats))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_dashboard_access));
//! ```

pub mod auth;
pub mod guard;
