//! # Lydia Auth
//!
//! The request authentication and authorization chain of the Lydia API.
//!
//! Every protected request runs the same linear sequence and stops at the
//! first failing step:
//!
//! ```text
//! CredentialSources ──extract──▶ Credential ──validate──▶ Claims
//!        ──resolve──▶ Account ──guard──▶ authorized
//! ```
//!
//! - [`credential`]: Picks the bearer credential out of header, cookie or body
//! - [`jwt`]: Issues and validates signed credentials
//! - [`resolver`]: Loads the account behind a credential from an [`AccountStore`]
//! - [`gate`]: Exact-match role allow-lists
//! - [`guards`]: Composite access patterns (admin, company, dashboard)
//! - [`pipeline`]: Composes the steps above
//! - [`error`]: The closed set of rejection reasons and their HTTP mapping
//!
//! The crate is framework-agnostic apart from [`AuthError`] implementing
//! `IntoResponse`; the axum middleware that feeds it lives in the server crate.
//!
//! # Example
//!
//! ```ignore
//! use lydia_auth::{AuthPipeline, CredentialSources, Guard, RouteParams};
//!
//! let pipeline = AuthPipeline::from_config(&jwt_config, store);
//! let sources = CredentialSources {
//!     authorization: Some("Bearer eyJhbGciOi...".to_string()),
//!     ..Default::default()
//! };
//! let account = pipeline
//!     .authorize(sources, &Guard::DashboardAccess, &RouteParams::default())
//!     .await?;
//! ```

pub mod claims;
pub mod credential;
pub mod error;
pub mod gate;
pub mod guards;
pub mod jwt;
pub mod pipeline;
pub mod resolver;
pub mod store;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use credential::{Credential, CredentialSources, extract_credential};
pub use error::AuthError;
pub use gate::RoleGate;
pub use guards::{Guard, RouteParams};
pub use jwt::{TokenIssuer, TokenValidator};
pub use pipeline::AuthPipeline;
pub use resolver::IdentityResolver;
pub use store::{AccountLogin, AccountStore};
