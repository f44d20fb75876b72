//! Permission names that can be granted to an account on top of its role.
//!
//! Permissions are additive: holding one never removes access that the
//! account's role already gives.
//!
//! # Example
//!
//! ```ignore
//! use lydia_core::permissions;
//!
//! if account.has_permission(permissions::DASHBOARD_ACCESS) {
//!     // Render the analytics dashboard
//! }
//! ```

/// Access to the analytics dashboard regardless of role
pub const DASHBOARD_ACCESS: &str = "dashboard_access";
