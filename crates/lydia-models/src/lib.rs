//! # Lydia Models
//!
//! Domain models and DTOs for the Lydia API.
//!
//! - [`accounts`]: The persisted account record, its identifier and role
//! - [`auth`]: Login request/response bodies
//!
//! # Example
//!
//! ```ignore
//! use lydia_models::{Account, Role};
//!
//! if account.role == Role::Manager && account.belongs_to_company("c-42") {
//!     // Manage company c-42
//! }
//! ```

pub mod accounts;
pub mod auth;

// Re-export commonly used types at crate root for convenience
pub use accounts::{Account, AccountId, ParseRoleError, Role};
pub use auth::{
    AccountResponse, ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse,
};
