//! # Lydia Core
//!
//! Core types, errors, and utilities for the Lydia API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification
//! - [`permissions`]: Fine-grained permission names granted to accounts
//!
//! # Example
//!
//! ```ignore
//! use lydia_core::errors::AppError;
//! use lydia_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Company not found"));
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
