//! Role allow-lists.

use lydia_models::{Account, Role};

use crate::error::AuthError;

/// Admits an account whose role is exactly one of the listed roles.
///
/// There is no hierarchy: listing [`Role::Admin`] does not admit
/// [`Role::SuperAdmin`]. An empty gate admits nobody.
///
/// # Example
///
/// ```ignore
/// use lydia_auth::RoleGate;
/// use lydia_models::Role;
///
/// let gate = RoleGate::new([Role::Manager, Role::Admin]);
/// gate.check(&account)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGate {
    allowed: Vec<Role>,
}

impl RoleGate {
    pub fn new(allowed: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn allowed(&self) -> &[Role] {
        &self.allowed
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    pub fn check(&self, account: &Account) -> Result<(), AuthError> {
        if self.allows(account.role) {
            Ok(())
        } else {
            tracing::debug!(
                account_id = %account.id,
                role = %account.role,
                allowed = ?self.allowed,
                "Role not in allow-list"
            );
            Err(AuthError::InsufficientRole)
        }
    }
}
