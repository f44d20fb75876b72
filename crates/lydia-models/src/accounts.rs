//! Account domain models.
//!
//! An account is the persisted identity behind a credential. Accounts are
//! never deleted, only deactivated, so `active` is the single switch that
//! revokes every outstanding token of an account.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque account identifier as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Coarse access classifier. Exactly one per account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular member of a company
    User,
    /// Manages a single company
    Manager,
    /// Platform administrator
    Admin,
    /// Bootstrap account created by the seeding script
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::User, Role::Manager, Role::Admin, Role::SuperAdmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Manager => "manager",
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::SuperAdmin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// A persisted account. The password hash is never part of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    /// Company the account belongs to (None for platform staff)
    pub company_id: Option<String>,
    /// Fine-grained grants on top of the role
    #[serde(default)]
    pub permissions: Vec<String>,
    pub active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl Account {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    pub fn belongs_to_company(&self, company_id: &str) -> bool {
        self.company_id.as_deref() == Some(company_id)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(role: Role) -> Account {
        Account {
            id: AccountId::new("u1"),
            first_name: "Ada".to_string(),
            last_name: "Martin".to_string(),
            email: "ada@lydia.ai".to_string(),
            role,
            company_id: Some("c1".to_string()),
            permissions: vec!["dashboard_access".to_string()],
            active: true,
            last_login: None,
        }
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!(
            "owner".parse::<Role>(),
            Err(ParseRoleError("owner".to_string()))
        );
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Role::SuperAdmin).unwrap(),
            r#""superadmin""#
        );
        let role: Role = serde_json::from_str(r#""manager""#).unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn test_account_id_is_transparent() {
        let json = serde_json::to_string(&AccountId::new("u1")).unwrap();
        assert_eq!(json, r#""u1""#);
    }

    #[test]
    fn test_has_permission() {
        let account = account(Role::User);
        assert!(account.has_permission("dashboard_access"));
        assert!(!account.has_permission("billing"));
    }

    #[test]
    fn test_belongs_to_company() {
        let mut account = account(Role::Manager);
        assert!(account.belongs_to_company("c1"));
        assert!(!account.belongs_to_company("c2"));

        account.company_id = None;
        assert!(!account.belongs_to_company("c1"));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(account(Role::Admin).full_name(), "Ada Martin");
    }
}
