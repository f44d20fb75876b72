//! Composite access patterns applied after an account has been resolved.
//!
//! Every guard is a pure function of the account and the route parameters,
//! so these checks never touch the store.

use lydia_core::permissions::DASHBOARD_ACCESS;
use lydia_models::{Account, Role};

use crate::error::AuthError;
use crate::gate::RoleGate;

/// Route parameters a guard may consult.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub company_id: Option<String>,
}

impl RouteParams {
    pub fn for_company(company_id: impl Into<String>) -> Self {
        Self {
            company_id: Some(company_id.into()),
        }
    }

    /// Picks the known parameters out of raw path captures.
    ///
    /// Both `company_id` and `companyId` are accepted as the company key.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let company_id = pairs
            .into_iter()
            .find(|(key, _)| matches!(*key, "company_id" | "companyId"))
            .map(|(_, value)| value.to_string());

        Self { company_id }
    }
}

/// What a route requires of the resolved account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// Any active account
    Authenticated,
    /// Role must be in an explicit allow-list
    Roles(RoleGate),
    /// Role must be exactly `admin`
    AdminAccess,
    /// Admin, or a manager/admin of the company named in the route
    CompanyScopedAccess,
    /// Admin, or any account of the company named in the route
    CompanyMember,
    /// Admin, or holder of the `dashboard_access` permission
    DashboardAccess,
}

impl Guard {
    pub fn admin_gate() -> RoleGate {
        RoleGate::new([Role::Admin])
    }

    pub fn check(&self, account: &Account, params: &RouteParams) -> Result<(), AuthError> {
        match self {
            Guard::Authenticated => Ok(()),
            Guard::Roles(gate) => gate.check(account),
            Guard::AdminAccess => Self::admin_gate().check(account),
            Guard::CompanyScopedAccess => {
                if account.role == Role::Admin {
                    return Ok(());
                }
                let in_company = route_company_matches(account, params);
                let manages = matches!(account.role, Role::Manager | Role::Admin);
                if in_company && manages {
                    Ok(())
                } else {
                    Err(AuthError::InsufficientPermission)
                }
            }
            Guard::CompanyMember => {
                if account.role == Role::Admin || route_company_matches(account, params) {
                    Ok(())
                } else {
                    Err(AuthError::InsufficientPermission)
                }
            }
            Guard::DashboardAccess => {
                if account.role == Role::Admin || account.has_permission(DASHBOARD_ACCESS) {
                    Ok(())
                } else {
                    Err(AuthError::InsufficientPermission)
                }
            }
        }
    }

    /// Short label used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Guard::Authenticated => "authenticated",
            Guard::Roles(_) => "roles",
            Guard::AdminAccess => "admin_access",
            Guard::CompanyScopedAccess => "company_scoped_access",
            Guard::CompanyMember => "company_member",
            Guard::DashboardAccess => "dashboard_access",
        }
    }
}

fn route_company_matches(account: &Account, params: &RouteParams) -> bool {
    params
        .company_id
        .as_deref()
        .is_some_and(|company_id| account.belongs_to_company(company_id))
}
