use lydia::lydia_auth::testing::account;
use lydia::lydia_auth::{AuthError, Guard, RoleGate, RouteParams};
use lydia::lydia_core::permissions::DASHBOARD_ACCESS;
use lydia::lydia_models::{Account, Role};

fn member_of(role: Role, company: &str) -> Account {
    let mut account = account("x", role);
    account.company_id = Some(company.to_string());
    account
}

#[test]
fn test_admin_access_matrix() {
    let params = RouteParams::default();
    let expected = [
        (Role::User, false),
        (Role::Manager, false),
        (Role::Admin, true),
        (Role::SuperAdmin, false),
    ];

    for (role, allowed) in expected {
        let result = Guard::AdminAccess.check(&account("x", role), &params);
        assert_eq!(result.is_ok(), allowed, "{role}");
        if !allowed {
            assert!(matches!(result, Err(AuthError::InsufficientRole)));
        }
    }
}

#[test]
fn test_company_scoped_matrix() {
    let own = RouteParams::for_company("c1");
    let other = RouteParams::for_company("c2");
    let expected = [
        (Role::User, false, false),
        (Role::Manager, true, false),
        (Role::Admin, true, true),
        (Role::SuperAdmin, false, false),
    ];

    for (role, own_allowed, other_allowed) in expected {
        let account = member_of(role, "c1");
        assert_eq!(
            Guard::CompanyScopedAccess.check(&account, &own).is_ok(),
            own_allowed,
            "{role} on own company"
        );
        assert_eq!(
            Guard::CompanyScopedAccess.check(&account, &other).is_ok(),
            other_allowed,
            "{role} on other company"
        );
    }
}

#[test]
fn test_company_member_matrix() {
    let own = RouteParams::for_company("c1");
    let other = RouteParams::for_company("c2");

    for role in [Role::User, Role::Manager, Role::SuperAdmin] {
        let account = member_of(role, "c1");
        assert!(Guard::CompanyMember.check(&account, &own).is_ok(), "{role}");
        assert!(matches!(
            Guard::CompanyMember.check(&account, &other),
            Err(AuthError::InsufficientPermission)
        ));
    }

    let admin = account("a", Role::Admin);
    assert!(Guard::CompanyMember.check(&admin, &other).is_ok());
}

#[test]
fn test_dashboard_permission_is_additive() {
    let params = RouteParams::default();

    for role in Role::ALL {
        let mut account = account("x", role);
        account.permissions.push(DASHBOARD_ACCESS.to_string());
        assert!(Guard::DashboardAccess.check(&account, &params).is_ok(), "{role}");
    }
}

#[test]
fn test_other_permissions_do_not_grant_dashboard() {
    let mut account = account("x", Role::Manager);
    account.permissions = vec!["calls_access".to_string(), "dashboard".to_string()];

    assert!(matches!(
        Guard::DashboardAccess.check(&account, &RouteParams::default()),
        Err(AuthError::InsufficientPermission)
    ));
}

#[test]
fn test_explicit_role_gate() {
    let guard = Guard::Roles(RoleGate::new([Role::Admin, Role::SuperAdmin]));
    let params = RouteParams::default();

    assert!(guard.check(&account("x", Role::SuperAdmin), &params).is_ok());
    assert!(guard.check(&account("x", Role::Admin), &params).is_ok());
    assert!(matches!(
        guard.check(&account("x", Role::Manager), &params),
        Err(AuthError::InsufficientRole)
    ));
}

#[test]
fn test_guards_ignore_inactive_flag() {
    // Deactivation is enforced by the resolver before any guard runs
    let mut admin = account("a", Role::Admin);
    admin.active = false;
    assert!(Guard::AdminAccess.check(&admin, &RouteParams::default()).is_ok());
}
