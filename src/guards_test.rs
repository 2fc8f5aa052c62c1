use super::*;
use crate::auth::models::CurrentUser;
use crate::pipeline::test_helpers::{MockBackend, session_over, test_user};
use std::sync::Arc;

fn signed_in_as(role: Option<Role>) -> (Arc<SessionManager>, Arc<MockBackend>) {
    let backend = Arc::new(MockBackend::new());
    let (session, _) = session_over(&backend);
    if let Some(role) = role {
        let user = CurrentUser { role, ..test_user() };
        session.credentials().set_session("a", "r", &user, false).unwrap();
    }
    (session, backend)
}

// =========================================================================
// single guards
// =========================================================================

#[test]
fn auth_guard() {
    let (anon, _) = signed_in_as(None);
    let (user, _) = signed_in_as(Some(Role::Employee));
    assert_eq!(AuthGuard.check(&anon), GuardOutcome::Redirect(LANDING_ROUTE));
    assert_eq!(AuthGuard.check(&user), GuardOutcome::Allow);
}

#[test]
fn guest_guard() {
    let (anon, _) = signed_in_as(None);
    let (user, _) = signed_in_as(Some(Role::Admin));
    assert_eq!(GuestGuard.check(&anon), GuardOutcome::Allow);
    assert_eq!(GuestGuard.check(&user), GuardOutcome::Redirect(DASHBOARD_ROUTE));
}

#[test]
fn wrong_role_goes_to_dashboard_not_landing() {
    let (hr, _) = signed_in_as(Some(Role::Hr));
    let guard = RoleGuard::new(&[Role::Admin]);
    assert_eq!(guard.check(&hr), GuardOutcome::Redirect(DASHBOARD_ROUTE));
}

#[test]
fn role_guard_sends_anonymous_users_to_landing() {
    let (anon, _) = signed_in_as(None);
    assert_eq!(RoleGuard::new(&[Role::Admin]).check(&anon), GuardOutcome::Redirect(LANDING_ROUTE));
}

#[test]
fn role_guard_allows_any_listed_role() {
    let (acct, _) = signed_in_as(Some(Role::Accountant));
    let guard = RoleGuard::new(&[Role::Admin, Role::Accountant]);
    assert!(guard.check(&acct).is_allowed());
}

#[test]
fn guards_do_no_io() {
    let (session, backend) = signed_in_as(Some(Role::Auditor));
    let _ = AuthGuard.check(&session);
    let _ = GuestGuard.check(&session);
    let _ = RoleGuard::new(&[Role::Admin]).check(&session);
    assert!(backend.requests().is_empty());
}

#[test]
fn check_all_returns_first_redirect() {
    let (anon, _) = signed_in_as(None);
    let outcome = check_all(&[&GuestGuard, &AuthGuard, &RoleGuard::new(&[Role::Admin])], &anon);
    assert_eq!(outcome, GuardOutcome::Redirect(LANDING_ROUTE));
    assert_eq!(check_all(&[], &anon), GuardOutcome::Allow);
}

// =========================================================================
// route table
// =========================================================================

#[test]
fn anonymous_users_see_only_public_pages() {
    let (anon, _) = signed_in_as(None);
    assert!(authorize("/landing", &anon).is_allowed());
    assert!(authorize("/auth/login", &anon).is_allowed());
    for path in ["/", "/dashboard", "/employees", "/audit-logs", "/company/settings"] {
        assert_eq!(authorize(path, &anon), GuardOutcome::Redirect(LANDING_ROUTE), "{path}");
    }
}

#[test]
fn signed_in_users_skip_login_pages() {
    let (user, _) = signed_in_as(Some(Role::Employee));
    assert_eq!(authorize("/auth/login", &user), GuardOutcome::Redirect(DASHBOARD_ROUTE));
}

#[test]
fn employees_section_is_for_people_managers() {
    let (hr, _) = signed_in_as(Some(Role::Hr));
    let (auditor, _) = signed_in_as(Some(Role::Auditor));
    assert!(authorize("/employees/emp-001?tab=docs", &hr).is_allowed());
    assert_eq!(authorize("/employees", &auditor), GuardOutcome::Redirect(DASHBOARD_ROUTE));
}

#[test]
fn admin_sections_reject_hr() {
    let (hr, _) = signed_in_as(Some(Role::Hr));
    let (admin, _) = signed_in_as(Some(Role::SuperAdmin));
    assert_eq!(authorize("/audit-logs", &hr), GuardOutcome::Redirect(DASHBOARD_ROUTE));
    assert!(authorize("/company", &admin).is_allowed());
    assert!(authorize("/documents", &hr).is_allowed());
}

#[test]
fn unknown_sections_go_to_landing() {
    let (admin, _) = signed_in_as(Some(Role::Admin));
    assert_eq!(authorize("/nowhere", &admin), GuardOutcome::Redirect(LANDING_ROUTE));
}
