//! Route guards — navigation-time gates over session state.
//!
//! Guards only read the session manager's derivations. They perform no I/O
//! and never trigger a refresh; the answer is either allow or a redirect.
//!
//! [`authorize`] applies the console's route table: public pages, guest-only
//! auth pages, the authenticated shell, and role-restricted sections.

use crate::auth::models::Role;
use crate::auth::session::SessionManager;
use crate::nav::{DASHBOARD_ROUTE, LANDING_ROUTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

impl GuardOutcome {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }
}

pub trait RouteGuard: Send + Sync {
    fn check(&self, session: &SessionManager) -> GuardOutcome;
}

/// Signed-in users only; everyone else goes to the landing surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthGuard;

impl RouteGuard for AuthGuard {
    fn check(&self, session: &SessionManager) -> GuardOutcome {
        if session.is_authenticated() { GuardOutcome::Allow } else { GuardOutcome::Redirect(LANDING_ROUTE) }
    }
}

/// Signed-out users only (login pages); signed-in users go to the dashboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct GuestGuard;

impl RouteGuard for GuestGuard {
    fn check(&self, session: &SessionManager) -> GuardOutcome {
        if session.is_authenticated() { GuardOutcome::Redirect(DASHBOARD_ROUTE) } else { GuardOutcome::Allow }
    }
}

/// Signed-in users holding one of `allowed`.
///
/// A signed-in user with the wrong role lacks privilege, so they are sent to
/// the dashboard rather than back to the landing surface.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    allowed: Vec<Role>,
}

impl RoleGuard {
    #[must_use]
    pub fn new(allowed: &[Role]) -> Self {
        Self { allowed: allowed.to_vec() }
    }
}

impl RouteGuard for RoleGuard {
    fn check(&self, session: &SessionManager) -> GuardOutcome {
        if !session.is_authenticated() {
            return GuardOutcome::Redirect(LANDING_ROUTE);
        }
        if session.has_role(&self.allowed) { GuardOutcome::Allow } else { GuardOutcome::Redirect(DASHBOARD_ROUTE) }
    }
}

/// Run guards in order; the first redirect wins.
#[must_use]
pub fn check_all(guards: &[&dyn RouteGuard], session: &SessionManager) -> GuardOutcome {
    guards
        .iter()
        .map(|g| g.check(session))
        .find(|outcome| !outcome.is_allowed())
        .unwrap_or(GuardOutcome::Allow)
}

// =============================================================================
// CONSOLE ROUTE TABLE
// =============================================================================

const PEOPLE_ROLES: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Hr];
const ADMIN_ROLES: [Role; 2] = [Role::SuperAdmin, Role::Admin];

/// Top-level section of a console path (`/employees/emp-001` -> `employees`).
fn section(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

/// Decide whether navigating to `path` is permitted.
///
/// Unknown sections redirect to the landing surface.
#[must_use]
pub fn authorize(path: &str, session: &SessionManager) -> GuardOutcome {
    match section(path) {
        "landing" => GuardOutcome::Allow,
        "auth" => GuestGuard.check(session),
        "" | "dashboard" | "documents" | "compliance" | "reports" | "notifications" => AuthGuard.check(session),
        "employees" => check_all(&[&AuthGuard, &RoleGuard::new(&PEOPLE_ROLES)], session),
        "audit-logs" | "company" => check_all(&[&AuthGuard, &RoleGuard::new(&ADMIN_ROLES)], session),
        _ => GuardOutcome::Redirect(LANDING_ROUTE),
    }
}

#[cfg(test)]
#[path = "guards_test.rs"]
mod tests;
