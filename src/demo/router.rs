//! Table-driven demo router.
//!
//! Routes are tried in order; the first whose method and pattern match wins.
//! Patterns are slash-separated literal segments plus `{id}`, which captures
//! one non-empty segment. Specific literals (`employees/departments/`) are
//! listed before the `{id}` routes they would otherwise collide with.

use super::fixtures::Fixtures;
use super::handlers::{self as h, RouteContext};
use crate::http::{ApiResponse, Method};

pub type Handler = fn(&Fixtures, &RouteContext) -> ApiResponse;

pub struct Route {
    pub method: Method,
    pub pattern: &'static str,
    pub handler: Handler,
}

const fn route(method: Method, pattern: &'static str, handler: Handler) -> Route {
    Route { method, pattern, handler }
}

pub const ROUTES: &[Route] = &[
    // Auth
    route(Method::Post, "auth/login/", h::login),
    route(Method::Post, "auth/refresh/", h::refresh),
    route(Method::Post, "auth/logout/", h::empty_object),
    // Compliance
    route(Method::Get, "compliance/dashboard/", h::compliance_dashboard),
    route(Method::Get, "compliance/records/", h::compliance_records),
    route(Method::Patch, "compliance/records/{id}/", h::compliance_record_update),
    // Employees
    route(Method::Get, "employees/departments/", h::departments),
    route(Method::Post, "employees/bulk_import/", h::employees_bulk_import),
    route(Method::Get, "employees/export/", h::employees_export),
    route(Method::Get, "employees/", h::employees),
    route(Method::Post, "employees/", h::employee_create),
    route(Method::Get, "employees/{id}/", h::employee_get),
    route(Method::Patch, "employees/{id}/", h::employee_update),
    route(Method::Delete, "employees/{id}/", h::delete),
    // Documents
    route(Method::Get, "documents/", h::documents),
    route(Method::Post, "documents/", h::document_create),
    route(Method::Get, "documents/{id}/download/", h::document_download),
    route(Method::Get, "documents/{id}/preview_text/", h::document_preview_text),
    route(Method::Get, "documents/{id}/", h::document_get),
    route(Method::Delete, "documents/{id}/", h::delete),
    // Notifications
    route(Method::Post, "notifications/mark-all-read/", h::empty_object),
    route(Method::Get, "notifications/", h::notifications),
    route(Method::Patch, "notifications/{id}/", h::notification_update),
    // Audit logs
    route(Method::Get, "audit-logs/", h::audit_logs),
    // Reports
    route(Method::Get, "reports/", h::reports),
    route(Method::Post, "reports/", h::report_create),
    route(Method::Get, "reports/{id}/download/", h::report_download),
    route(Method::Delete, "reports/{id}/", h::delete),
    // Company
    route(Method::Get, "companies/me/", h::company_me),
    route(Method::Get, "companies/export/", h::company_export),
    route(Method::Patch, "companies/{id}/", h::company_update),
];

/// Match `path` against `pattern`. `Some(captured id)` on a match.
#[must_use]
pub fn match_pattern(pattern: &str, path: &str) -> Option<Option<String>> {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    let mut id = None;
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(id),
            (Some("{id}"), Some(segment)) if !segment.is_empty() => id = Some(segment.to_string()),
            (Some(expected), Some(segment)) if expected == segment => {}
            _ => return None,
        }
    }
}

/// First route matching `method` and `path`, with its captured id.
#[must_use]
pub fn resolve(method: Method, path: &str) -> Option<(&'static Route, Option<String>)> {
    ROUTES
        .iter()
        .filter(|r| r.method == method)
        .find_map(|r| match_pattern(r.pattern, path).map(|id| (r, id)))
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
