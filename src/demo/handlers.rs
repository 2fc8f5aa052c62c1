//! Demo route handlers.
//!
//! Each handler is a pure function of the seeded dataset and the request
//! context (path id, query, body). List handlers filter first and paginate
//! second. Mutations answer with a shallow merge of a template record and
//! the request body but never write to the dataset, so later list reads
//! are unaffected.

use serde::Serialize;
use serde_json::{Map, Value, json};

use super::fixtures::Fixtures;
use super::query::QueryParams;
use crate::auth::models::CurrentUser;
use crate::auth::session::now_ms;
use crate::http::ApiResponse;

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_MIME: &str = "application/pdf";

/// Compliance score shown on the dashboard.
const DASHBOARD_SCORE: u32 = 72;

const PREVIEW_TEXT: &str = "GLOBALCO INTERNATIONAL LTD\n12 Commerce St, Suite 600\nTax ID: 100123456\n\n\
PAYROLL TAX RETURN, MARCH 2026\n\nTotal Gross Salary:   USD 385,000\nTotal Tax Deducted:   USD  55,300\n\
Net Payable:          USD 329,700\n\nFiled via online tax portal on 05 March 2026.";

/// Everything a handler may look at besides the dataset.
#[derive(Debug, Clone, Default)]
pub struct RouteContext {
    /// The `{id}` path segment, for item routes.
    pub id: Option<String>,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl RouteContext {
    fn body_str(&self, key: &str) -> Option<&str> {
        self.body.as_ref()?.get(key)?.as_str()
    }
}

// =============================================================================
// RESPONSE HELPERS
// =============================================================================

fn ok(value: &Value) -> ApiResponse {
    ApiResponse::json(200, value)
}

fn created(value: &Value) -> ApiResponse {
    ApiResponse::json(201, value)
}

fn no_content() -> ApiResponse {
    ApiResponse::empty(204)
}

fn not_found() -> ApiResponse {
    ApiResponse::json(404, &json!({ "detail": "Not found." }))
}

fn blob(mime: &str, bytes: &[u8]) -> ApiResponse {
    ApiResponse::new(200, Some(mime.to_string()), bytes.to_vec())
}

fn to_json<T: Serialize>(item: &T) -> Value {
    serde_json::to_value(item).unwrap_or(Value::Null)
}

/// `{count, next, previous, results}` over the filtered items.
fn paginate(items: Vec<Value>, query: &QueryParams) -> ApiResponse {
    let page = query.positive("page", 1);
    let size = query.positive("page_size", DEFAULT_PAGE_SIZE);
    let count = items.len();
    let start = (page - 1).saturating_mul(size);
    let results: Vec<Value> = items.into_iter().skip(start).take(size).collect();
    ok(&json!({ "count": count, "next": null, "previous": null, "results": results }))
}

/// Top-level keys of `body` overwrite those of `base`.
fn merge(mut base: Value, body: Option<&Value>) -> Value {
    if let (Value::Object(fields), Some(Value::Object(patch))) = (&mut base, body) {
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
    }
    base
}

fn with_field(mut value: Value, key: &str, field: Value) -> Value {
    if let Value::Object(fields) = &mut value {
        fields.insert(key.to_string(), field);
    }
    value
}

/// The record with `id`, or the first record when the id is unknown.
fn find_or_first<'a, T>(items: &'a [T], id: Option<&str>, key: impl Fn(&T) -> &str) -> Option<&'a T> {
    items
        .iter()
        .find(|item| Some(key(item)) == id)
        .or_else(|| items.first())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}-new-{}", now_ms())
}

// =============================================================================
// AUTH
// =============================================================================

pub fn login(_: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let user = CurrentUser::demo_for_email(ctx.body_str("email").unwrap_or_default());
    let ts = now_ms();
    ok(&json!({ "access": format!("demo-access-{ts}"), "refresh": format!("demo-refresh-{ts}"), "user": user }))
}

pub fn refresh(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    ok(&json!({ "access": "demo-access-refreshed" }))
}

pub fn empty_object(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    ok(&json!({}))
}

pub fn delete(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    no_content()
}

// =============================================================================
// COMPLIANCE
// =============================================================================

pub fn compliance_dashboard(f: &Fixtures, _: &RouteContext) -> ApiResponse {
    let count = |status: &str| f.compliance_records.iter().filter(|r| r.status == status).count();
    ok(&json!({
        "score": DASHBOARD_SCORE,
        "compliant": count("compliant"),
        "pending": count("pending"),
        "overdue": count("overdue"),
        "total": f.compliance_records.len(),
    }))
}

pub fn compliance_records(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let q = &ctx.query;
    let items = f
        .compliance_records
        .iter()
        .filter(|r| q.filter("status").is_none_or(|s| r.status == s))
        .filter(|r| q.filter("authority").is_none_or(|a| r.authority == a))
        .filter(|r| q.filter("search").is_none_or(|s| contains_ci(r.requirement_title, s)))
        .map(to_json)
        .collect();
    paginate(items, q)
}

pub fn compliance_record_update(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    find_or_first(&f.compliance_records, ctx.id.as_deref(), |r| r.id)
        .map_or_else(not_found, |r| ok(&merge(to_json(r), ctx.body.as_ref())))
}

// =============================================================================
// EMPLOYEES
// =============================================================================

pub fn departments(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    paginate(f.departments.iter().map(to_json).collect(), &ctx.query)
}

pub fn employees_bulk_import(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    ok(&json!({ "created": 3, "errors": [] }))
}

pub fn employees_export(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    blob(XLSX_MIME, b"")
}

pub fn employees(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let q = &ctx.query;
    let items = f
        .employees
        .iter()
        .filter(|e| q.filter("employment_status").is_none_or(|s| e.employment_status == s))
        .filter(|e| q.filter("contract_type").is_none_or(|c| e.contract_type == c))
        .filter(|e| q.filter("department").is_none_or(|d| e.department == d))
        .filter(|e| {
            q.filter("search").is_none_or(|s| {
                contains_ci(e.full_name, s) || contains_ci(e.email, s) || contains_ci(e.employee_number, s)
            })
        })
        .map(to_json)
        .collect();
    paginate(items, q)
}

pub fn employee_create(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let Some(template) = f.employees.first() else { return not_found() };
    let record = merge(to_json(template), ctx.body.as_ref());
    created(&with_field(record, "id", json!(new_id("emp"))))
}

pub fn employee_get(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    find_or_first(&f.employees, ctx.id.as_deref(), |e| e.id).map_or_else(not_found, |e| ok(&to_json(e)))
}

pub fn employee_update(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    find_or_first(&f.employees, ctx.id.as_deref(), |e| e.id)
        .map_or_else(not_found, |e| ok(&merge(to_json(e), ctx.body.as_ref())))
}

// =============================================================================
// DOCUMENTS
// =============================================================================

pub fn documents(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let q = &ctx.query;
    let items = f
        .documents
        .iter()
        .filter(|d| match q.filter("status") {
            Some("expired") => d.is_expired(),
            Some(status) => d.status == status,
            None => true,
        })
        .filter(|d| q.filter("document_type").is_none_or(|t| d.document_type == t))
        .filter(|d| q.filter("employee").is_none_or(|e| d.employee == Some(e)))
        .filter(|d| q.flag("expiring_soon") != Some(true) || d.days_until_expiry().is_some_and(|days| days <= 30))
        .filter(|d| {
            q.filter("search")
                .is_none_or(|s| contains_ci(d.title, s) || contains_ci(d.reference_number, s))
        })
        .map(super::fixtures::Document::to_json)
        .collect();
    paginate(items, q)
}

pub fn document_create(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let Some(template) = f.documents.first() else { return not_found() };
    let record = merge(template.to_json(), ctx.body.as_ref());
    created(&with_field(record, "id", json!(new_id("doc"))))
}

pub fn document_download(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    blob(PDF_MIME, b"%PDF-1.4 demo")
}

pub fn document_preview_text(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    ok(&json!({ "extracted_text": PREVIEW_TEXT, "ocr_processed": true }))
}

pub fn document_get(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    find_or_first(&f.documents, ctx.id.as_deref(), |d| d.id).map_or_else(not_found, |d| ok(&d.to_json()))
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

pub fn notifications(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let q = &ctx.query;
    let items = f
        .notifications
        .iter()
        .filter(|n| q.filter("notification_type").is_none_or(|t| n.notification_type == t))
        .filter(|n| q.flag("is_read").is_none_or(|read| n.is_read == read))
        .map(to_json)
        .collect();
    paginate(items, q)
}

pub fn notification_update(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    find_or_first(&f.notifications, ctx.id.as_deref(), |n| n.id)
        .map_or_else(not_found, |n| ok(&merge(to_json(n), ctx.body.as_ref())))
}

// =============================================================================
// AUDIT LOGS
// =============================================================================

pub fn audit_logs(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let q = &ctx.query;
    let items = f
        .audit_logs
        .iter()
        .filter(|l| q.filter("method").is_none_or(|m| l.method == m))
        .filter(|l| {
            q.filter("search")
                .is_none_or(|s| contains_ci(l.user_email, s) || contains_ci(l.path, s))
        })
        .map(to_json)
        .collect();
    paginate(items, q)
}

// =============================================================================
// REPORTS
// =============================================================================

pub fn reports(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let q = &ctx.query;
    let items = f
        .reports
        .iter()
        .filter(|r| q.filter("report_type").is_none_or(|t| r.report_type == t))
        .filter(|r| q.flag("is_ready").is_none_or(|ready| r.is_ready == ready))
        .map(to_json)
        .collect();
    paginate(items, q)
}

/// New reports start generating: not ready, titled from the body.
pub fn report_create(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    let Some(template) = f.reports.first() else { return not_found() };
    let mut overrides = Map::new();
    overrides.insert("id".into(), json!(format!("rep-{}", now_ms())));
    overrides.insert("is_ready".into(), json!(false));
    overrides.insert("title".into(), json!(ctx.body_str("title").unwrap_or("New Report")));
    created(&merge(to_json(template), Some(&Value::Object(overrides))))
}

pub fn report_download(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    blob(PDF_MIME, b"%PDF-1.4 report")
}

// =============================================================================
// COMPANY
// =============================================================================

pub fn company_me(f: &Fixtures, _: &RouteContext) -> ApiResponse {
    ok(&to_json(&f.company))
}

pub fn company_export(_: &Fixtures, _: &RouteContext) -> ApiResponse {
    blob(crate::http::types::JSON_MIME, b"{}")
}

pub fn company_update(f: &Fixtures, ctx: &RouteContext) -> ApiResponse {
    ok(&merge(to_json(&f.company), ctx.body.as_ref()))
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;
