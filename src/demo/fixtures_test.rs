use super::*;

fn doc(fixtures: &Fixtures, id: &str) -> Document {
    fixtures.documents.iter().find(|d| d.id == id).unwrap().clone()
}

#[test]
fn seed_counts() {
    let f = Fixtures::seed();
    assert_eq!(f.departments.len(), 5);
    assert_eq!(f.employees.len(), 7);
    assert_eq!(f.documents.len(), 9);
    assert_eq!(f.compliance_records.len(), 8);
    assert_eq!(f.notifications.len(), 6);
    assert_eq!(f.audit_logs.len(), 10);
    assert_eq!(f.reports.len(), 3);
    assert_eq!(f.company.employee_count, f.employees.len());
}

#[test]
fn ids_are_unique_and_in_seed_order() {
    let f = Fixtures::seed();
    let ids: Vec<_> = f.employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, ["emp-001", "emp-002", "emp-003", "emp-004", "emp-005", "emp-006", "emp-007"]);

    let doc_ids: std::collections::HashSet<_> = f.documents.iter().map(|d| d.id).collect();
    assert_eq!(doc_ids.len(), f.documents.len());
}

#[test]
fn days_until_expiry_counts_from_reference_date() {
    let f = Fixtures::seed();
    assert_eq!(doc(&f, "doc-006").days_until_expiry(), Some(13));
    assert_eq!(doc(&f, "doc-002").days_until_expiry(), Some(23));
    assert_eq!(doc(&f, "doc-001").days_until_expiry(), Some(309));
    assert_eq!(doc(&f, "doc-003").days_until_expiry(), None);
}

#[test]
fn expiry_flag_is_computed_not_stored() {
    let f = Fixtures::seed();
    let lapsed = doc(&f, "doc-009");
    assert_eq!(lapsed.status, "active");
    assert!(lapsed.is_expired());
    assert_eq!(lapsed.days_until_expiry(), Some(-10));

    let expired: Vec<_> = f.documents.iter().filter(|d| d.is_expired()).map(|d| d.id).collect();
    assert_eq!(expired, ["doc-009"]);
}

#[test]
fn document_json_carries_expiry_fields() {
    let f = Fixtures::seed();
    let value = doc(&f, "doc-006").to_json();
    assert_eq!(value["days_until_expiry"], 13);
    assert_eq!(value["is_expired"], false);
    assert_eq!(value["file"], "/media/tax-clearance-2026.pdf");

    let never = doc(&f, "doc-005").to_json();
    assert!(never["days_until_expiry"].is_null());
}

#[test]
fn employee_serialises_with_backend_field_names() {
    let f = Fixtures::seed();
    let value = serde_json::to_value(&f.employees[6]).unwrap();
    assert_eq!(value["employment_status"], "probation");
    assert_eq!(value["probation_end_date"], "2026-04-14");
    assert!(value["photo"].is_null());
}
