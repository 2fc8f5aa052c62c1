//! Seeded demo dataset.
//!
//! One company (GlobalCo) with its departments, staff, documents, compliance
//! records, notifications, audit trail and reports. Records are typed and
//! serialised with the backend's field names; the set is read-only once
//! built.
//!
//! Document expiry is derived, not stored: `days_until_expiry` and
//! `is_expired` are computed from `expiry_date` against [`REFERENCE_DATE`],
//! the day the dataset describes.

use serde::Serialize;
use serde_json::{Value, json};
use time::macros::{date, format_description};
use time::Date;

use crate::auth::models::{DEMO_COMPANY_ID, DEMO_COMPANY_NAME};

/// "Today" as far as the dataset is concerned.
pub const REFERENCE_DATE: Date = date!(2026 - 02 - 25);

const DEMO_ADMIN_ID: &str = "demo-user-admin";
const DEMO_ADMIN_EMAIL: &str = "admin@demo.com";
const DEMO_ADMIN_NAME: &str = "Demo Admin";

// =============================================================================
// RECORD TYPES
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub id: &'static str,
    pub name: &'static str,
    pub registration_number: &'static str,
    pub tax_identifier: &'static str,
    pub social_security_identifier: &'static str,
    pub industry: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state_province: &'static str,
    pub country: &'static str,
    pub logo: Option<&'static str>,
    pub fiscal_year_start: u8,
    pub employee_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub employee_count: usize,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: &'static str,
    pub employee_number: &'static str,
    pub full_name: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub gender: &'static str,
    pub date_of_birth: &'static str,
    pub national_id: &'static str,
    pub address: &'static str,
    pub photo: Option<&'static str>,
    pub department: &'static str,
    pub department_name: &'static str,
    pub job_title: &'static str,
    pub contract_type: &'static str,
    pub employment_status: &'static str,
    pub hire_date: &'static str,
    pub contract_end_date: Option<&'static str>,
    pub probation_end_date: Option<&'static str>,
    pub gross_salary: &'static str,
    pub currency_code: &'static str,
    pub social_insurance_number: &'static str,
    pub tax_identifier: &'static str,
    pub is_active: bool,
    pub compliance_score: u8,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: &'static str,
    pub employee: Option<&'static str>,
    pub employee_name: &'static str,
    pub uploaded_by_name: &'static str,
    pub title: &'static str,
    pub document_type: &'static str,
    pub file: String,
    pub file_name: &'static str,
    pub file_size: u64,
    pub mime_type: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub status: &'static str,
    pub expiry_date: Option<&'static str>,
    pub issue_date: &'static str,
    pub reference_number: &'static str,
    pub ocr_processed: bool,
    pub is_encrypted: bool,
    pub checksum: &'static str,
    pub period_start: Option<&'static str>,
    pub period_end: Option<&'static str>,
    pub created_at: &'static str,
}

impl Document {
    /// Whole days from [`REFERENCE_DATE`] to the expiry date; negative once
    /// expired, `None` when the document never expires.
    #[must_use]
    pub fn days_until_expiry(&self) -> Option<i64> {
        let expiry = Date::parse(self.expiry_date?, format_description!("[year]-[month]-[day]")).ok()?;
        Some((expiry - REFERENCE_DATE).whole_days())
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.days_until_expiry().is_some_and(|days| days < 0)
    }

    /// The record as the backend returns it, expiry fields included.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(fields) = &mut value {
            fields.insert("is_expired".into(), json!(self.is_expired()));
            fields.insert("days_until_expiry".into(), json!(self.days_until_expiry()));
        }
        value
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceRecord {
    pub id: &'static str,
    pub requirement: &'static str,
    pub requirement_title: &'static str,
    pub requirement_frequency: &'static str,
    pub category_name: &'static str,
    pub authority: &'static str,
    pub status: &'static str,
    pub period_start: &'static str,
    pub period_end: &'static str,
    pub due_date: &'static str,
    pub completed_date: Option<&'static str>,
    pub notes: &'static str,
    pub is_overdue: bool,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: &'static str,
    pub notification_type: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub is_read: bool,
    pub is_sent_email: bool,
    pub related_object_id: &'static str,
    pub related_object_type: &'static str,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditLog {
    pub id: &'static str,
    pub method: &'static str,
    pub path: &'static str,
    pub status_code: u16,
    pub user: &'static str,
    pub user_email: &'static str,
    pub ip_address: &'static str,
    pub user_agent: &'static str,
    pub duration_ms: u32,
    pub request_body: Value,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: &'static str,
    pub title: &'static str,
    pub report_type: &'static str,
    pub generated_by: &'static str,
    pub generated_by_name: &'static str,
    pub period_start: &'static str,
    pub period_end: &'static str,
    pub is_ready: bool,
    pub parameters: Value,
    pub created_at: &'static str,
}

// =============================================================================
// DATASET
// =============================================================================

#[derive(Debug, Clone)]
pub struct Fixtures {
    pub company: Company,
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
    pub documents: Vec<Document>,
    pub compliance_records: Vec<ComplianceRecord>,
    pub notifications: Vec<Notification>,
    pub audit_logs: Vec<AuditLog>,
    pub reports: Vec<Report>,
}

impl Fixtures {
    #[must_use]
    pub fn seed() -> Self {
        Self {
            company: company(),
            departments: departments(),
            employees: employees(),
            documents: documents(),
            compliance_records: compliance_records(),
            notifications: notifications(),
            audit_logs: audit_logs(),
            reports: reports(),
        }
    }
}

fn company() -> Company {
    Company {
        id: DEMO_COMPANY_ID,
        name: DEMO_COMPANY_NAME,
        registration_number: "CORP/2022/789456",
        tax_identifier: "100123456",
        social_security_identifier: "SS/ER/2022/001",
        industry: "retail",
        phone: "+1 415 200 0000",
        email: "info@globalco.com",
        website: "https://globalco.com",
        address: "12 Commerce St, Suite 600",
        city: "San Francisco",
        state_province: "CA",
        country: "US",
        logo: None,
        fiscal_year_start: 1,
        employee_count: 7,
    }
}

fn departments() -> Vec<Department> {
    let dept = |id, name, description, employee_count| Department {
        id,
        name,
        description,
        employee_count,
        created_at: "2022-01-01T00:00:00Z",
    };
    vec![
        dept("dept-1", "Finance", "Finance & Accounting", 2),
        dept("dept-2", "Human Resources", "HR & People Operations", 1),
        dept("dept-3", "Information Technology", "IT & Systems", 1),
        dept("dept-4", "Marketing & Sales", "Marketing and Sales", 2),
        dept("dept-5", "Administration", "General Administration", 1),
    ]
}

/// Fields shared by every seeded employee; each entry overrides the rest.
fn employee_template() -> Employee {
    Employee {
        id: "",
        employee_number: "",
        full_name: "",
        first_name: "",
        last_name: "",
        email: "",
        phone: "",
        gender: "",
        date_of_birth: "",
        national_id: "",
        address: "",
        photo: None,
        department: "",
        department_name: "",
        job_title: "",
        contract_type: "permanent",
        employment_status: "active",
        hire_date: "",
        contract_end_date: None,
        probation_end_date: None,
        gross_salary: "",
        currency_code: "USD",
        social_insurance_number: "",
        tax_identifier: "",
        is_active: true,
        compliance_score: 0,
        created_at: "",
    }
}

#[allow(clippy::too_many_lines)]
fn employees() -> Vec<Employee> {
    let base = employee_template();
    vec![
        Employee {
            id: "emp-001", employee_number: "EMP-001", full_name: "James Okafor", first_name: "James", last_name: "Okafor",
            email: "james.okafor@globalco.com", phone: "+1 415 100 0001", gender: "M", date_of_birth: "1985-03-15",
            national_id: "A12345678", address: "12 Commerce St, Suite 600", department: "dept-1", department_name: "Finance",
            job_title: "Managing Director", hire_date: "2022-01-15", gross_salary: "120000",
            social_insurance_number: "SSN-100001", tax_identifier: "100-00-0001", compliance_score: 95,
            created_at: "2022-01-15T00:00:00Z", ..base.clone()
        },
        Employee {
            id: "emp-002", employee_number: "EMP-002", full_name: "Sarah Chen", first_name: "Sarah", last_name: "Chen",
            email: "sarah.chen@globalco.com", phone: "+1 415 100 0002", gender: "F", date_of_birth: "1988-07-22",
            national_id: "B23456789", address: "45 Innovation Blvd, Floor 3", department: "dept-2",
            department_name: "Human Resources", job_title: "HR Manager", hire_date: "2022-03-01", gross_salary: "98000",
            social_insurance_number: "SSN-100002", tax_identifier: "100-00-0002", compliance_score: 92,
            created_at: "2022-03-01T00:00:00Z", ..base.clone()
        },
        Employee {
            id: "emp-003", employee_number: "EMP-003", full_name: "David Mensah", first_name: "David", last_name: "Mensah",
            email: "david.mensah@globalco.com", phone: "+1 415 100 0003", gender: "M", date_of_birth: "1990-01-10",
            national_id: "C34567890", address: "78 Finance Ave, Suite 200", department: "dept-1", department_name: "Finance",
            job_title: "Senior Accountant", hire_date: "2022-06-01", gross_salary: "85000",
            social_insurance_number: "SSN-100003", tax_identifier: "100-00-0003", compliance_score: 88,
            created_at: "2022-06-01T00:00:00Z", ..base.clone()
        },
        Employee {
            id: "emp-004", employee_number: "EMP-004", full_name: "Amina Hassan", first_name: "Amina", last_name: "Hassan",
            email: "amina.hassan@globalco.com", phone: "+1 415 100 0004", gender: "F", date_of_birth: "1995-05-30",
            national_id: "D45678901", address: "22 Tech Park, Building B", department: "dept-3",
            department_name: "Information Technology", job_title: "IT Specialist", contract_type: "fixed_term",
            hire_date: "2023-01-15", contract_end_date: Some("2027-01-14"), gross_salary: "78000",
            social_insurance_number: "SSN-100004", tax_identifier: "100-00-0004", compliance_score: 90,
            created_at: "2023-01-15T00:00:00Z", ..base.clone()
        },
        Employee {
            id: "emp-005", employee_number: "EMP-005", full_name: "Marcus Thompson", first_name: "Marcus",
            last_name: "Thompson", email: "marcus.t@globalco.com", phone: "+1 415 100 0005", gender: "M",
            date_of_birth: "1992-11-20", national_id: "E56789012", address: "90 Market St, Floor 12", department: "dept-4",
            department_name: "Marketing & Sales", job_title: "Marketing Manager", hire_date: "2023-04-01",
            gross_salary: "72000", social_insurance_number: "SSN-100005", tax_identifier: "100-00-0005",
            compliance_score: 85, created_at: "2023-04-01T00:00:00Z", ..base.clone()
        },
        Employee {
            id: "emp-006", employee_number: "EMP-006", full_name: "Fatima Al-Rashidi", first_name: "Fatima",
            last_name: "Al-Rashidi", email: "fatima.r@globalco.com", phone: "+1 415 100 0006", gender: "F",
            date_of_birth: "1997-08-12", national_id: "F67890123", address: "5 Admin Plaza, Suite 100", department: "dept-5",
            department_name: "Administration", job_title: "Office Administrator", hire_date: "2023-07-01",
            gross_salary: "55000", social_insurance_number: "SSN-100006", tax_identifier: "100-00-0006",
            compliance_score: 88, created_at: "2023-07-01T00:00:00Z", ..base.clone()
        },
        Employee {
            id: "emp-007", employee_number: "EMP-007", full_name: "Lucas Ferreira", first_name: "Lucas",
            last_name: "Ferreira", email: "lucas.f@globalco.com", phone: "+1 415 100 0007", gender: "M",
            date_of_birth: "1999-02-28", national_id: "G78901234", address: "33 Sales Tower, Floor 5", department: "dept-4",
            department_name: "Marketing & Sales", job_title: "Sales Representative", contract_type: "fixed_term",
            employment_status: "probation", hire_date: "2026-01-15", contract_end_date: Some("2027-01-14"),
            probation_end_date: Some("2026-04-14"), gross_salary: "50000", social_insurance_number: "SSN-100007",
            tax_identifier: "100-00-0007", compliance_score: 70, created_at: "2026-01-15T00:00:00Z", ..base
        },
    ]
}

fn document_template() -> Document {
    Document {
        id: "",
        employee: None,
        employee_name: "",
        uploaded_by_name: DEMO_ADMIN_NAME,
        title: "",
        document_type: "",
        file: String::new(),
        file_name: "",
        file_size: 0,
        mime_type: "application/pdf",
        description: "",
        tags: &[],
        status: "active",
        expiry_date: None,
        issue_date: "",
        reference_number: "",
        ocr_processed: true,
        is_encrypted: true,
        checksum: "",
        period_start: None,
        period_end: None,
        created_at: "",
    }
}

#[allow(clippy::too_many_lines)]
fn documents() -> Vec<Document> {
    let base = document_template();
    let mut docs = vec![
        Document {
            id: "doc-001", title: "Payroll Tax Return March 2026", document_type: "payroll_tax_return",
            file_name: "payroll-tax-march-2026.pdf", file_size: 245_760,
            description: "Monthly payroll tax return for March 2026", tags: &["tax", "payroll"],
            expiry_date: Some("2026-12-31"), issue_date: "2026-03-01", reference_number: "TAX/PAYROLL/2026/03",
            checksum: "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4", period_start: Some("2026-03-01"),
            period_end: Some("2026-03-31"), created_at: "2026-03-05T10:30:00Z", ..base.clone()
        },
        Document {
            id: "doc-002", title: "Social Security Declaration Q1 2026", document_type: "social_security_declaration",
            file_name: "social-sec-q1-2026.pdf", file_size: 184_320,
            description: "Social security quarterly declaration Q1 2026", tags: &["social-security", "q1"],
            expiry_date: Some("2026-03-20"), issue_date: "2026-01-10", reference_number: "SS/2026/Q1/001",
            checksum: "b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5", period_start: Some("2026-01-01"),
            period_end: Some("2026-03-31"), created_at: "2026-01-15T09:00:00Z", ..base.clone()
        },
        Document {
            id: "doc-003", employee: Some("emp-001"), employee_name: "James Okafor",
            title: "Employment Contract, J. Okafor", document_type: "employment_contract",
            file_name: "contract-emp-001.pdf", file_size: 512_000,
            description: "Permanent employment contract, Managing Director", tags: &["contract"],
            issue_date: "2022-01-15", reference_number: "GCO/EMP/2022/001", checksum: "c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6",
            created_at: "2022-01-15T08:00:00Z", ..base.clone()
        },
        Document {
            id: "doc-004", title: "Business Registration Certificate", document_type: "business_registration",
            file_name: "biz-registration.pdf", file_size: 890_880, description: "Company registration certificate",
            tags: &["registration"], expiry_date: Some("2027-06-30"), issue_date: "2022-01-01",
            reference_number: "CORP/2022/789456", checksum: "d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1",
            created_at: "2022-01-05T08:00:00Z", ..base.clone()
        },
        Document {
            id: "doc-005", title: "Annual Audit Report 2025", document_type: "audit_report",
            file_name: "audit-report-2025.pdf", file_size: 2_097_152,
            description: "External audit report, financial year 2025", tags: &["audit"], issue_date: "2026-01-20",
            reference_number: "AUDIT/2025/EXT/001", checksum: "e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2",
            period_start: Some("2025-01-01"), period_end: Some("2025-12-31"), created_at: "2026-01-25T14:00:00Z",
            ..base.clone()
        },
        Document {
            id: "doc-006", title: "Tax Clearance Certificate 2026", document_type: "tax_clearance",
            file_name: "tax-clearance-2026.pdf", file_size: 163_840, description: "Tax authority clearance certificate",
            tags: &["tax", "clearance"], expiry_date: Some("2026-03-10"), issue_date: "2026-01-10",
            reference_number: "TAX/TC/2026/001", checksum: "f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3",
            created_at: "2026-01-12T11:00:00Z", ..base.clone()
        },
        Document {
            id: "doc-007", title: "VAT Return February 2026", document_type: "vat_return",
            file_name: "vat-feb-2026.pdf", file_size: 204_800, description: "Monthly VAT return February 2026",
            tags: &["tax", "vat"], issue_date: "2026-02-20", reference_number: "TAX/VAT/2026/02",
            checksum: "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d5", period_start: Some("2026-02-01"),
            period_end: Some("2026-02-28"), created_at: "2026-02-22T10:00:00Z", ..base.clone()
        },
        Document {
            id: "doc-008", employee: Some("emp-002"), employee_name: "Sarah Chen",
            title: "Employment Contract, S. Chen", document_type: "employment_contract",
            file_name: "contract-emp-002.pdf", file_size: 491_520,
            description: "Permanent employment contract, HR Manager", tags: &["contract"], status: "pending",
            issue_date: "2022-03-01", reference_number: "GCO/EMP/2022/002", ocr_processed: false,
            checksum: "b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e6", created_at: "2022-03-01T08:00:00Z", ..base.clone()
        },
        // Lapsed but never re-filed: still `active`, computed as expired.
        Document {
            id: "doc-009", title: "Fire Safety Inspection Certificate 2025", document_type: "safety_certificate",
            file_name: "fire-safety-2025.pdf", file_size: 153_600, description: "Annual fire safety inspection",
            tags: &["safety"], expiry_date: Some("2026-02-15"), issue_date: "2025-02-15",
            reference_number: "FS/2025/0142", checksum: "c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f7",
            created_at: "2025-02-16T09:00:00Z", ..base
        },
    ];
    for doc in &mut docs {
        doc.file = format!("/media/{}", doc.file_name);
    }
    docs
}

#[allow(clippy::too_many_lines)]
fn compliance_records() -> Vec<ComplianceRecord> {
    let tax = ("Tax Compliance", "Tax Authority");
    let social = ("Social Security", "Social Security Agency");
    let record = |id, requirement, title, frequency, (category, authority): (&'static str, &'static str)| {
        ComplianceRecord {
            id,
            requirement,
            requirement_title: title,
            requirement_frequency: frequency,
            category_name: category,
            authority,
            status: "",
            period_start: "",
            period_end: "",
            due_date: "",
            completed_date: None,
            notes: "",
            is_overdue: false,
            created_at: "",
        }
    };
    vec![
        ComplianceRecord {
            status: "compliant", period_start: "2026-01-01", period_end: "2026-01-31", due_date: "2026-02-15",
            completed_date: Some("2026-02-10"), notes: "Filed via online tax portal.", created_at: "2026-02-10T10:00:00Z",
            ..record("crec-001", "req-001", "Payroll Tax Monthly Filing", "monthly", tax)
        },
        ComplianceRecord {
            status: "compliant", period_start: "2026-02-01", period_end: "2026-02-28", due_date: "2026-03-05",
            completed_date: Some("2026-02-28"), notes: "All contributions remitted.", created_at: "2026-02-28T15:00:00Z",
            ..record("crec-002", "req-002", "Social Security Monthly Contributions", "monthly", social)
        },
        ComplianceRecord {
            status: "pending", period_start: "2026-02-01", period_end: "2026-02-28", due_date: "2026-03-15",
            notes: "Awaiting accountant review.", created_at: "2026-02-25T08:00:00Z",
            ..record("crec-003", "req-003", "VAT Return Filing", "monthly", tax)
        },
        ComplianceRecord {
            status: "pending", period_start: "2026-01-01", period_end: "2026-12-31", due_date: "2026-03-31",
            notes: "Renewal application in progress.", created_at: "2026-02-01T08:00:00Z",
            ..record("crec-004", "req-004", "Business License Renewal", "annually", ("Business Registration", "Business Registry"))
        },
        ComplianceRecord {
            status: "overdue", period_start: "2025-10-01", period_end: "2025-12-31", due_date: "2026-01-31",
            notes: "Not yet submitted. Penalties may apply.", is_overdue: true, created_at: "2026-01-31T00:00:00Z",
            ..record("crec-005", "req-005", "Social Security Q4 2025 Declaration", "quarterly", social)
        },
        ComplianceRecord {
            status: "compliant", period_start: "2025-01-01", period_end: "2025-12-31", due_date: "2026-01-31",
            completed_date: Some("2026-01-28"), notes: "All employment contracts reviewed.",
            created_at: "2026-01-28T14:00:00Z",
            ..record("crec-006", "req-006", "Annual Labour Compliance Audit", "annually", ("Labour Law", "Labour Department"))
        },
        ComplianceRecord {
            status: "pending", period_start: "2025-01-01", period_end: "2025-12-31", due_date: "2026-03-31",
            notes: "Being prepared by accounting team.", created_at: "2026-02-01T08:00:00Z",
            ..record("crec-007", "req-007", "Annual Income Tax Return", "annually", tax)
        },
        ComplianceRecord {
            status: "compliant", period_start: "2026-02-01", period_end: "2026-02-28", due_date: "2026-03-15",
            completed_date: Some("2026-02-25"), notes: "Filed successfully.", created_at: "2026-02-25T09:00:00Z",
            ..record("crec-008", "req-008", "Payroll Tax February 2026 Filing", "monthly", tax)
        },
    ]
}

#[allow(clippy::too_many_lines)]
fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "notif-001",
            notification_type: "document_expiry",
            title: "Tax Clearance Certificate expiring soon",
            body: "Your Tax Clearance Certificate (TAX/TC/2026/001) expires in 13 days on March 10, 2026. \
                   Please renew before the deadline.",
            is_read: false,
            is_sent_email: true,
            related_object_id: "doc-006",
            related_object_type: "document",
            created_at: "2026-02-25T08:00:00Z",
        },
        Notification {
            id: "notif-002",
            notification_type: "compliance_due",
            title: "VAT Return filing due in 18 days",
            body: "VAT Return for February 2026 is due on March 15, 2026. Please complete the filing to avoid penalties.",
            is_read: false,
            is_sent_email: true,
            related_object_id: "crec-003",
            related_object_type: "compliance_record",
            created_at: "2026-02-24T08:00:00Z",
        },
        Notification {
            id: "notif-003",
            notification_type: "document_expiry",
            title: "Social Security Declaration expires in 23 days",
            body: "Social Security Declaration Q1 2026 (SS/2026/Q1/001) will expire on March 20, 2026.",
            is_read: false,
            is_sent_email: false,
            related_object_id: "doc-002",
            related_object_type: "document",
            created_at: "2026-02-23T08:00:00Z",
        },
        Notification {
            id: "notif-004",
            notification_type: "compliance_due",
            title: "Social Security Q4 2025 declaration is overdue",
            body: "Social Security Q4 2025 Declaration was due on January 31 and has not been submitted. \
                   File immediately to avoid fines.",
            is_read: true,
            is_sent_email: true,
            related_object_id: "crec-005",
            related_object_type: "compliance_record",
            created_at: "2026-02-01T09:00:00Z",
        },
        Notification {
            id: "notif-005",
            notification_type: "reminder",
            title: "Annual Tax Return due in 34 days",
            body: "Annual Income Tax Return for 2025 is due on March 31, 2026. Coordinate with your accountant.",
            is_read: false,
            is_sent_email: true,
            related_object_id: "crec-007",
            related_object_type: "compliance_record",
            created_at: "2026-02-22T08:00:00Z",
        },
        Notification {
            id: "notif-006",
            notification_type: "system",
            title: "New employee added to system",
            body: "Lucas Ferreira (EMP-007) has been added as Sales Representative and is currently in probation.",
            is_read: true,
            is_sent_email: false,
            related_object_id: "emp-007",
            related_object_type: "employee",
            created_at: "2026-01-15T08:05:00Z",
        },
    ]
}

fn audit_logs() -> Vec<AuditLog> {
    let log = |id, method, path, status_code, duration_ms, request_body, created_at| AuditLog {
        id,
        method,
        path,
        status_code,
        user: DEMO_ADMIN_ID,
        user_email: DEMO_ADMIN_EMAIL,
        ip_address: "197.157.1.25",
        user_agent: "Mozilla/5.0 Chrome/121",
        duration_ms,
        request_body,
        created_at,
    };
    vec![
        log("alog-001", "POST", "/api/v1/auth/login/", 200, 145, json!({}), "2026-02-25T09:00:00Z"),
        log("alog-002", "GET", "/api/v1/employees/", 200, 32, json!({}), "2026-02-25T09:01:00Z"),
        log("alog-003", "POST", "/api/v1/documents/", 201, 278, json!({ "title": "VAT Return February 2026" }), "2026-02-22T10:02:00Z"),
        log("alog-004", "PATCH", "/api/v1/compliance/records/crec-003/", 200, 54, json!({ "notes": "Awaiting review." }), "2026-02-25T08:30:00Z"),
        log("alog-005", "DELETE", "/api/v1/documents/doc-old-001/", 204, 43, json!({}), "2026-02-20T14:15:00Z"),
        log("alog-006", "POST", "/api/v1/employees/", 201, 165, json!({ "first_name": "Félix", "last_name": "Rugamba" }), "2026-01-15T08:00:00Z"),
        log("alog-007", "GET", "/api/v1/reports/", 200, 28, json!({}), "2026-02-24T16:00:00Z"),
        log("alog-008", "PATCH", "/api/v1/notifications/notif-004/", 200, 25, json!({ "is_read": true }), "2026-02-24T17:00:00Z"),
        log("alog-009", "GET", "/api/v1/compliance/dashboard/", 200, 18, json!({}), "2026-02-25T09:00:05Z"),
        log("alog-010", "POST", "/api/v1/auth/refresh/", 200, 67, json!({}), "2026-02-25T11:00:00Z"),
    ]
}

fn reports() -> Vec<Report> {
    let report = |id, title, report_type, period_start, period_end, is_ready, created_at| Report {
        id,
        title,
        report_type,
        generated_by: DEMO_ADMIN_ID,
        generated_by_name: DEMO_ADMIN_NAME,
        period_start,
        period_end,
        is_ready,
        parameters: json!({}),
        created_at,
    };
    vec![
        report("rep-001", "Audit Readiness Report Q1 2026", "audit_readiness", "2026-01-01", "2026-03-31", true, "2026-02-20T10:00:00Z"),
        report("rep-002", "Employee Summary February 2026", "employee_summary", "2026-02-01", "2026-02-28", true, "2026-02-22T14:00:00Z"),
        report("rep-003", "Tax Filing Summary March 2026", "tax_filing_summary", "2026-03-01", "2026-03-31", false, "2026-02-25T09:30:00Z"),
    ]
}

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod tests;
