//! Auth models — roles, the cached current user, wire types and errors.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::store::StoreError;

// =============================================================================
// ROLE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Hr,
    Accountant,
    Auditor,
    Employee,
}

impl Role {
    pub const ALL: [Role; 6] = [Role::SuperAdmin, Role::Admin, Role::Hr, Role::Accountant, Role::Auditor, Role::Employee];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Hr => "hr",
            Self::Accountant => "accountant",
            Self::Auditor => "auditor",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

// =============================================================================
// CURRENT USER
// =============================================================================

pub const DEMO_COMPANY_ID: &str = "demo-co-001";
pub const DEMO_COMPANY_NAME: &str = "GlobalCo International Ltd";

/// The signed-in user as returned by the login endpoint. Cached next to the
/// tokens and treated as advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub full_name: String,
    pub role: Role,
    #[serde(rename = "company", default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl CurrentUser {
    /// Demo administrator (`admin@demo.com`).
    #[must_use]
    pub fn demo_admin() -> Self {
        Self::demo("demo-user-admin", "admin@demo.com", "Demo", "Admin", Role::Admin)
    }

    /// Demo HR manager (`hr@demo.com`).
    #[must_use]
    pub fn demo_hr() -> Self {
        Self::demo("demo-user-hr", "hr@demo.com", "Demo", "HR", Role::Hr)
    }

    /// Pick the demo preset matching an email; unknown emails get the admin.
    #[must_use]
    pub fn demo_for_email(email: &str) -> Self {
        if email.eq_ignore_ascii_case("hr@demo.com") { Self::demo_hr() } else { Self::demo_admin() }
    }

    fn demo(id: &str, email: &str, first: &str, last: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            full_name: format!("{first} {last}"),
            role,
            company_id: Some(DEMO_COMPANY_ID.to_string()),
            company_name: Some(DEMO_COMPANY_NAME.to_string()),
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// `POST auth/login/` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    pub user: CurrentUser,
}

/// `POST auth/refresh/` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Error body: `{ "detail": "message" }` or `{ "detail": { "field": ["msg"] } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(BTreeMap<String, Vec<String>>),
}

impl ErrorDetail {
    /// Parse a server error body, falling back to a generic message.
    #[must_use]
    pub fn from_body(status: u16, body: &[u8], fallback: &str) -> Self {
        serde_json::from_slice::<ErrorBody>(body)
            .map(|b| b.detail)
            .unwrap_or_else(|_| Self::Message(format!("{fallback} (status {status})")))
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => f.write_str(msg),
            Self::Fields(fields) => {
                let mut first = true;
                for (field, messages) in fields {
                    if !first {
                        f.write_str("; ")?;
                    }
                    first = false;
                    write!(f, "{field}: {}", messages.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// Credential errors from login/refresh. Surfaced verbatim to callers.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The server rejected the credentials or refresh token.
    #[error("credentials rejected (status {status}): {detail}")]
    Rejected { status: u16, detail: ErrorDetail },

    /// No refresh token is stored, so no refresh can be attempted.
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// The session was ended or replaced while a refresh was in flight.
    #[error("session changed while refreshing")]
    SessionChanged,

    /// The auth request produced no response.
    #[error("auth request failed: {0}")]
    Transport(String),

    /// The auth response body was not in the expected shape.
    #[error("auth response decode failed: {0}")]
    Decode(String),

    /// Credentials could not be persisted.
    #[error("credential store failed: {0}")]
    Store(#[from] StoreError),
}

impl ErrorCode for AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "E_AUTH_REJECTED",
            Self::MissingRefreshToken => "E_AUTH_NO_REFRESH_TOKEN",
            Self::SessionChanged => "E_AUTH_SESSION_CHANGED",
            Self::Transport(_) => "E_AUTH_TRANSPORT",
            Self::Decode(_) => "E_AUTH_DECODE",
            Self::Store(_) => "E_AUTH_STORE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
