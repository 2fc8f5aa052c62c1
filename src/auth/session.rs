//! Session manager — login, demo login, token refresh and logout.
//!
//! ARCHITECTURE
//! ============
//! The session manager is the only writer of the credential store. Its own
//! calls (login, refresh, revoke) go through the demo router and the real
//! transport but never through the bearer stage, so a refresh can never
//! trigger another refresh, and demo mode answers auth calls from fixtures.
//!
//! TRADE-OFFS
//! ==========
//! Logout clears state synchronously and fires the server-side revocation as
//! a detached task. A failed revoke leaves a server-side refresh token alive
//! until it expires; the local session is gone either way.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;
use tokio::task::JoinHandle;

use super::models::{AuthError, AuthResponse, CurrentUser, ErrorDetail, RefreshResponse, Role};
use crate::http::{ApiRequest, Transport};
use crate::nav::{LANDING_ROUTE, Navigator};
use crate::store::CredentialStore;

pub const LOGIN_PATH: &str = "auth/login/";
pub const REFRESH_PATH: &str = "auth/refresh/";
pub const LOGOUT_PATH: &str = "auth/logout/";

pub struct SessionManager {
    credentials: CredentialStore,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
    api_base_url: String,
}

impl SessionManager {
    /// Build a session manager over persisted credentials.
    ///
    /// If the persisted state is inconsistent (any of the user, access token
    /// and refresh token present without the others) it is cleared.
    pub fn new(
        credentials: CredentialStore,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
        api_base_url: impl Into<String>,
    ) -> Self {
        let has_user = credentials.current_user().is_some();
        let has_token = credentials.access_token().is_some();
        let has_refresh = credentials.refresh_token().is_some();
        if has_user != has_token || has_token != has_refresh {
            tracing::warn!(has_user, has_token, has_refresh, "inconsistent persisted session; clearing");
            if let Err(e) = credentials.clear() {
                tracing::warn!(error = %e, "failed to clear inconsistent session");
            }
        }

        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self { credentials, transport, navigator, api_base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.api_base_url)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Exchange email/password for a token pair and the user record.
    ///
    /// On failure the prior state is left untouched.
    ///
    /// # Errors
    ///
    /// [`AuthError::Rejected`] carries the server's validation detail.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let request = ApiRequest::post(self.endpoint(LOGIN_PATH), json!({ "email": email, "password": password }));

        let response = self
            .transport
            .send(&request)
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if !response.is_success() {
            let detail = ErrorDetail::from_body(response.status, &response.body, "login failed");
            tracing::info!(%email, status = response.status, "login rejected");
            return Err(AuthError::Rejected { status: response.status, detail });
        }

        let auth: AuthResponse = response
            .json_body()
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        // A login served by the demo router keeps the session in demo mode.
        let demo = self.credentials.is_demo();
        self.credentials
            .set_session(&auth.access, &auth.refresh, &auth.user, demo)?;

        tracing::info!(%email, role = %auth.user.role, demo, "logged in");
        Ok(auth)
    }

    /// Start a demo session for `user` without touching the network.
    ///
    /// # Errors
    ///
    /// Returns an error only if the credentials cannot be persisted.
    pub fn login_demo(&self, user: CurrentUser) -> Result<(), AuthError> {
        let ts = now_ms();
        let access = format!("demo-access-{ts}");
        let refresh = format!("demo-refresh-{ts}");
        self.credentials
            .set_session(&access, &refresh, &user, true)?;

        tracing::info!(email = %user.email, role = %user.role, "demo session started");
        Ok(())
    }

    /// Mint a new access token from the stored refresh token.
    ///
    /// Only the access token is overwritten. Errors are returned untouched;
    /// the caller decides whether to log out.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingRefreshToken`] when logged out (no network call),
    /// [`AuthError::Rejected`] when the server refuses the refresh token.
    pub async fn refresh_token(&self) -> Result<String, AuthError> {
        let Some(refresh) = self.credentials.refresh_token() else {
            return Err(AuthError::MissingRefreshToken);
        };

        tracing::debug!("refreshing access token");
        let request = ApiRequest::post(self.endpoint(REFRESH_PATH), json!({ "refresh": refresh }));
        let response = self
            .transport
            .send(&request)
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if !response.is_success() {
            let detail = ErrorDetail::from_body(response.status, &response.body, "token refresh failed");
            return Err(AuthError::Rejected { status: response.status, detail });
        }

        let body: RefreshResponse = response
            .json_body()
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        // Logged out (or re-logged in) while the refresh was in flight.
        if !self.credentials.replace_access_token(&refresh, &body.access)? {
            tracing::info!("session changed during refresh; discarding new token");
            return Err(AuthError::SessionChanged);
        }

        tracing::info!("access token refreshed");
        Ok(body.access)
    }

    /// End the session.
    ///
    /// Outside demo mode a best-effort revoke is spawned first; its handle is
    /// returned so callers may await it, but nothing depends on it. All four
    /// credential fields are then cleared synchronously and the navigator is
    /// sent to the landing surface. Safe to call repeatedly.
    pub fn logout(&self) -> Option<JoinHandle<()>> {
        let snapshot = self.credentials.snapshot();
        let revoke = match snapshot.refresh_token {
            Some(refresh) if !snapshot.is_demo => self.spawn_revoke(refresh, snapshot.access_token),
            _ => None,
        };

        if let Err(e) = self.credentials.clear() {
            tracing::warn!(error = %e, "failed to clear credentials on logout");
        }
        self.navigator.navigate(LANDING_ROUTE);
        tracing::info!("logged out");
        revoke
    }

    fn spawn_revoke(&self, refresh: String, access: Option<String>) -> Option<JoinHandle<()>> {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no async runtime; skipping server-side token revocation");
            return None;
        };

        let mut request = ApiRequest::post(self.endpoint(LOGOUT_PATH), json!({ "refresh": refresh }));
        if let Some(access) = access {
            request = request.with_bearer(&access);
        }
        let transport = Arc::clone(&self.transport);
        Some(runtime.spawn(async move {
            match transport.send(&request).await {
                Ok(resp) if !resp.is_success() => {
                    tracing::debug!(status = resp.status, "token revocation rejected; ignoring");
                }
                Ok(_) => {}
                Err(e) => tracing::debug!(error = %e, "token revocation failed; ignoring"),
            }
        }))
    }

    // =========================================================================
    // DERIVATIONS (no I/O)
    // =========================================================================

    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.credentials.current_user()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    #[must_use]
    pub fn user_role(&self) -> Option<Role> {
        self.current_user().map(|u| u.role)
    }

    /// True when signed in with any of `roles`.
    #[must_use]
    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.user_role().is_some_and(|role| roles.contains(&role))
    }

    #[must_use]
    pub fn company_id(&self) -> Option<String> {
        self.current_user().and_then(|u| u.company_id)
    }

    #[must_use]
    pub fn can_manage_employees(&self) -> bool {
        self.has_role(&[Role::SuperAdmin, Role::Admin, Role::Hr])
    }

    #[must_use]
    pub fn can_manage_finance(&self) -> bool {
        self.has_role(&[Role::SuperAdmin, Role::Admin, Role::Accountant])
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.credentials.access_token()
    }

    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.credentials.is_demo()
    }

    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}

/// Current time as milliseconds since Unix epoch.
pub(crate) fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
