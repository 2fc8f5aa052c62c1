//! Bearer stage — attaches the access token and recovers from expiry.
//!
//! ARCHITECTURE
//! ============
//! Every outbound request is cloned with the current access token (if any)
//! and forwarded. A 401 from anything other than the login endpoint triggers
//! one refresh through the session manager and one retry of the original
//! request with the new token. The retried response is returned as-is, so a
//! second 401 reaches the caller instead of looping.
//!
//! If the refresh fails the session is ended (`logout`) and the refresh
//! error, not the 401, is returned as [`ApiError::SessionExpired`].
//!
//! DESIGN
//! ======
//! Concurrent 401s are coordinated per [`RefreshMode`]:
//!
//! - `SingleFlight`: refreshes are serialised on a tokio mutex. After taking
//!   the lock a request compares the stored token with the one it was sent
//!   with; if they differ another request already refreshed and the retry
//!   goes out without a second refresh call.
//! - `Suppress`: an atomic flag guards the refresh. A 401 that arrives while
//!   the flag is set is passed straight through to its caller. The flag is a
//!   non-reentrant, non-queuing lock.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use super::models::AuthError;
use super::session::{LOGIN_PATH, SessionManager};
use crate::error::ErrorCode;
use crate::http::{ApiError, ApiRequest, ApiResponse, Transport};

/// How concurrent 401s share a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// One refresh at a time; waiters reuse its result.
    #[default]
    SingleFlight,
    /// One refresh at a time; 401s arriving meanwhile are not recovered.
    Suppress,
}

pub struct BearerTransport {
    inner: Arc<dyn Transport>,
    session: Arc<SessionManager>,
    mode: RefreshMode,
    refresh_lock: Mutex<()>,
    is_refreshing: AtomicBool,
}

impl BearerTransport {
    #[must_use]
    pub fn new(inner: Arc<dyn Transport>, session: Arc<SessionManager>, mode: RefreshMode) -> Self {
        Self { inner, session, mode, refresh_lock: Mutex::new(()), is_refreshing: AtomicBool::new(false) }
    }

    #[must_use]
    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    /// Serialise refreshes; reuse a token minted while we waited.
    async fn refresh_single_flight(&self, sent_with: Option<&str>) -> Result<String, AuthError> {
        let _guard = self.refresh_lock.lock().await;
        let minted = self
            .session
            .access_token()
            .filter(|current| Some(current.as_str()) != sent_with);
        if let Some(current) = minted {
            tracing::debug!("access token already refreshed by a concurrent request");
            return Ok(current);
        }
        self.session.refresh_token().await
    }

    /// `None` when another refresh is already running.
    async fn refresh_suppressed(&self) -> Option<Result<String, AuthError>> {
        if self
            .is_refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        let _flag = RefreshingFlag(&self.is_refreshing);
        Some(self.session.refresh_token().await)
    }
}

/// Clears the refreshing flag when the refresh finishes, however it ends.
struct RefreshingFlag<'a>(&'a AtomicBool);

impl Drop for RefreshingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn is_login(url: &str) -> bool {
    url.contains(LOGIN_PATH.trim_end_matches('/'))
}

#[async_trait::async_trait]
impl Transport for BearerTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let sent_with = self.session.access_token();
        let outbound = match &sent_with {
            Some(token) => request.with_bearer(token),
            None => request.clone(),
        };

        let response = self.inner.send(&outbound).await?;
        if !response.is_unauthorized() || is_login(&request.url) {
            return Ok(response);
        }

        let refreshed = match self.mode {
            RefreshMode::SingleFlight => self.refresh_single_flight(sent_with.as_deref()).await,
            RefreshMode::Suppress => match self.refresh_suppressed().await {
                Some(result) => result,
                None => {
                    tracing::debug!(url = %request.url, "refresh in progress; passing 401 through");
                    return Ok(response);
                }
            },
        };

        match refreshed {
            Ok(token) => {
                tracing::debug!(method = %request.method, url = %request.url, "retrying with refreshed token");
                self.inner.send(&request.with_bearer(&token)).await
            }
            // The session was already ended or replaced; leave it alone.
            Err(e @ AuthError::SessionChanged) => Err(ApiError::SessionExpired(e)),
            Err(e) if !self.session.is_authenticated() => {
                tracing::debug!(error = %e, "refresh failed with no session to end");
                Err(ApiError::SessionExpired(e))
            }
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), "token refresh failed; ending session");
                let _ = self.session.logout();
                Err(ApiError::SessionExpired(e))
            }
        }
    }
}

#[cfg(test)]
#[path = "bearer_test.rs"]
mod tests;
