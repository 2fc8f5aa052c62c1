//! Demo backend — serves the API from seeded fixtures while demo mode is on.
//!
//! ARCHITECTURE
//! ============
//! [`DemoTransport`] is the outermost pipeline stage. With the demo flag
//! set, any request whose URL contains `/api/v1/` is resolved against the
//! route table and answered from [`fixtures::Fixtures`] after a simulated
//! latency. Without the flag, outside the prefix, or when no route matches,
//! the request passes through to the inner stage untouched.
//!
//! Because it sits in front of the bearer stage, a demo session never
//! attempts a real refresh and never touches the network.
//!
//! TRADE-OFFS
//! ==========
//! The dataset is immutable. Writes are answered convincingly but forgotten,
//! so every list read returns the seed.

pub mod fixtures;
pub mod handlers;
pub mod query;
pub mod router;

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::config::{DEFAULT_DEMO_LATENCY_MAX_MS, DEFAULT_DEMO_LATENCY_MIN_MS};
use crate::http::{ApiError, ApiRequest, ApiResponse, Method, Transport};
use crate::store::CredentialStore;
use fixtures::Fixtures;
use handlers::RouteContext;
use query::QueryParams;

/// Marker locating the versioned API root inside a request URL.
pub const API_PREFIX: &str = "/api/v1/";

// =============================================================================
// LATENCY
// =============================================================================

/// Inclusive window simulated responses are delayed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyWindow {
    fn default() -> Self {
        Self { min_ms: DEFAULT_DEMO_LATENCY_MIN_MS, max_ms: DEFAULT_DEMO_LATENCY_MAX_MS }
    }
}

impl LatencyWindow {
    /// No delay at all.
    pub const ZERO: Self = Self { min_ms: 0, max_ms: 0 };

    /// Uniform sample from the window.
    #[must_use]
    pub fn sample(self) -> Duration {
        let ms = if self.min_ms >= self.max_ms {
            self.min_ms
        } else {
            rand::rng().random_range(self.min_ms..=self.max_ms)
        };
        Duration::from_millis(ms)
    }
}

/// Waits out simulated latency. Injected so tests need not sleep for real.
#[async_trait::async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait::async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

// =============================================================================
// BACKEND
// =============================================================================

/// Seeded dataset plus the route table.
pub struct DemoBackend {
    fixtures: Fixtures,
}

impl DemoBackend {
    #[must_use]
    pub fn seeded() -> Self {
        Self { fixtures: Fixtures::seed() }
    }

    #[must_use]
    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// Answer `method` on `resource` (the URL remainder after the API
    /// prefix, query string included). `None` when no route matches.
    #[must_use]
    pub fn handle(&self, method: Method, resource: &str, body: Option<&serde_json::Value>) -> Option<ApiResponse> {
        let (path, query) = resource.split_once('?').unwrap_or((resource, ""));
        let (route, id) = router::resolve(method, path)?;
        let ctx = RouteContext { id, query: QueryParams::parse(query), body: body.cloned() };
        Some((route.handler)(&self.fixtures, &ctx))
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

pub struct DemoTransport {
    inner: Arc<dyn Transport>,
    credentials: CredentialStore,
    backend: Arc<DemoBackend>,
    latency: LatencyWindow,
    delay: Arc<dyn Delay>,
}

impl DemoTransport {
    #[must_use]
    pub fn new(
        inner: Arc<dyn Transport>,
        credentials: CredentialStore,
        backend: Arc<DemoBackend>,
        latency: LatencyWindow,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self { inner, credentials, backend, latency, delay }
    }
}

#[async_trait::async_trait]
impl Transport for DemoTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        if !self.credentials.is_demo() {
            return self.inner.send(request).await;
        }
        let Some(idx) = request.url.find(API_PREFIX) else {
            return self.inner.send(request).await;
        };

        let resource = &request.url[idx + API_PREFIX.len()..];
        let Some(response) = self.backend.handle(request.method, resource, request.body.as_ref()) else {
            tracing::warn!(method = %request.method, %resource, "no demo route; passing through");
            return self.inner.send(request).await;
        };

        self.delay.sleep(self.latency.sample()).await;
        tracing::debug!(method = %request.method, %resource, status = response.status, "served from demo fixtures");
        Ok(response)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
