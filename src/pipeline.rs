//! Pipeline — wires the outbound request chain.
//!
//! ARCHITECTURE
//! ============
//! Feature requests flow through three stages, outermost first:
//!
//! ```text
//! ApiClient -> DemoTransport -> BearerTransport -> HttpTransport
//! ```
//!
//! The session manager gets its own, shorter chain (`DemoTransport ->
//! HttpTransport`) so login, refresh and revoke never pass the bearer stage.
//! Both demo stages share one seeded backend and the same credential store,
//! so a demo session answers auth calls and feature calls from the same
//! fixtures.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::auth::bearer::BearerTransport;
use crate::auth::session::SessionManager;
use crate::config::ClientConfig;
use crate::demo::{Delay, DemoBackend, DemoTransport, TokioDelay};
use crate::http::{ApiError, HttpTransport, Transport};
use crate::nav::Navigator;
use crate::store::{CredentialStore, KeyValueStore};

pub struct Pipeline {
    pub session: Arc<SessionManager>,
    /// Outermost stage; everything a feature sends goes through here.
    pub transport: Arc<dyn Transport>,
    pub api: ApiClient,
}

impl Pipeline {
    /// Build the full chain over a real network transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(
        config: &ClientConfig,
        kv: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let network: Arc<dyn Transport> = Arc::new(HttpTransport::new(config.timeouts)?);
        Ok(Self::with_transport(config, kv, navigator, network, Arc::new(TokioDelay)))
    }

    /// Build the chain over an arbitrary innermost transport and delay.
    #[must_use]
    pub fn with_transport(
        config: &ClientConfig,
        kv: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        network: Arc<dyn Transport>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        let credentials = CredentialStore::new(kv);
        let backend = Arc::new(DemoBackend::seeded());

        let session_transport = Arc::new(DemoTransport::new(
            Arc::clone(&network),
            credentials.clone(),
            Arc::clone(&backend),
            config.demo_latency,
            Arc::clone(&delay),
        ));
        let session = Arc::new(SessionManager::new(
            credentials.clone(),
            session_transport,
            navigator,
            config.api_base_url.as_str(),
        ));

        let bearer = Arc::new(BearerTransport::new(network, Arc::clone(&session), config.refresh_mode));
        let transport: Arc<dyn Transport> =
            Arc::new(DemoTransport::new(bearer, credentials, backend, config.demo_latency, delay));
        let api = ApiClient::new(Arc::clone(&transport), config.api_base_url.as_str());

        tracing::debug!(api = %config.api_base_url, mode = ?config.refresh_mode, "request pipeline ready");
        Self { session, transport, api }
    }
}


#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
