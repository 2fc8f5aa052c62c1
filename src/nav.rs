//! Navigation seam.
//!
//! The session manager redirects to the public landing surface on logout and
//! guards answer with redirect targets. Both talk to whatever owns
//! navigation through [`Navigator`].

use std::sync::Mutex;

/// Public landing surface (unauthenticated users end up here).
pub const LANDING_ROUTE: &str = "/landing";

/// Default authenticated landing page.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator for headless use: records the transition in the log.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(%route, "navigate");
    }
}

/// Navigator that remembers every route it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        self.routes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.routes().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(route.to_string());
    }
}
