//! HTTP — the transport seam shared by every pipeline stage.
//!
//! DESIGN
//! ======
//! A stage is anything implementing [`Transport`]. Stages wrap an inner
//! `Arc<dyn Transport>` and decide whether to answer themselves (demo router),
//! decorate and forward (bearer stage), or hit the network (`HttpTransport`).
//! Requests are borrowed so no stage can mutate the caller's request.

pub mod client;
pub mod types;

pub use client::HttpTransport;
pub use types::{ApiError, ApiRequest, ApiResponse, Method};

/// One stage of the outbound request pipeline.
///
/// Implementations return `Ok` for every HTTP status, including 401 and 5xx.
/// `Err` means no usable response exists.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}
