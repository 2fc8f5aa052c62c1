//! Authentication — session lifecycle and the bearer/refresh pipeline stage.

pub mod bearer;
pub mod models;
pub mod session;

pub use bearer::{BearerTransport, RefreshMode};
pub use models::{AuthError, CurrentUser, Role};
pub use session::SessionManager;
