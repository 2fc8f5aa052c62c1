//! AuditShield client: the authenticated request pipeline of the HR and
//! compliance console.
//!
//! ARCHITECTURE
//! ============
//! Feature calls go through [`api::ApiClient`] into a chain of
//! [`http::Transport`] stages built by [`pipeline::Pipeline`]: the demo
//! backend (answers from fixtures when demo mode is on), the bearer stage
//! (attaches the access token, refreshes once on 401) and the real HTTP
//! transport. [`auth::SessionManager`] owns the persisted credentials;
//! [`guards`] decide navigation from its state without any I/O.

pub mod api;
pub mod auth;
pub mod config;
pub mod demo;
pub mod error;
pub mod guards;
pub mod http;
pub mod nav;
pub mod pipeline;
pub mod store;
pub mod theme;
