//! elections-server: division service for the election backend
//!
//! Looks up the divisions (wards, districts) of an election, shows which of
//! them a team has nominations in, and bulk-inserts new divisions under a
//! module. Exposed over HTTP with axum, stored in PostgreSQL via sqlx.

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use service::{DivisionService, ServiceError};
