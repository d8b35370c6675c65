//! # HTTP Server Module
//!
//! Axum front end for the school API. Handlers only translate between HTTP
//! and the validation, ranking and storage modules.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/` - Endpoint documentation
//! - `/addSchool`, `/listSchools`, `/allSchools` - School API

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod school_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use school_routes::{school_routes, SchoolState};
pub use server::HttpServer;
