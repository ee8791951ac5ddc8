//! # API Shared
//!
//! Shared request/response definitions for the MediBot APIs.
//!
//! Contains:
//! - JSON request and response types with OpenAPI schemas (`types` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and by anything else that needs to speak the same JSON shapes.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
