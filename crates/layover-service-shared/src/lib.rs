//! Shared infrastructure for the Layover HTTP services.
//!
//! - [`AppState`]: the airport graph built once at startup, plus settings
//! - [`health`]: liveness/readiness probe handlers
//! - [`ProblemDetails`]: RFC 9457 error bodies
//! - [`ServiceResponse`]: envelope for successful bodies
//! - [`logging`]: JSON or text `tracing` setup
//! - [`request_id`]: `X-Request-ID` extraction
//! - Request types with validation
//!
//! Handlers stay thin: parse, validate, call `layover-lib`, format. Enable the
//! `test-utils` feature to use [`test_utils`] from dependent crates.

#![deny(warnings)]

mod health;
pub mod logging;
mod problem;
mod request;
pub mod request_id;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_ROUTE_NOT_FOUND, PROBLEM_UNKNOWN_AIRPORT,
};
pub use request::{normalize_iata, validate_iata, RouteRequest, Validate};
pub use request_id::{extract_or_generate_request_id, RequestId};
pub use response::ServiceResponse;
pub use state::AppState;
