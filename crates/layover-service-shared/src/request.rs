//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants; the
/// `request_id` becomes its `instance`.
pub trait Validate {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Body of `POST /api/v1/route`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Departure IATA code.
    pub from: String,

    /// Arrival IATA code.
    pub to: String,

    /// Hop budget; the service default applies when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hops: Option<usize>,
}

impl RouteRequest {
    /// Library request with normalized codes and the effective hop budget.
    pub fn to_lib_request(&self, default_max_hops: usize) -> layover_lib::RouteRequest {
        layover_lib::RouteRequest::new(
            normalize_iata(&self.from),
            normalize_iata(&self.to),
            self.max_hops.unwrap_or(default_max_hops),
        )
    }
}

impl Validate for RouteRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        validate_iata("from", &self.from, request_id)?;
        validate_iata("to", &self.to, request_id)?;

        if self.max_hops == Some(0) {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'max_hops' field must be at least 1",
                request_id,
            )));
        }
        Ok(())
    }
}

/// Upper-case and trim an airport code.
pub fn normalize_iata(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Reject empty codes and codes with anything but ASCII letters or digits.
pub fn validate_iata(field: &str, code: &str, request_id: &str) -> Result<(), Box<ProblemDetails>> {
    let code = code.trim();
    if code.is_empty() {
        return Err(Box::new(ProblemDetails::bad_request(
            format!("The '{}' field is required and cannot be empty", field),
            request_id,
        )));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Box::new(ProblemDetails::bad_request(
            format!("The '{}' field must be an airport code, got '{}'", field, code),
            request_id,
        )));
    }
    Ok(())
}
