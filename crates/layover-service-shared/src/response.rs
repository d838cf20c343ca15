//! Envelope for successful HTTP responses.

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::request_id::REQUEST_ID_HEADER;

/// Successful response body: the payload's fields at the top level plus the
/// request ID and content type, mirroring [`ProblemDetails`](crate::ProblemDetails).
///
/// ```
/// use layover_service_shared::ServiceResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct AirportCount {
///     airports: usize,
/// }
///
/// let response = ServiceResponse::new(AirportCount { airports: 9 }).with_request_id("req-1");
/// assert_eq!(response.request_id.as_deref(), Some("req-1"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    #[serde(flatten)]
    pub data: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            request_id: None,
            content_type: "application/json".to_string(),
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// Serialized as JSON; the request ID is echoed in the `x-request-id` header.
impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        let header = self
            .request_id
            .as_deref()
            .and_then(|id| HeaderValue::from_str(id).ok());

        let mut response = Json(self).into_response();
        if let Some(value) = header {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Leg {
        iata: String,
        distance: f64,
    }

    fn leg() -> Leg {
        Leg {
            iata: "RIX".to_string(),
            distance: 281.5,
        }
    }

    #[test]
    fn payload_fields_are_flattened() {
        let json = serde_json::to_string(&ServiceResponse::new(leg())).unwrap();

        assert!(json.contains("\"iata\":\"RIX\""));
        assert!(json.contains("\"content_type\":\"application/json\""));
        assert!(!json.contains("\"data\""));
        assert!(!json.contains("request_id"));
    }

    #[test]
    fn request_id_is_serialized_when_present() {
        let response = ServiceResponse::new(leg()).with_request_id("req-7");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["request_id"], "req-7");
    }

    #[test]
    fn request_id_is_echoed_in_header() {
        let response = ServiceResponse::new(leg())
            .with_request_id("req-8")
            .into_response();
        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("req-8")
        );
    }

    #[test]
    fn round_trips_through_json() {
        let json = r#"{"iata":"RIX","distance":281.5,"content_type":"application/json"}"#;
        let response: ServiceResponse<Leg> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data, leg());
        assert!(response.request_id.is_none());
    }
}
