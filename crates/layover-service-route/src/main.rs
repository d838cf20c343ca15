//! Layover route HTTP service.
//!
//! # Endpoints
//!
//! - `POST /api/v1/route` - cheapest route between two airports
//! - `GET /api/v1/airports/{iata}` - one airport and its direct connections
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe
//!
//! # Configuration
//!
//! - `LAYOVER_DATA_DIR` - directory with airports.json and connections.json
//! - `LAYOVER_MAX_HOPS` - default hop budget (default: 4)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - json (default) or text

use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use layover_lib::{plan_route, AirportSummary, RouteSummary, Settings};
use layover_service_shared::{
    extract_or_generate_request_id, from_lib_error, health_live, health_ready, init_logging,
    normalize_iata, validate_iata, AppState, LoggingConfig, ProblemDetails, RouteRequest,
    ServiceResponse, Validate,
};

/// Number of suggestions attached to unknown airport lookups.
const SUGGESTION_LIMIT: usize = 3;

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, data).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("route");
    init_logging(&logging_config)?;

    let settings = Settings::from_env()?;
    info!(
        port = settings.port,
        max_hops = settings.max_hops,
        "starting route service"
    );

    let state = AppState::load(None, settings).map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;
    info!(
        airports = state.graph().len(),
        connections = state.graph().connection_count(),
        "application state loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Build the service router.
fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/route", post(route_handler))
        .route("/api/v1/airports/{iata}", get(airport_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle POST /api/v1/route requests.
async fn route_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<RouteRequest>, JsonRejection>,
) -> Response<RouteSummary> {
    let request_id = extract_or_generate_request_id(&headers);

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "rejected route request body");
            return Response::Error(ProblemDetails::bad_request(
                rejection.body_text(),
                request_id.as_str(),
            ));
        }
    };

    info!(
        request_id = %request_id,
        from = %request.from,
        to = %request.to,
        max_hops = ?request.max_hops,
        "handling route request"
    );

    if let Err(problem) = request.validate(request_id.as_str()) {
        return Response::Error(*problem);
    }

    let lib_request = request.to_lib_request(state.settings().max_hops);
    let graph = state.graph();
    let plan = match plan_route(graph, &lib_request) {
        Ok(plan) => plan,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "route planning failed");
            return Response::Error(from_lib_error(&e, request_id.as_str()));
        }
    };

    let summary = RouteSummary::from_plan(graph, &plan);
    info!(
        request_id = %request_id,
        hops = summary.hops,
        total_distance = summary.total_distance,
        elapsed_ms = summary.elapsed_ms,
        "route computed successfully"
    );

    Response::Success(ServiceResponse::new(summary).with_request_id(request_id.as_str()))
}

/// Handle GET /api/v1/airports/{iata} requests.
async fn airport_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(iata): Path<String>,
) -> Response<AirportSummary> {
    let request_id = extract_or_generate_request_id(&headers);

    if let Err(problem) = validate_iata("iata", &iata, request_id.as_str()) {
        return Response::Error(*problem);
    }

    let code = normalize_iata(&iata);
    let graph = state.graph();
    let Some(airport) = graph.airport(&code) else {
        let suggestions = graph.fuzzy_matches(&code, SUGGESTION_LIMIT);
        let detail = if suggestions.is_empty() {
            format!("airport '{}' is not recognized", code)
        } else {
            format!(
                "airport '{}' is not recognized. Did you mean: {}?",
                code,
                suggestions.join(", ")
            )
        };
        return Response::Error(ProblemDetails::unknown_airport(detail, request_id.as_str()));
    };

    let summary = AirportSummary::from_airport(graph, airport);
    Response::Success(ServiceResponse::new(summary).with_request_id(request_id.as_str()))
}
