use crate::interface_adapters::protocol::{AckResponse, HealthResponse, decode_error_report};
use crate::interface_adapters::state::{SystemClock, TracingErrorLog};
use crate::use_cases::{HealthCheckUseCase, LogErrorUseCase};
use axum::{Json, body::Bytes, http::StatusCode};

const INVALID_JSON: &str = "Invalid JSON";

// Handler for client-side error reports. The body is decoded by hand so any
// malformed payload maps to a plain-text 400 regardless of Content-Type.
pub async fn log_error(body: Bytes) -> Result<Json<AckResponse>, (StatusCode, &'static str)> {
    let payload = decode_error_report(&body).map_err(|err| {
        tracing::debug!(error = %err, "rejected error report");
        (StatusCode::BAD_REQUEST, INVALID_JSON)
    })?;

    let use_case = LogErrorUseCase {
        log: TracingErrorLog,
    };
    let ack = use_case.execute(payload.into());

    Ok(Json(ack.into()))
}

// Handler for the health check.
pub async fn health() -> Json<HealthResponse> {
    let use_case = HealthCheckUseCase { clock: SystemClock };

    Json(use_case.execute().into())
}

pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

// Fallback for paths outside the API.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
