//! HTTP request handlers for the report assistant API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers deserialize, call the core and serialize; no report logic lives
//! here.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AssistantError;
use crate::models::ReportRequest;
use crate::policy::DialoguePolicy;
use crate::report::ReportAssembler;

use super::request::{ChatRequest, validate_year};
use super::response::{ApiError, ApiErrorResponse, StatusResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/chat", post(chat_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Handler for POST /report.
///
/// Accepts a structured report request and returns the report rows.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_year(request.year) {
        return error_response(correlation_id, err);
    }

    let registry = state.registry();
    let start_time = Instant::now();
    let result = ReportAssembler::new(state.store(), &registry)
        .with_synthetic_fallback(state.settings().report.synthetic_fallback)
        .assemble(&request);

    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                department = ?request.department,
                rows = report.total,
                synthetic = report.synthetic,
                skipped = report.diagnostics.skipped_unresolved_employee,
                duration_us = start_time.elapsed().as_micros(),
                "Report completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report.rows),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /chat.
///
/// Interprets a free-text prompt and returns the assistant's reply.
async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing chat request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return error_response(correlation_id, err);
    }

    let registry = state.registry();
    let start_time = Instant::now();
    let response = DialoguePolicy::new(state.store(), &registry)
        .with_synthetic_fallback(state.settings().report.synthetic_fallback)
        .answer(&request.prompt);

    info!(
        correlation_id = %correlation_id,
        rows = response.data.as_ref().map_or(0, Vec::len),
        duration_us = start_time.elapsed().as_micros(),
        "Chat reply ready"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /status.
async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.store().departments() {
        Ok(_) => "connected",
        Err(err) => {
            warn!(error = %err, "Status check could not read departments");
            "error"
        }
    };
    let registry = state.registry();

    Json(StatusResponse {
        status: "running".to_string(),
        database: database.to_string(),
        department_count: registry.departments().len(),
    })
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("Invalid month code") {
                ApiError::new("INVALID_MONTH", body_text)
            } else if body_text.contains("missing field") {
                ApiError::new("INVALID_REQUEST", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_error(ApiErrorResponse::bad_request(error))
}

/// Logs and maps a core error to its HTTP response.
fn error_response(correlation_id: Uuid, err: AssistantError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    json_error(err.into())
}

fn json_error(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
