//! HTTP request handlers for the Compensation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        State,
        rejection::{JsonRejection, StringRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{
    BatchOutcome, BatchSummary, PerformanceScores, calculate_batch,
    calculate_performance_multiplier, calculate_total_compensation,
};
use crate::models::CompensationResult;

use super::csv_batch::{parse_csv, render_csv};
use super::request::parse_json_record;
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/calculate_compensation", post(calculate_handler))
        .route("/api/calculate_compensation/batch", post(batch_handler))
        .route("/api/calculate_compensation/csv", post(csv_handler))
        .route("/api/performance_multiplier", post(performance_multiplier_handler))
        .with_state(state)
}

/// Successful single-record response: the echoed request plus the result.
#[derive(Serialize)]
struct CalculationResponse<'a> {
    inputs_received: &'a Value,
    #[serde(flatten)]
    result: CompensationResult,
}

/// Handler for GET / status checks.
async fn index_handler() -> Json<Value> {
    Json(json!({ "status": "API is running" }))
}

/// Handler for POST /api/calculate_compensation.
///
/// Accepts one JSON record and returns the calculated compensation.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compensation request");

    let body = match read_json(payload, correlation_id) {
        Ok(body) => body,
        Err(err) => return err.into_response(),
    };

    let input = match parse_json_record(&body) {
        Ok(input) => input,
        Err(err) => {
            log_failure(correlation_id, &err);
            return err.into_response();
        }
    };

    let start_time = Instant::now();
    match calculate_total_compensation(state.tables(), &input) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                role_level = %input.role_level,
                base_salary = %result.calculated_base_salary,
                performance_bonus = %result.performance_bonus,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let response = CalculationResponse {
                inputs_received: &body,
                result,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            log_failure(correlation_id, &api_error);
            api_error.into_response()
        }
    }
}

/// Handler for POST /api/calculate_compensation/batch.
///
/// Accepts a JSON array of records. Every row gets either its result or its
/// own error; the response preserves row order.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let body = match read_json(payload, correlation_id) {
        Ok(body) => body,
        Err(err) => return err.into_response(),
    };
    let Some(rows) = body.as_array() else {
        return ApiErrorResponse::bad_request("Request body must be a JSON array of records")
            .into_response();
    };
    info!(correlation_id = %correlation_id, rows = rows.len(), "Processing batch request");

    let start_time = Instant::now();
    let outcomes = calculate_batch(state.tables(), rows.iter().map(parse_json_record));
    let summary = BatchSummary::from_outcomes(&outcomes);

    let results: Vec<Value> = rows
        .iter()
        .zip(&outcomes)
        .map(|(row, outcome)| merge_row(row, outcome))
        .collect();

    info!(
        correlation_id = %correlation_id,
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        duration_us = start_time.elapsed().as_micros(),
        "Batch completed"
    );

    (
        StatusCode::OK,
        Json(json!({ "results": results, "summary": summary })),
    )
        .into_response()
}

/// Handler for POST /api/calculate_compensation/csv.
///
/// Accepts a CSV upload and returns a CSV download with result columns
/// appended to every row.
async fn csv_handler(
    State(state): State<AppState>,
    body: Result<String, StringRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Unreadable CSV upload"
            );
            return ApiErrorResponse::bad_request(format!(
                "Invalid CSV upload: {}",
                rejection.body_text()
            ))
            .into_response();
        }
    };

    let batch = match parse_csv(&body) {
        Ok(batch) => batch,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err.message(), "Rejected CSV upload");
            return err.into_response();
        }
    };
    info!(correlation_id = %correlation_id, rows = batch.rows.len(), "Processing CSV upload");

    let outcomes = calculate_batch(state.tables(), batch.records.iter().cloned());
    let summary = BatchSummary::from_outcomes(&outcomes);

    match render_csv(&batch, &outcomes) {
        Ok(csv) => {
            info!(
                correlation_id = %correlation_id,
                succeeded = summary.succeeded,
                failed = summary.failed,
                "CSV batch completed"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"compensation_results.csv\"",
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => {
            log_failure(correlation_id, &err);
            err.into_response()
        }
    }
}

/// Handler for POST /api/performance_multiplier.
async fn performance_multiplier_handler(
    payload: Result<Json<PerformanceScores>, JsonRejection>,
) -> Response {
    let Json(scores) = match payload {
        Ok(scores) => scores,
        Err(rejection) => return rejection_error(&rejection).into_response(),
    };

    match calculate_performance_multiplier(&scores) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

fn read_json(
    payload: Result<Json<Value>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<Value, ApiErrorResponse> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "JSON rejected");
        rejection_error(&rejection)
    })
}

fn rejection_error(rejection: &JsonRejection) -> ApiErrorResponse {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ApiErrorResponse::bad_request("Request must be JSON")
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiErrorResponse::bad_request(format!("Invalid JSON syntax: {}", err.body_text()))
        }
        other => ApiErrorResponse::bad_request(format!("Invalid request body: {}", other.body_text())),
    }
}

fn merge_row(row: &Value, outcome: &BatchOutcome<ApiErrorResponse>) -> Value {
    let mut merged = match row {
        Value::Object(fields) => fields.clone(),
        other => Map::from_iter([("input".to_string(), other.clone())]),
    };

    match outcome {
        Ok(result) => {
            if let Ok(Value::Object(fields)) = serde_json::to_value(result) {
                merged.extend(fields);
            }
        }
        Err(err) => {
            merged.insert("error".to_string(), Value::String(err.message().to_string()));
        }
    }

    Value::Object(merged)
}

fn log_failure(correlation_id: Uuid, err: &ApiErrorResponse) {
    if err.status.is_server_error() {
        error!(correlation_id = %correlation_id, error = %err.message(), "Calculation failed");
    } else {
        warn!(correlation_id = %correlation_id, error = %err.message(), "Calculation rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::CalculationError;

    #[test]
    fn test_merge_row_appends_error() {
        let row = json!({ "role_level": "Manager", "team_revenue": 1 });
        let outcome: BatchOutcome<ApiErrorResponse> =
            Err(CalculationError::InvalidRoleLevel("Manager".to_string()).into());

        let merged = merge_row(&row, &outcome);
        assert_eq!(merged["role_level"], "Manager");
        assert_eq!(merged["team_revenue"], 1);
        assert_eq!(merged["error"], "Invalid role level: Manager");
    }

    #[test]
    fn test_merge_row_wraps_non_object_input() {
        let outcome: BatchOutcome<ApiErrorResponse> =
            Err(ApiErrorResponse::bad_request("Request must be a JSON object"));

        let merged = merge_row(&json!(42), &outcome);
        assert_eq!(merged["input"], 42);
        assert_eq!(merged["error"], "Request must be a JSON object");
    }
}
