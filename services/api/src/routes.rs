use crate::infra::{AppState, ListQuery};
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use people_iq::analytics::report::insights;
use people_iq::analytics::{generate_report, EmployeeTableLoader, Report};
use people_iq::error::AppError;
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) ml_csv: String,
}

pub(crate) fn prediction_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/predictions", get(list_endpoint))
        .route("/api/v1/predictions/summary", get(summary_endpoint))
        .route("/api/v1/predictions/alerts", get(alerts_endpoint))
        .route("/api/v1/predictions/turnover", get(turnover_endpoint))
        .route("/api/v1/predictions/performance", get(performance_endpoint))
        .route("/api/v1/predictions/absenteeism", get(absenteeism_endpoint))
        .route(
            "/api/v1/predictions/recommendations",
            get(recommendations_endpoint),
        )
        .route(
            "/api/v1/predictions/department/:department",
            get(department_endpoint),
        )
        .route("/api/v1/predictions/employee/:id", get(employee_endpoint))
        .route("/api/v1/predictions/report", post(report_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub(crate) async fn list_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    match query.into_filter() {
        Ok(filter) => Json(insights::paginate(&state.report, &filter)).into_response(),
        Err(message) => error_response(StatusCode::BAD_REQUEST, message),
    }
}

pub(crate) async fn summary_endpoint(Extension(state): Extension<AppState>) -> Response {
    Json(insights::trend_snapshot(&state.report)).into_response()
}

pub(crate) async fn alerts_endpoint(Extension(state): Extension<AppState>) -> Response {
    Json(insights::alert_feed(&state.report)).into_response()
}

pub(crate) async fn turnover_endpoint(Extension(state): Extension<AppState>) -> Response {
    Json(insights::turnover_breakdown(&state.report)).into_response()
}

pub(crate) async fn performance_endpoint(Extension(state): Extension<AppState>) -> Response {
    Json(insights::performance_breakdown(&state.report)).into_response()
}

pub(crate) async fn absenteeism_endpoint(Extension(state): Extension<AppState>) -> Response {
    Json(insights::absenteeism_breakdown(&state.report)).into_response()
}

pub(crate) async fn recommendations_endpoint(Extension(state): Extension<AppState>) -> Response {
    Json(insights::recommendation_breakdown(&state.report)).into_response()
}

pub(crate) async fn department_endpoint(
    Extension(state): Extension<AppState>,
    Path(department): Path<String>,
) -> Response {
    Json(insights::department_predictions(&state.report, &department)).into_response()
}

pub(crate) async fn employee_endpoint(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.report.find(&id) {
        Some(prediction) => Json(prediction).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("employee '{id}' not found")),
    }
}

/// Scores an uploaded feature table without touching the served report.
pub(crate) async fn report_endpoint(
    Json(payload): Json<ReportRequest>,
) -> Result<Json<Report>, AppError> {
    let table = EmployeeTableLoader::from_reader(Cursor::new(payload.ml_csv.into_bytes()))?;
    Ok(Json(generate_report(&table.records, Utc::now())))
}
