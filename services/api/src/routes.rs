use crate::adapter::{PriorityResponse, RankedPriority};
use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use blood_priority::error::AppError;
use blood_priority::priority::{BloodRequest, BloodRequestInput};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct RankRequest {
    pub(crate) requests: Vec<BloodRequestInput>,
    #[serde(default)]
    pub(crate) evaluated_at: Option<DateTime<Utc>>,
}

pub(crate) fn priority_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/priority", post(priority_endpoint))
        .route("/api/v1/priority/rank", post(rank_endpoint))
        .layer(Extension(state))
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

pub(crate) async fn priority_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<BloodRequestInput>,
) -> Result<Json<PriorityResponse>, AppError> {
    let result = state.engine.score_input(payload, None)?;
    Ok(Json(result.into()))
}

pub(crate) async fn rank_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankRequest>,
) -> Result<Json<Vec<RankedPriority>>, AppError> {
    let RankRequest {
        requests,
        evaluated_at,
    } = payload;

    let evaluated_at = evaluated_at.unwrap_or_else(Utc::now);
    let requests = requests
        .into_iter()
        .map(|input| input.into_request(evaluated_at))
        .collect::<Result<Vec<BloodRequest>, _>>()?;

    let ranked = state
        .engine
        .rank(&requests, Some(evaluated_at))
        .into_iter()
        .map(RankedPriority::from)
        .collect();

    Ok(Json(ranked))
}
