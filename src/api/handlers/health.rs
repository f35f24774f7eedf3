/*
 * Responsibility
 * - GET /health (疎通用)
 * - middleware を通す/通さない方針の確認用
 */
use axum::{http::StatusCode, response::IntoResponse};
use tracing::{debug, instrument};

pub const HEALTH_BODY: &str = "Service 2 (Python) is healthy";

#[instrument]
pub async fn health() -> impl IntoResponse {
    debug!("health endpoint accessed");
    (StatusCode::OK, HEALTH_BODY)
}
