/*
 * Responsibility
 * - GET / (固定の挨拶文)
 */
use axum::{http::StatusCode, response::IntoResponse};
use tracing::{debug, instrument};

pub const ROOT_BODY: &str = "Hello from Python Service 2!";

#[instrument]
pub async fn root() -> impl IntoResponse {
    debug!("root endpoint accessed");
    (StatusCode::OK, ROOT_BODY)
}
