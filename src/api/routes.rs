/*
 * Responsibility
 * - URL 構造を定義 (/health, /)
 * - 未登録パスは axum のデフォルト (404) に任せる
 */
use axum::{Router, routing::get};

use crate::api::handlers::{health::health, root::root};

pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
}
