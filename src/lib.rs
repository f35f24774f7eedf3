/*
 * Responsibility
 * - モジュールの公開 (main.rs と tests/ から使う)
 * - api: ルートとハンドラ / app: 起動 / config: PORT / error: 起動エラー / middleware: transport 層
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
