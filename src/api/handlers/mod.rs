/*
 * Responsibility
 * - ハンドラの公開
 */
pub mod health;
pub mod root;
