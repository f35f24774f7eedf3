/*
 * Responsibility
 * - 起動時のエラー定義 (PORT 範囲外, bind 失敗)
 * - リクエスト処理中のエラーはここに来ない (axum のデフォルト応答に任せる)
 */
use std::io;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid port value: {0}")]
    InvalidPort(String),

    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error")]
    Serve(#[source] io::Error),
}

impl AppError {
    pub fn bind(addr: SocketAddr, source: io::Error) -> Self {
        Self::Bind { addr, source }
    }
}
