/*
 * Responsibility
 * - 環境変数 PORT の読み込み (起動時に一度だけ)
 * - 未設定・整数でない値はデフォルトポートにフォールバック
 * - 範囲外の整数は起動失敗
 */
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 8002;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = resolve_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self::with_port(port))
    }

    pub fn with_port(port: u16) -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// `None`, empty or anything that is not an integer falls back to [`DEFAULT_PORT`].
/// An integer outside `0..=65535` is rejected.
pub fn resolve_port(raw: Option<&str>) -> Result<u16, AppError> {
    let Some(value) = raw.map(str::trim).filter(|s| is_integer(s)) else {
        return Ok(DEFAULT_PORT);
    };

    value
        .parse::<u16>()
        .map_err(|_| AppError::InvalidPort(value.to_string()))
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
