#![allow(dead_code)]

use std::sync::Once;

use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("service_two=debug,tower_http=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random local port and returns its base URL.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    init_tracing_once();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, service_two::app::build_router())
            .await
            .unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

/// Asks the OS for a free port, then releases it.
pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("Failed to find a free port")
}
