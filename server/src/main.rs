use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

use tracing_subscriber::EnvFilter;

mod config;
mod http;
mod routes;

use config::ServerConfig;
use routes::AppState;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::from_config(&config));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, provider = state.provider_label(), "statdesk server listening");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    http::handle_connection(&mut stream, |req| routes::dispatch(&state, req));
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to accept connection"),
        }
    }
}
