mod auth;
mod config;
mod error;
mod handlers;
mod horoscope;
mod logger;
mod session;
mod state;
mod types;

use std::{path::Path, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use config::{Config, Secrets};
use log::{error, info};
use state::AppState;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() {
    if let Err(err) = logger::init() {
        eprintln!("Failed to start logger: {err}");
        return;
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            error!("Environment misconfigured: {err}");
            return;
        }
    };
    let state = AppState::new(config.production, Secrets::from_env());

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", config.addr, err);
            return;
        }
    };

    info!("Starting kosmo at {}", config.addr);
    if let Err(err) = axum::serve(listener, router(state, &config.assets)).await {
        error!("Server stopped: {err}");
    }
}

fn router(state: Arc<AppState>, assets: &Path) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/check", get(auth::check_session))
        .route("/api/horoscope/:sign", get(handlers::horoscope))
        .route("/api/zodiac", get(handlers::signs))
        .route("/api/zodiac/birthday", get(handlers::birthday_sign))
        .fallback_service(ServeDir::new(assets))
        .with_state(state)
}
