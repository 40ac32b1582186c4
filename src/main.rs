use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::{http::Method, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod engine;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;
mod state;
mod storage;
mod store;

use config::AppConfig;
use state::AppState;
use storage::{FileStorage, MemoryStorage, Storage};
use store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();
    let app_state = initialize_app_state(&config).await?;

    let app = build_router(app_state);
    start_server(app, &config).await;
    Ok(())
}

async fn initialize_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage: Arc<dyn Storage> = if config.ephemeral_storage {
        tracing::warn!("💾 EPHEMERAL_STORAGE=true, state will not survive a restart");
        Arc::new(MemoryStorage::new())
    } else {
        if let Some(dir) = std::path::Path::new(&config.data_file).parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tracing::info!("💾 Using file store at {}", config.data_file);
        Arc::new(FileStorage::open(&config.data_file).await?)
    };

    let store = Store::new(storage);
    store.ensure_seed_users().await?;

    Ok(AppState::new(store))
}

fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/api/health", get(api_health_check))
        .route("/api/cron/update-matches", get(handlers::cron::update_matches))
        .nest("/api/auth", routes::auth::routes())
        .nest("/api/matches", routes::matches::routes())
        .nest("/api/predictions", routes::predictions::routes())
        .nest("/api/leaderboard", routes::leaderboard::routes())
        .nest("/api/admin", routes::admin::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

async fn start_server(app: Router, config: &AppConfig) {
    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid HOST/PORT {}:{}: {}", config.host, config.port, e);
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Server starting on {}", addr);

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Server error: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    }
}

async fn root_handler() -> &'static str {
    "🏏 Confidence Points Prediction API"
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn api_health_check(State(state): State<AppState>) -> Json<Value> {
    let storage_status = match state.store.users().await {
        Ok(_) => "connected",
        Err(_) => "unavailable",
    };

    Json(json!({
        "status": "healthy",
        "storage": storage_status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
