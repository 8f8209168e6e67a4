use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use slotbook::config::AppConfig;
use slotbook::handlers;
use slotbook::models::Profile;
use slotbook::services::scheduling::Scheduler;
use slotbook::services::uploads::DiskPhotoStore;
use slotbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    std::fs::create_dir_all(&config.upload_dir)
        .with_context(|| format!("failed to create upload directory {}", config.upload_dir))?;

    let photos = DiskPhotoStore::new(config.upload_dir.clone(), config.base_url.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        scheduler: Mutex::new(Scheduler::default()),
        profile: Mutex::new(Profile::default()),
        photos: Box::new(photos),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/slots", get(handlers::slots::get_slots))
        .route("/book", post(handlers::bookings::book_slot))
        .route("/my-bookings", get(handlers::bookings::my_bookings))
        .route("/cancel-booking", post(handlers::bookings::cancel_booking))
        .route("/profile", get(handlers::profile::get_profile))
        .route("/profile", post(handlers::profile::save_profile))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
