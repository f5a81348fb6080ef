//! Breed Catalog API Server
//!
//! CRUD service for a catalog of animal breeds.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::csv::read_breeds_csv;
use adapters::PostgresBreedRepository;
use app::{BreedService, CatalogSync};
use config::Config;
use domain::ports::BreedRepository;

/// Application state shared across all handlers
pub struct AppState<R>
where
    R: BreedRepository,
{
    pub breed_service: Arc<BreedService<R>>,
}

impl<R> AppState<R>
where
    R: BreedRepository,
{
    pub fn new(breeds: Arc<R>) -> Self {
        Self {
            breed_service: Arc::new(BreedService::new(breeds)),
        }
    }
}

// Manual impl: a derive would require `R: Clone`
impl<R> Clone for AppState<R>
where
    R: BreedRepository,
{
    fn clone(&self) -> Self {
        Self {
            breed_service: self.breed_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over any breed repository
pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: BreedRepository + 'static,
{
    let v1 = Router::new()
        .route(
            "/breeds",
            get(handlers::list_breeds::<R>).post(handlers::create_breed::<R>),
        )
        .route(
            "/breeds/name/:breed_name",
            get(handlers::get_breed::<R>)
                .put(handlers::put_breed::<R>)
                .delete(handlers::delete_breed::<R>),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/v1", v1)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

/// Insert the breeds of a reference CSV file that are not stored yet
async fn sync_catalog<R>(breeds: Arc<R>, config: &Config) -> anyhow::Result<()>
where
    R: BreedRepository,
{
    let Some(path) = &config.breeds_csv_path else {
        tracing::info!("BREEDS_CSV_PATH not set, skipping catalog sync");
        return Ok(());
    };

    let reference = read_breeds_csv(path).context("cannot convert csv data")?;
    let report = CatalogSync::new(breeds)
        .sync(reference)
        .await
        .context("cannot insert csv data in datastore")?;

    tracing::info!(
        found = report.found,
        inserted = report.inserted.len(),
        "Catalog synced from {}",
        path.display()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,breed_catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Breed Catalog API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let breed_repo = Arc::new(PostgresBreedRepository::new(db));

    sync_catalog(breed_repo.clone(), &config).await?;

    let app = build_router(AppState::new(breed_repo));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Service started and listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
