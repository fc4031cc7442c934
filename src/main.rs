// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use inventory_service::config::AppConfig;
use inventory_service::repositories::{PgCategoryRepository, PgProductRepository};
use inventory_service::services::{CategoryService, ProductService};
use inventory_service::state::AppState;
use inventory_service::web::configure_app_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting inventory service server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  if app_config.run_migrations {
    if let Err(e) = sqlx::migrate!("./migrations").run(&db_pool).await {
      tracing::error!(error = %e, "Failed to apply database migrations.");
      return Err(std::io::Error::other(e.to_string()));
    }
    tracing::info!("Database migrations applied.");
  }

  // Explicit wiring: repositories into services into shared state.
  let category_repository = Arc::new(PgCategoryRepository::new(db_pool.clone()));
  let product_repository = Arc::new(PgProductRepository::new(db_pool.clone()));
  let app_state = AppState {
    categories: Arc::new(CategoryService::new(category_repository.clone())),
    products: Arc::new(ProductService::new(product_repository, category_repository)),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
