//! Application setup and runtime.

use crate::{db, http};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::net::SocketAddr;
use tracing::info;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub db: SqlitePool,
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let db_url =
    std::env::var("MAILDESK_DATABASE").unwrap_or_else(|_| "sqlite://maildesk.db".to_string());
  let db_url = db::ensure_sqlite_path(&db_url);
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;
  db::run_migrations(&pool).await?;

  if std::env::var("MAILDESK_SEED").as_deref() != Ok("0") {
    db::seed_if_empty(&pool).await?;
  }

  let state = AppState { db: pool.clone() };
  let app = http::build_router(state);

  let addr: SocketAddr = std::env::var("MAILDESK_ADDR")
    .unwrap_or_else(|_| "127.0.0.1:8025".to_string())
    .parse()?;

  info!("email API:  http://{}/emails", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
