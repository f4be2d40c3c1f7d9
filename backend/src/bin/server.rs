//! Fraud evaluation HTTP server binary.
//!
//! Loads the evaluation catalog, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Built-in sample catalog
//! cargo run --bin fraud-eval-server
//!
//! # Catalog from a TOML file
//! EVALUATION_CONFIG=./evaluation.toml cargo run --bin fraud-eval-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `EVALUATION_CONFIG`: Path to a catalog TOML file (optional)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fraud_eval::db::RepositoryFactory;
use fraud_eval::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting fraud evaluation server");

    let repository = RepositoryFactory::from_env()?;
    let periods = repository.list_periods().await?;
    info!("Evaluation catalog loaded with {} periods", periods.len());

    let app = create_router(AppState::new(repository));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
