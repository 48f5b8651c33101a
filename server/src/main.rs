use std::net::SocketAddr;

use exercise_tracker::{AppConfig, Persistence, app};
use sql_connection::connect_postgres_db;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let persistence = match &config.database {
        Some(db_config) => {
            info!("Initializing PostgreSQL connection pool...");
            let db = connect_postgres_db(db_config).await?;
            Persistence::postgres(db).await?
        }
        None => {
            warn!("DATABASE_URL is not set, data is kept in memory only");
            Persistence::in_memory()
        }
    };
    info!(backend = %persistence.backend, "storage ready");

    let app = app(persistence, &config.public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Exercise tracker listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
