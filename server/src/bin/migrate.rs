use anyhow::{Context, Result};
use exercise_tracker::AppConfig;
use sql_connection::{SqlMigrator, connect_postgres_db};
use tracing::{Level, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::from_env()?;
    let db_config = config
        .database
        .context("DATABASE_URL must be set to run migrations")?;

    let db = connect_postgres_db(&db_config).await?;
    info!("Connected to database successfully");

    let migrator = SqlMigrator::new(db);
    migrator.run_all_migrations().await?;

    for name in migrator.list_applied_migrations().await? {
        info!("applied: {}", name);
    }

    Ok(())
}
