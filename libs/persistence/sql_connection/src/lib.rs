pub use config::{DbConnectConfig, DbOptionsConfig, PostgresDbConfig};
pub use deadpool_postgres::PoolError;
pub use migrator::SqlMigrator;
pub use sql_connect::SqlConnect;
pub use tokio_postgres::Error as PgError;

pub mod config;
mod connect;
mod migrator;
mod sql_connect;

pub use connect::connect_postgres_db;
