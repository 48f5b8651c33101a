use std::{env, path::PathBuf, str::FromStr};

use anyhow::Context;
use sql_connection::PostgresDbConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONN: u32 = 16;
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// `None` selects the in-memory backend.
    pub database: Option<PostgresDbConfig>,
    pub public_dir: PathBuf,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);

        let database = match lookup("DATABASE_URL").filter(|s| !s.is_empty())
        {
            Some(uri) => {
                Some(PostgresDbConfig {
                    uri,
                    max_conn: Some(
                        parse_var(&lookup, "DB_MAX_CONN")?
                            .unwrap_or(DEFAULT_MAX_CONN),
                    ),
                    min_conn: parse_var(&lookup, "DB_MIN_CONN")?,
                })
            }
            None => None,
        };

        let public_dir = lookup("PUBLIC_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        Ok(Self {
            port,
            database,
            public_dir,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .with_context(|| format!("{key} has an invalid value: {value}"))
        })
        .transpose()
}
