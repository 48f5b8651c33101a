use std::{fmt, sync::Arc};

use exercises_dao::{ExerciseDao, ExerciseStore, InMemoryExerciseDao};
use sql_connection::{SqlConnect, SqlMigrator};
use tracing::info;
use user_dao::{InMemoryUserDao, UserDao, UserStore};

#[derive(Clone)]
pub enum Backend {
    Postgres(SqlConnect),
    InMemory,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres(_) => write!(f, "postgres"),
            Self::InMemory => write!(f, "in-memory"),
        }
    }
}

/// The two stores every handler is built from, plus what backs them.
#[derive(Clone)]
pub struct Persistence {
    pub backend: Backend,
    pub users: Arc<dyn UserStore>,
    pub exercises: Arc<dyn ExerciseStore>,
}

impl Persistence {
    /// Applies pending migrations, then wires the PostgreSQL DAOs.
    pub async fn postgres(db: SqlConnect) -> anyhow::Result<Self> {
        SqlMigrator::new(db.clone()).run_all_migrations().await?;
        info!("migrations applied");

        Ok(Self {
            users: Arc::new(UserDao::new(db.clone())),
            exercises: Arc::new(ExerciseDao::new(db.clone())),
            backend: Backend::Postgres(db),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Backend::InMemory,
            users: Arc::new(InMemoryUserDao::new()),
            exercises: Arc::new(InMemoryExerciseDao::new()),
        }
    }

    /// One-line status for the health endpoint.
    pub fn health(&self) -> String {
        match &self.backend {
            Backend::Postgres(db) => {
                let (available, size, max_size) = db.get_pool_status();
                format!(
                    "OK - postgres pool: {available}/{size} available \
                     (max {max_size})"
                )
            }
            Backend::InMemory => "OK - in-memory storage".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_health() {
        let persistence = Persistence::in_memory();

        assert_eq!(persistence.backend.to_string(), "in-memory");
        assert_eq!(persistence.health(), "OK - in-memory storage");
    }
}
