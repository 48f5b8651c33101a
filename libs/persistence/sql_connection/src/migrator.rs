use tracing::info;

use crate::sql_connect::SqlConnect;

/// Migrations in application order. Each file may hold several statements.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_create_users",
        include_str!(
            "../../../../domains/users/migrations/sql/001_create_users.sql"
        ),
    ),
    (
        "002_create_exercises",
        include_str!(
            "../../../../domains/exercises/migrations/sql/002_create_exercises.sql"
        ),
    ),
];

/// Applies the SQL migrations that are not yet recorded in `_migrations`.
pub struct SqlMigrator {
    db: SqlConnect,
}

impl SqlMigrator {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    pub fn migration_names() -> impl Iterator<Item = &'static str> {
        MIGRATIONS.iter().map(|(name, _)| *name)
    }

    pub async fn run_all_migrations(&self) -> anyhow::Result<()> {
        self.create_migration_table().await?;

        for (migration_name, migration_sql) in MIGRATIONS {
            if self.is_migration_applied(migration_name).await? {
                info!("Migration {} already applied, skipping", migration_name);
                continue;
            }

            info!("Running migration: {}", migration_name);

            let mut client = self.db.get_client().await?;
            let tx = client.transaction().await?;

            tx.batch_execute(migration_sql).await.map_err(|e| {
                anyhow::anyhow!(
                    "Failed to run migration {}: {}",
                    migration_name,
                    e
                )
            })?;
            tx.execute(
                "INSERT INTO _migrations (name, applied_at) VALUES ($1, NOW())",
                &[migration_name],
            )
            .await?;

            tx.commit().await?;
            info!("Migration {} completed successfully", migration_name);
        }

        Ok(())
    }

    pub async fn list_applied_migrations(&self) -> anyhow::Result<Vec<String>> {
        self.create_migration_table().await?;

        let client = self.db.get_client().await?;
        let rows = client
            .query("SELECT name FROM _migrations ORDER BY id", &[])
            .await?;

        Ok(rows.iter().map(|row| row.get(0)).collect())
    }

    async fn create_migration_table(&self) -> anyhow::Result<()> {
        let client = self.db.get_client().await?;
        client
            .batch_execute(
                "CREATE TABLE IF NOT EXISTS _migrations (
                    id SERIAL PRIMARY KEY,
                    name VARCHAR(255) NOT NULL UNIQUE,
                    applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                )",
            )
            .await?;
        Ok(())
    }

    async fn is_migration_applied(
        &self, migration_name: &str,
    ) -> anyhow::Result<bool> {
        let client = self.db.get_client().await?;
        let row = client
            .query_one(
                "SELECT COUNT(*) FROM _migrations WHERE name = $1",
                &[&migration_name],
            )
            .await?;
        let count: i64 = row.get(0);

        Ok(count > 0)
    }
}
