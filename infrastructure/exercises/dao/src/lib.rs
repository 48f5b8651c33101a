use async_trait::async_trait;
use dao_utils::{FilteredQuery, query_helpers::param_refs};
use exercises_errors::ExerciseError;
use exercises_models::{Exercise, NewExercise};
use exercises_queries::GetExerciseLogQuery;
use sql_connection::SqlConnect;
use tracing::instrument;

mod memory;

pub use memory::InMemoryExerciseDao;

/// Exercise persistence. Exercises are appended and only ever read back as
/// logs, so there is no lookup by exercise id.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    async fn create(
        &self, req: NewExercise,
    ) -> Result<Exercise, ExerciseError>;

    /// Every stored exercise in log order.
    async fn all(&self) -> Result<Vec<Exercise>, ExerciseError>;

    /// Exercises of `query.user_id` within the query's date range, oldest
    /// first (ties in creation order), capped at `query.limit`.
    async fn find_log(
        &self, query: &GetExerciseLogQuery,
    ) -> Result<Vec<Exercise>, ExerciseError>;
}

const SELECT_EXERCISES: &str =
    "SELECT id, user_id, description, duration, date FROM exercises";
const LOG_ORDER: &str = "date ASC, id ASC";

#[derive(Clone)]
pub struct ExerciseDao {
    db: SqlConnect,
}

impl ExerciseDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row(row: &tokio_postgres::Row) -> Exercise {
        Exercise {
            id: row.get("id"),
            user_id: row.get("user_id"),
            description: row.get("description"),
            duration: row.get("duration"),
            date: row.get("date"),
        }
    }
}

#[async_trait]
impl ExerciseStore for ExerciseDao {
    #[instrument(skip(self))]
    async fn all(&self) -> Result<Vec<Exercise>, ExerciseError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!("{SELECT_EXERCISES} ORDER BY {LOG_ORDER}"))
            .await?;
        let rows = client.query(&stmt, &[]).await?;

        Ok(rows.iter().map(Self::map_row).collect())
    }

    #[instrument(skip(self))]
    async fn create(
        &self, req: NewExercise,
    ) -> Result<Exercise, ExerciseError> {
        let exercise = req.into_exercise();
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "INSERT INTO exercises (id, user_id, description, duration, \
                 date) VALUES ($1, $2, $3, $4, $5)",
            )
            .await?;
        client
            .execute(&stmt, &[
                &exercise.id,
                &exercise.user_id,
                &exercise.description,
                &exercise.duration,
                &exercise.date,
            ])
            .await?;

        Ok(exercise)
    }

    #[instrument(skip(self))]
    async fn find_log(
        &self, query: &GetExerciseLogQuery,
    ) -> Result<Vec<Exercise>, ExerciseError> {
        let (sql, params) = FilteredQuery::new(SELECT_EXERCISES)
            .and_where("user_id", "=", query.user_id)
            .and_where_opt("date", ">=", query.from)
            .and_where_opt("date", "<=", query.to)
            .order_by(LOG_ORDER)
            .limit(
                query
                    .limit
                    .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX)),
            )
            .build();

        let client = self.db.get_client().await?;
        let stmt = client.prepare(&sql).await?;
        let rows = client.query(&stmt, &param_refs(&params)).await?;

        Ok(rows.iter().map(Self::map_row).collect())
    }
}
