use anyhow::Result;
use chrono::NaiveDate;
use sql_connection::SqlConnect;
use uuid::Uuid;

use crate::postgres::TestPostgresContainer;

/// Create a SQL connection from a test container for use with DAOs and
/// handlers
pub fn create_sql_connect(container: &TestPostgresContainer) -> SqlConnect {
    container.sql_connect()
}

/// Insert a user directly and return its id
pub async fn create_test_user_with_name(
    container: &TestPostgresContainer, name: &str,
) -> Result<Uuid> {
    let user_id = Uuid::now_v7();
    let client = container.pool.get().await?;
    client
        .execute(
            "INSERT INTO users (id, username, created_at) VALUES ($1, $2, \
             NOW())",
            &[&user_id, &name],
        )
        .await?;
    Ok(user_id)
}

pub async fn create_test_user(
    container: &TestPostgresContainer,
) -> Result<Uuid> {
    create_test_user_with_name(container, "Test User").await
}

/// Insert an exercise directly and return its id
pub async fn create_test_exercise(
    container: &TestPostgresContainer, user_id: Uuid, description: &str,
    duration: i32, date: NaiveDate,
) -> Result<Uuid> {
    let exercise_id = Uuid::now_v7();
    let client = container.pool.get().await?;
    client
        .execute(
            "INSERT INTO exercises (id, user_id, description, duration, \
             date) VALUES ($1, $2, $3, $4, $5)",
            &[&exercise_id, &user_id, &description, &duration, &date],
        )
        .await?;
    Ok(exercise_id)
}
