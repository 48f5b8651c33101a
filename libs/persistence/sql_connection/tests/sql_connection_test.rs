use sql_connection::SqlMigrator;
use test_utils::{TestPostgresContainer, create_sql_connect};

async fn setup_test_connection() -> anyhow::Result<TestPostgresContainer> {
    TestPostgresContainer::new().await
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_sql_connect_query_one() {
    let container = setup_test_connection().await.unwrap();
    let db = create_sql_connect(&container);

    let client = db.get_client().await.unwrap();
    let row = client.query_one("SELECT 42 AS answer", &[]).await.unwrap();
    let value: i32 = row.get("answer");

    assert_eq!(value, 42);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_pool_status_reports_max_size() {
    let container = setup_test_connection().await.unwrap();
    let db = create_sql_connect(&container);

    let _client = db.get_client().await.unwrap();
    let (_available, size, max_size) = db.get_pool_status();

    assert!(size >= 1);
    assert_eq!(max_size, 10);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_migrations_are_recorded_once() {
    let container = setup_test_connection().await.unwrap();
    let migrator = SqlMigrator::new(create_sql_connect(&container));

    // The container already applied everything; a second run is a no-op.
    migrator.run_all_migrations().await.unwrap();

    let applied = migrator.list_applied_migrations().await.unwrap();
    let expected: Vec<String> =
        SqlMigrator::migration_names().map(String::from).collect();
    assert_eq!(applied, expected);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_exercise_foreign_key_is_enforced() {
    let container = setup_test_connection().await.unwrap();

    let result = container
        .execute_sql(
            "INSERT INTO exercises (id, user_id, description, duration, \
             date) VALUES (gen_random_uuid(), gen_random_uuid(), 'run', 30, \
             CURRENT_DATE)",
        )
        .await;

    assert!(result.is_err());
}
