use async_trait::async_trait;
use dao_utils::query_helpers::first_row_or_not_found;
use database_traits::dao::GenericDao;
use sql_connection::SqlConnect;
use tracing::instrument;
use user_commands::CreateUserCommand;
use user_errors::UserError;
use user_models::User;
use uuid::Uuid;

mod memory;

pub use memory::InMemoryUserDao;

/// Any user backend the handlers can be wired to.
pub trait UserStore:
    GenericDao<
        Model = User,
        CreateRequest = CreateUserCommand,
        Error = UserError,
        ID = Uuid,
    >
{
}

impl<T> UserStore for T where
    T: GenericDao<
            Model = User,
            CreateRequest = CreateUserCommand,
            Error = UserError,
            ID = Uuid,
        >
{
}

#[derive(Clone)]
pub struct UserDao {
    db: SqlConnect,
}

impl UserDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row(row: &tokio_postgres::Row) -> User {
        User {
            id: row.get("id"),
            username: row.get("username"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl GenericDao for UserDao {
    type CreateRequest = CreateUserCommand;
    type Error = UserError;
    type ID = Uuid;
    type Model = User;

    #[instrument(skip(self))]
    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Self::Model, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare("SELECT id, username, created_at FROM users WHERE id = $1")
            .await?;
        let rows = client.query(&stmt, &[&id]).await?;

        first_row_or_not_found(&rows, Self::map_row, UserError::NotFound {
            user_id: id,
        })
    }

    #[instrument(skip(self))]
    async fn all(&self) -> Result<Vec<Self::Model>, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT id, username, created_at FROM users ORDER BY \
                 created_at ASC, id ASC",
            )
            .await?;
        let rows = client.query(&stmt, &[]).await?;

        Ok(rows.iter().map(Self::map_row).collect())
    }

    #[instrument(skip(self))]
    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Model, Self::Error> {
        let user = User::new(req.username);
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "INSERT INTO users (id, username, created_at) VALUES ($1, \
                 $2, $3)",
            )
            .await?;
        client
            .execute(&stmt, &[&user.id, &user.username, &user.created_at])
            .await?;

        Ok(user)
    }
}
