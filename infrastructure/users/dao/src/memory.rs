use async_trait::async_trait;
use database_traits::dao::GenericDao;
use memory_connection::MemoryTable;
use user_commands::CreateUserCommand;
use user_errors::UserError;
use user_models::User;
use uuid::Uuid;

/// Process-local user table. Used when no database is configured and by
/// the handler tests.
#[derive(Clone, Default)]
pub struct InMemoryUserDao {
    table: MemoryTable<User>,
}

impl InMemoryUserDao {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl GenericDao for InMemoryUserDao {
    type CreateRequest = CreateUserCommand;
    type Error = UserError;
    type ID = Uuid;
    type Model = User;

    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Self::Model, Self::Error> {
        self.table
            .find(|user| user.id == id)
            .await
            .ok_or(UserError::NotFound { user_id: id })
    }

    async fn all(&self) -> Result<Vec<Self::Model>, Self::Error> {
        Ok(self.table.all().await)
    }

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Model, Self::Error> {
        Ok(self.table.insert(User::new(req.username)).await)
    }
}
