use std::sync::Arc;

use tracing::{info, instrument};
use user_commands::CreateUserCommand;
use user_dao::UserStore;
use user_errors::UserError;
use user_responses::CreatedUserResponse;

#[derive(Clone)]
pub struct CreateUserHandler {
    users: Arc<dyn UserStore>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserStore>) -> Self { Self { users } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateUserCommand,
    ) -> Result<CreatedUserResponse, UserError> {
        let saved_user = self.users.create(command).await?;
        info!(user_id = %saved_user.id, "user created");

        Ok(saved_user.into())
    }
}
